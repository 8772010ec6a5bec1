use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["heritage-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn fetch_defaults_to_two_full_items() {
    let cli = Cli::try_parse_from(["heritage-cli", "fetch"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Fetch {
            limit: 2,
            compact: false
        })
    ));
}

#[test]
fn fetch_accepts_compact_and_limit() {
    let cli = Cli::try_parse_from(["heritage-cli", "fetch", "--compact", "--limit", "5"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Fetch {
            limit: 5,
            compact: true
        })
    ));
}

#[test]
fn fetch_rejects_out_of_range_limit() {
    assert!(Cli::try_parse_from(["heritage-cli", "fetch", "--limit", "0"]).is_err());
    assert!(Cli::try_parse_from(["heritage-cli", "fetch", "--limit", "101"]).is_err());
}

#[test]
fn festivals_parses_year_and_month() {
    let cli = Cli::try_parse_from([
        "heritage-cli",
        "festivals",
        "--year",
        "2024",
        "--month",
        "05",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Festivals { year, month, limit }) => {
            assert_eq!(year.as_deref(), Some("2024"));
            assert_eq!(month.as_deref(), Some("05"));
            assert_eq!(limit, 2);
        }
        other => panic!("expected festivals command, got {other:?}"),
    }
}

#[test]
fn sync_supports_dry_run() {
    let cli = Cli::try_parse_from(["heritage-cli", "sync", "--limit", "10", "--dry-run"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Sync {
            limit: 10,
            dry_run: true
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["heritage-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}
