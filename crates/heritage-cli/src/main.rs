mod fetch;
mod sync;

use clap::{Parser, Subcommand};
use heritage_client::{ClientConfig, HeritageClient};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "heritage-cli")]
#[command(about = "Heritage open-data feed command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List heritage items, enrich each with its detail record, print JSON
    Fetch {
        /// Number of items to return (1-100)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=100))]
        limit: u16,
        /// Use the compact field set instead of the full one
        #[arg(long)]
        compact: bool,
    },
    /// Print festival events for a month
    Festivals {
        /// Four-digit year; defaults to the current UTC year
        #[arg(long)]
        year: Option<String>,
        /// Two-digit month; defaults to the current UTC month
        #[arg(long)]
        month: Option<String>,
        #[arg(long, default_value_t = 2)]
        limit: usize,
    },
    /// Run the full enrichment pipeline and store the results
    Sync {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=100))]
        limit: u16,
        /// Print what would be stored without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("heritage-cli: no command given; see --help");
        return Ok(());
    };

    let config = heritage_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = HeritageClient::new(ClientConfig::from_app_config(&config))?;

    match command {
        Commands::Fetch { limit, compact } => {
            fetch::run_fetch(&client, usize::from(limit), compact).await?;
        }
        Commands::Festivals { year, month, limit } => {
            fetch::run_festivals(&client, year, month, limit).await?;
        }
        Commands::Sync { limit, dry_run } => {
            let pool = connect(&config).await?;
            sync::run_sync(&pool, &client, usize::from(limit), dry_run).await?;
        }
        Commands::Db { command } => {
            let pool = connect(&config).await?;
            match command {
                DbCommands::Ping => {
                    heritage_db::health_check(&pool).await?;
                    println!("database: ok");
                }
                DbCommands::Migrate => {
                    let applied = heritage_db::run_migrations(&pool).await?;
                    println!("applied {applied} migration(s)");
                }
            }
        }
    }

    Ok(())
}

async fn connect(config: &heritage_core::AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = heritage_db::PoolConfig::from_app_config(config);
    let pool = heritage_db::connect_pool(&config.database_url, pool_config).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests;
