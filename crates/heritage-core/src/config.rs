use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_LIST_URL: &str = "https://www.cha.go.kr/cha/SearchKindOpenapiList.do";
pub const DEFAULT_DETAIL_URL: &str = "https://www.cha.go.kr/cha/SearchKindOpenapiDt.do";
pub const DEFAULT_IMAGE_URL: &str = "http://www.cha.go.kr/cha/SearchImageOpenapi.do";
pub const DEFAULT_FESTIVAL_URL: &str =
    "http://www.cha.go.kr/cha/openapi/selectEventListOpenapi.do";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let positive = |var: &str, value: u32| -> Result<u32, ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let database_url = require("DATABASE_URL")?;

    let env = parse_environment(&or_default("HERITAGE_ENV", "development"));

    let bind_addr = parse("HERITAGE_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("HERITAGE_LOG_LEVEL", "info");

    let list_url = or_default("HERITAGE_LIST_URL", DEFAULT_LIST_URL);
    let detail_url = or_default("HERITAGE_DETAIL_URL", DEFAULT_DETAIL_URL);
    let image_url = or_default("HERITAGE_IMAGE_URL", DEFAULT_IMAGE_URL);
    let festival_url = or_default("HERITAGE_FESTIVAL_URL", DEFAULT_FESTIVAL_URL);

    let page_size = positive("HERITAGE_PAGE_SIZE", parse_u32("HERITAGE_PAGE_SIZE", "100")?)?;
    let max_pages = parse_u32("HERITAGE_MAX_PAGES", "99")?;
    let persist_page_size = positive(
        "HERITAGE_PERSIST_PAGE_SIZE",
        parse_u32("HERITAGE_PERSIST_PAGE_SIZE", "15")?,
    )?;
    let detail_concurrency = parse_usize("HERITAGE_DETAIL_CONCURRENCY", "1")?.max(1);
    let request_timeout_secs = parse_u64("HERITAGE_REQUEST_TIMEOUT_SECS", "0")?;
    let user_agent = or_default("HERITAGE_USER_AGENT", "heritage-proxy/0.1");

    let db_max_connections = parse_u32("HERITAGE_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("HERITAGE_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("HERITAGE_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        list_url,
        detail_url,
        image_url,
        festival_url,
        page_size,
        max_pages,
        persist_page_size,
        detail_concurrency,
        request_timeout_secs,
        user_agent,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
