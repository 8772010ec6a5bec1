use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub list_url: String,
    pub detail_url: String,
    pub image_url: String,
    pub festival_url: String,
    /// Items requested per list page (`pageUnit`).
    pub page_size: u32,
    /// Last list page the paginator will request.
    pub max_pages: u32,
    /// Page size used by the image and paged-detail persistence fetches.
    pub persist_page_size: u32,
    pub detail_concurrency: usize,
    /// `0` disables the outbound request timeout.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("list_url", &self.list_url)
            .field("detail_url", &self.detail_url)
            .field("image_url", &self.image_url)
            .field("festival_url", &self.festival_url)
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .field("persist_page_size", &self.persist_page_size)
            .field("detail_concurrency", &self.detail_concurrency)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
