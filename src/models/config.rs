use serde::Deserialize;

/// Configuration options specific to the Catalog service.
///
/// Loaded by `main` from `config/default.yaml`, an optional
/// `config/{APP_ENV}.yaml` and `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Listening port.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Glob root for Tera templates.
    pub templates_dir: String,
    /// Cookie signing key for flash messages. Must be at least 64 bytes.
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub pool: PoolConfig,
}

/// Connection pool sizing.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// Seconds a request queues for a free connection before failing with 500.
    /// A very large value makes the queue effectively unbounded.
    #[serde(default = "default_connection_timeout_secs")]
    pub connection_timeout_secs: u64,
}

fn default_max_size() -> u32 {
    10
}

fn default_connection_timeout_secs() -> u64 {
    30
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            connection_timeout_secs: default_connection_timeout_secs(),
        }
    }
}
