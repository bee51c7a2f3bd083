//! Daemon settings.
//!
//! Resolution order, last wins: built-in defaults, `homeinv.toml` in the
//! working directory (optional, partial files allowed), `HOMEINV_*`
//! variables, `RUST_LOG`.

use serde::Deserialize;

const CONFIG_FILE: &str = "homeinv.toml";

/// Settings for one `homeinvd` process.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[server]` table.
    pub server: ServerConfig,
    /// `[database]` table.
    pub database: DatabaseConfig,
    /// `[logging]` table.
    pub logging: LoggingConfig,
}

/// Where the API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface address, `0.0.0.0` for all.
    pub host: String,
    /// Must be non-zero.
    pub port: u16,
}

/// Inventory store location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx `SQLite` URL, e.g. `sqlite:homeinv.db?mode=rwc`.
    pub url: String,
}

/// Log output.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Config {
    /// Resolve the settings for this process.
    ///
    /// # Errors
    ///
    /// Fails when `homeinv.toml` cannot be read or parsed, or when the
    /// resolved port or database URL is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Overlay variables found through `var`. Unparsable port values are
    /// ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HOMEINV_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("HOMEINV_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("HOMEINV_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("HOMEINV_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("HOMEINV_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// URL handed to the storage adapter.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:homeinv.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homeinvd=info,homeinv=info,tower_http=debug".to_string(),
        }
    }
}

/// Why settings could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot parse homeinv.toml")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read homeinv.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
