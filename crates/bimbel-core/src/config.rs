use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the listen address as a string in the format "host:port".
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Environment variables read by [`Settings::load`] and the keys they override.
///
/// Keys are listed explicitly because several contain underscores, which a
/// separator-based mapping would split into nested tables.
pub const ENV_OVERRIDES: [(&str, &str); 6] = [
    ("DATABASE_URL", "database.url"),
    ("DATABASE_MAX_CONNECTIONS", "database.max_connections"),
    ("DATABASE_RUN_MIGRATIONS", "database.run_migrations"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("LOGGING_LEVEL", "logging.level"),
];

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(
            config::File::with_name("config.toml").required(false),
            |var| std::env::var(var).ok(),
        )
    }

    /// ## Summary
    /// Loads configuration from `file`, then applies overrides looked up by `env`
    /// for each variable in [`ENV_OVERRIDES`]. Empty values are ignored.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load_from<S, F>(file: S, env: F) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8700)?
            .set_default("database.max_connections", 4)?
            .set_default("database.run_migrations", true)?
            .set_default("logging.level", "debug")?
            .add_source(file);

        for (var, key) in ENV_OVERRIDES {
            let value = env(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        let settings = builder.build()?.try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Rejects settings that deserialize but cannot run a server.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for an empty database URL or a zero-sized pool.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.database.url.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::ConfigError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded environment from dotenv file");
    }

    Settings::load()
}
