//! Database connection settings loaded from the environment.

use std::fmt;

use sqlx::postgres::PgConnectOptions;

pub const PG_HOSTNAME: &str = "PG_HOSTNAME";
pub const PG_PORT: &str = "PG_PORT";
pub const PG_DATABASE: &str = "PG_DATABASE";
pub const PG_USERNAME: &str = "PG_USERNAME";
pub const PG_PASSWORD: &str = "PG_PASSWORD";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not defined or it is empty")]
    Missing(&'static str),

    #[error("environment variable {name} has an invalid value: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// PostgreSQL connection settings.
///
/// Every field is mandatory; there are no defaults.
///
/// | Env Var       | Field      |
/// |---------------|------------|
/// | `PG_HOSTNAME` | `host`     |
/// | `PG_PORT`     | `port`     |
/// | `PG_DATABASE` | `database` |
/// | `PG_USERNAME` | `username` |
/// | `PG_PASSWORD` | `password` |
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Load the settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the settings through an arbitrary key lookup.
    ///
    /// Variables are checked in table order and the first one that is
    /// unset or empty is reported. The port is parsed only once all five
    /// are present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let host = require(PG_HOSTNAME)?;
        let port = require(PG_PORT)?;
        let database = require(PG_DATABASE)?;
        let username = require(PG_USERNAME)?;
        let password = require(PG_PASSWORD)?;

        let port = port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: PG_PORT,
            value: port.clone(),
        })?;

        Ok(Self {
            host,
            port,
            database,
            username,
            password,
        })
    }

    /// Build sqlx connect options. The password never passes through a
    /// connection URL string.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
