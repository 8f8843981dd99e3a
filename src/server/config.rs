use std::time::Duration;

use crate::server::{
    catalog::config::{default_user_agent, DEFAULT_CATALOG_TIMEOUT, DEFAULT_CATALOG_URL},
    error::config::ConfigError,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
    pub user_agent: String,
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from environment variables
    ///
    /// `DATABASE_URL` takes precedence; without it the Postgres URL is composed from
    /// `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`, which are then required.
    ///
    /// # Returns
    /// - `Ok(Config)` - every required variable is present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - a required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - a numeric variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, the same as an absent variable
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let port = match var("PORT") {
            Some(port) => parse_number::<u16>("PORT", &port)?,
            None => DEFAULT_PORT,
        };

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => {
                let user = required("DB_USER")?;
                let password = required("DB_PASSWORD")?;
                let host = required("DB_HOST")?;
                let db_port = parse_number::<u16>("DB_PORT", &required("DB_PORT")?)?;
                let name = required("DB_NAME")?;

                format!(
                    "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                    user, password, host, db_port, name
                )
            }
        };

        let catalog_timeout = match var("CATALOG_TIMEOUT_SECS") {
            Some(secs) => {
                Duration::from_secs(parse_number::<u64>("CATALOG_TIMEOUT_SECS", &secs)?)
            }
            None => DEFAULT_CATALOG_TIMEOUT,
        };

        Ok(Self {
            port,
            database_url,
            catalog_url: var("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            catalog_timeout,
            user_agent: var("USER_AGENT").unwrap_or_else(default_user_agent),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn parse_number<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("'{}' is not a valid number: {}", value, err),
        })
}
