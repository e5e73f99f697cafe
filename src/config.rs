//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is honoured when present. Only
//! `DATABASE_URL` is required.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | required |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `8080` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_MIN_CONNECTIONS` | `1` |
//! | `DB_SQLX_LOGGING` | `false` |

use std::{net::SocketAddr, str::FromStr};

use sea_orm::ConnectOptions;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_sqlx_logging: bool,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", 8080)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            db_min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1)?,
            db_sqlx_logging: parse_or(&lookup, "DB_SQLX_LOGGING", false)?,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server_host, self.server_port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "SERVER_HOST",
            value: self.server_host.clone(),
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .sqlx_logging(self.db_sqlx_logging);
        opt
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|_| ConfigError::Invalid { key, value })
}
