//! Environment-driven configuration.
//!
//! Values come from an env file loaded with `dotenvy`, then read from the
//! process environment, so variables already exported take effect too.

use std::path::Path;

use anyhow::{Context, Result};

/// Typed application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_sslmode: String,
    /// Tracing filter directive, e.g. `info` or `townhall=debug`.
    pub log_level: String,
    pub http_port: String,
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} is not set"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from the env file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?;

        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port: required("DB_PORT")?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            db_name: required("DB_NAME")?,
            db_sslmode: optional("DB_SSLMODE", "disable"),
            log_level: optional("LEVEL", "info"),
            http_port: optional("HTTP_PORT", "8080"),
        })
    }

    /// Postgres DSN assembled from the individual DB_* variables.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name,
            self.db_sslmode,
        )
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}
