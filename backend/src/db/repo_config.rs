//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
#[cfg(feature = "postgres-repo")]
use crate::db::PostgresConfig;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub postgres: PostgresSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Postgres connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostgresSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in the current directory, the
    /// `backend/` directory, and the parent directory.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Parse the configured repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert the Postgres section into a [`PostgresConfig`].
    ///
    /// Returns `Ok(None)` when no database URL is configured.
    #[cfg(feature = "postgres-repo")]
    pub fn to_postgres_config(&self) -> Result<Option<PostgresConfig>, RepositoryError> {
        if self.postgres.database_url.is_empty() {
            return Ok(None);
        }

        Ok(Some(PostgresConfig {
            database_url: self.postgres.database_url.clone(),
            max_pool_size: self.postgres.max_connections,
            min_pool_size: self.postgres.min_connections,
            connection_timeout_sec: self.postgres.connect_timeout,
            idle_timeout_sec: self.postgres.idle_timeout,
            max_retries: self.postgres.max_retries,
            retry_delay_ms: self.postgres.retry_delay_ms,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let config: RepositoryConfig = toml::from_str(
            r#"
            [repository]
            type = "local"
            "#,
        )
        .unwrap();

        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert!(config.postgres.database_url.is_empty());
    }

    #[test]
    fn test_parse_postgres_config_with_defaults() {
        let config: RepositoryConfig = toml::from_str(
            r#"
            [repository]
            type = "postgres"

            [postgres]
            database_url = "postgres://localhost/books"
            "#,
        )
        .unwrap();

        assert_eq!(config.repository_type().unwrap(), RepositoryType::Postgres);
        assert_eq!(config.postgres.database_url, "postgres://localhost/books");
        assert_eq!(config.postgres.max_connections, 10);
        assert_eq!(config.postgres.max_retries, 3);
    }

    #[test]
    fn test_invalid_repository_type() {
        let config: RepositoryConfig = toml::from_str(
            r#"
            [repository]
            type = "mongodb"
            "#,
        )
        .unwrap();

        assert!(config.repository_type().is_err());
    }
}
