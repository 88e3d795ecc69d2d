//! Server configuration from environment variables.

use std::path::PathBuf;

use super::ServerError;

const DEFAULT_UPLOAD_DIR: &str = "profile";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings for the members backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Directory uploaded profile images are written to (`LAB_UPLOAD_DIR`).
    pub upload_dir: PathBuf,
    /// Pool size (`LAB_DB_MAX_CONNECTIONS`).
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load the config from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServerError::Config("DATABASE_URL not set".to_string()))?;

        let upload_dir = lookup("LAB_UPLOAD_DIR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string());

        let max_connections = match lookup("LAB_DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|_| {
                ServerError::Config(format!("LAB_DB_MAX_CONNECTIONS is not a number: {v}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            upload_dir: PathBuf::from(upload_dir),
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/lab")]))
                .expect("config with database url");
        assert_eq!(config.database_url, "postgres://localhost/lab");
        assert_eq!(config.upload_dir, PathBuf::from("profile"));
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/lab"),
            ("LAB_UPLOAD_DIR", "/var/lib/lab/profile"),
            ("LAB_DB_MAX_CONNECTIONS", "12"),
        ]))
        .expect("config with overrides");
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/lab/profile"));
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn test_missing_database_url() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_bad_pool_size() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/lab"),
            ("LAB_DB_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("many"));
    }
}
