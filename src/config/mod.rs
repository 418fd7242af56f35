use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment. A missing or empty
    /// `DATABASE_URL` is a fatal startup condition.
    pub fn from_env() -> Result<Self> {
        Self::build(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SERVER_HOST").ok(),
            std::env::var("SERVER_PORT").ok(),
        )
    }

    fn build(
        database_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self> {
        let database_url = match database_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => bail!("DATABASE_URL is not set; refusing to start without a database"),
        };
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            bail!("DATABASE_URL must be a postgres:// connection string");
        }
        Ok(AppConfig {
            server: ServerConfig {
                host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
                port: port.and_then(|p| p.parse().ok()).unwrap_or(8000),
            },
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_fatal() {
        assert!(AppConfig::build(None, None, None).is_err());
        assert!(AppConfig::build(Some("  ".to_string()), None, None).is_err());
    }

    #[test]
    fn test_rejects_non_postgres_url() {
        let result = AppConfig::build(Some("mysql://localhost/todos".to_string()), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_and_overrides() {
        let cfg = AppConfig::build(
            Some("postgres://gbuser:@localhost:5432/todos".to_string()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8000);

        let cfg = AppConfig::build(
            Some("postgres://gbuser:@localhost:5432/todos".to_string()),
            Some("0.0.0.0".to_string()),
            Some("9090".to_string()),
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9090);
    }
}
