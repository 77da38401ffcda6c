use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
    #[error("Dist directory not found: {0}")]
    MissingDistDir(PathBuf),
    #[error("Dist directory has no index.html: {0}")]
    MissingIndex(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub environment: Environment,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let dist_dir = lookup("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let environment = Environment::parse(lookup("ENVIRONMENT").as_deref());

        Ok(Self {
            bind_addr,
            port,
            dist_dir,
            environment,
        })
    }

    /// Checks that the built site is where we expect it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dist_dir.is_dir() {
            return Err(ConfigError::MissingDistDir(self.dist_dir.clone()));
        }
        let index = self.index_file();
        if !index.is_file() {
            return Err(ConfigError::MissingIndex(self.dist_dir.clone()));
        }
        Ok(())
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "3100"),
            ("BIND_ADDR", "127.0.0.1"),
            ("DIST_DIR", "/srv/nes"),
            ("ENVIRONMENT", "development"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3100");
        assert_eq!(config.dist_dir, PathBuf::from("/srv/nes"));
        assert!(config.is_development());
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost:80")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
    }

    #[test]
    fn validate_reports_missing_dist() {
        let config = ServerConfig::from_lookup(lookup(&[("DIST_DIR", "/definitely/not/here")])).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingDistDir(_))));
    }
}
