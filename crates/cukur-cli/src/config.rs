use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result};
use cukur_db::DEFAULT_DB_FILE;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "cukur.toml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server configuration file structure (cukur.toml)
///
/// Every key is optional; missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file
    pub database: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DB_FILE.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, cukur.toml in the current
    /// directory is used when present and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load_from(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Could not read {}: {}", path.display(), e))?;

        Self::parse(&content).map_err(|e| eyre!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database, "cukur_panggilan.db");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
host = "0.0.0.0"
port = 9000
database = "/var/lib/cukur/orders.db"
static_dir = "/srv/cukur/static"
"#,
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.database, "/var/lib/cukur/orders.db");
        assert_eq!(config.static_dir, PathBuf::from("/srv/cukur/static"));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::parse("port = 3000").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::parse("prot = 3000").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/cukur.toml")));
        assert!(result.is_err());
    }
}
