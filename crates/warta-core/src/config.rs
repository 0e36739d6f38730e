//! Warta configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WartaError};

/// Default key namespace
pub const DEFAULT_NAMESPACE: &str = "warta";

/// Default number of featured articles
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WartaConfig {
    /// Prefix for every persisted key
    pub namespace: String,

    /// Number of articles `get_featured_default` returns
    pub featured_limit: usize,

    /// Storage backend
    pub storage: StorageBackend,

    /// Values filled in when a draft leaves optional fields blank
    pub defaults: DraftDefaults,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for WartaConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
            storage: StorageBackend::default(),
            defaults: DraftDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WartaConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Use an in-memory store
    pub fn with_memory_storage(mut self) -> Self {
        self.storage = StorageBackend::Memory;
        self
    }

    /// Use a SQLite database at `path`
    pub fn with_sqlite(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageBackend::Sqlite { path: path.into() };
        self
    }

    /// Set draft defaults
    pub fn with_defaults(mut self, defaults: DraftDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the featured article count
    pub fn with_featured_limit(mut self, limit: usize) -> Self {
        self.featured_limit = limit;
        self
    }

    /// Set the log filter directive
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// Reject values the rest of the crate cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(WartaError::Config("namespace must not be empty".into()));
        }
        if self.namespace.contains(char::is_whitespace) {
            return Err(WartaError::Config(format!(
                "namespace '{}' must not contain whitespace",
                self.namespace
            )));
        }
        // '.' separates the namespace from the key suffix
        if self.namespace.contains('.') {
            return Err(WartaError::Config(format!(
                "namespace '{}' must not contain '.'",
                self.namespace
            )));
        }
        if let StorageBackend::Sqlite { path } = &self.storage {
            if path.as_os_str().is_empty() {
                return Err(WartaError::Config("sqlite path must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Load configuration from a JSON or TOML file (chosen by extension)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_toml(path) {
            toml::from_str(&content).map_err(|e| WartaError::Config(e.to_string()))?
        } else {
            serde_json::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON or TOML file (chosen by extension)
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string_pretty(self).map_err(|e| WartaError::Config(e.to_string()))?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults overlaid with `WARTA_*` environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::default().overlay_env(|name| std::env::var(name).ok())
    }

    /// Apply `WARTA_NAMESPACE`, `WARTA_DB_PATH` and `WARTA_LOG` from `lookup`
    pub fn overlay_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(namespace) = lookup("WARTA_NAMESPACE") {
            self.namespace = namespace;
        }
        if let Some(path) = lookup("WARTA_DB_PATH") {
            self.storage = StorageBackend::Sqlite { path: path.into() };
        }
        if let Some(filter) = lookup("WARTA_LOG") {
            self.logging.filter = filter;
        }
        self.validate()?;
        Ok(self)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Storage backend selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// SQLite database file (or `":memory:"`)
    Sqlite { path: PathBuf },
}

/// Fallbacks for optional draft fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftDefaults {
    /// Image used when the draft has none
    pub placeholder_image: String,

    /// Publication label stamped on new articles
    pub just_now_label: String,

    pub author_name: String,

    pub author_role: String,

    /// Read-time label used when the draft leaves it blank
    pub read_time_label: String,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            placeholder_image:
                "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800".to_string(),
            just_now_label: "Baru saja".to_string(),
            author_name: "Admin".to_string(),
            author_role: "Kontributor".to_string(),
            read_time_label: "5 menit baca".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,

    /// Include the event target in output
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warta_core=info".to_string(),
            with_target: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = WartaConfig::default();
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.defaults.just_now_label, "Baru saja");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = WartaConfig::new()
            .with_namespace("kabar")
            .with_sqlite("/tmp/kabar.db")
            .with_featured_limit(5)
            .with_log_filter("debug");

        assert_eq!(config.namespace, "kabar");
        assert_eq!(
            config.storage,
            StorageBackend::Sqlite {
                path: "/tmp/kabar.db".into()
            }
        );
        assert_eq!(config.featured_limit, 5);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_validate_rejects_bad_namespace() {
        assert!(WartaConfig::new().with_namespace("").validate().is_err());
        assert!(WartaConfig::new().with_namespace("a b").validate().is_err());
        assert!(WartaConfig::new().with_namespace("warta.liked").validate().is_err());
        assert!(WartaConfig::new().with_sqlite("").validate().is_err());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("warta.json");
        let config = WartaConfig::new().with_namespace("uji").with_sqlite("data/warta.db");
        config.to_file(&path).unwrap();

        let loaded = WartaConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("warta.toml");
        let config = WartaConfig::new().with_featured_limit(4);
        config.to_file(&path).unwrap();

        let loaded = WartaConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("warta.toml");
        std::fs::write(&path, "namespace = \"berita\"\n").unwrap();

        let loaded = WartaConfig::from_file(&path).unwrap();
        assert_eq!(loaded.namespace, "berita");
        assert_eq!(loaded.featured_limit, DEFAULT_FEATURED_LIMIT);
        assert_eq!(loaded.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_from_env_without_dotenv_file() {
        let unset = ["WARTA_NAMESPACE", "WARTA_DB_PATH", "WARTA_LOG"]
            .iter()
            .all(|name| std::env::var_os(name).is_none());
        if unset {
            assert_eq!(WartaConfig::from_env().unwrap(), WartaConfig::default());
        }
    }

    #[test]
    fn test_overlay_env() {
        let vars: HashMap<&str, &str> = [
            ("WARTA_NAMESPACE", "kabar"),
            ("WARTA_DB_PATH", "/var/lib/warta.db"),
            ("WARTA_LOG", "warta_core=debug"),
        ]
        .into_iter()
        .collect();

        let config = WartaConfig::default()
            .overlay_env(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.namespace, "kabar");
        assert_eq!(
            config.storage,
            StorageBackend::Sqlite {
                path: "/var/lib/warta.db".into()
            }
        );
        assert_eq!(config.logging.filter, "warta_core=debug");
    }
}
