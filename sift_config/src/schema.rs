use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use sift_core::DEFAULT_MAX_VALUE_LENGTH;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    const fn default_port() -> u16 {
        8000
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Records live only as long as the process.
    #[default]
    Memory,
    /// Records are persisted through `storage.url`.
    Database,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "StorageConfig::default_url")]
    pub url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: Self::default_url(),
        }
    }
}

impl StorageConfig {
    fn default_url() -> String {
        "sqlite://sift.db?mode=rwc".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "LimitsConfig::default_max_value_length")]
    pub max_value_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_value_length: Self::default_max_value_length(),
        }
    }
}

impl LimitsConfig {
    const fn default_max_value_length() -> usize {
        DEFAULT_MAX_VALUE_LENGTH
    }
}

impl Config {
    /// Directory holding the default config file, `~/sift`.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("sift"))
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// `~/sift/config.json` is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("Config file not found at: {}", path.display());
            }
            return Self::from_file(path);
        }

        let config_path = Self::config_dir()?.join("config.json");
        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Address the HTTP server binds to, e.g. `127.0.0.1:8000`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let db_path = config_dir.join("sift.db");
        let config_template = format!(
            r#"{{
  "server": {{
    "host": "127.0.0.1",
    "port": 8000
  }},
  "storage": {{
    "backend": "memory",
    "url": "sqlite://{}?mode=rwc"
  }},
  "limits": {{
    "max_value_length": {DEFAULT_MAX_VALUE_LENGTH}
  }}
}}
"#,
            db_path.display()
        );

        std::fs::write(&config_path, config_template)?;
        Ok(config_path)
    }
}
