use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";
pub const ENDPOINT_ENV_VAR: &str = "TABLE_FILTER_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: default_timeout_secs(),
        }
    }

    /// Loads the saved config, falling back to defaults, then applies the
    /// endpoint override from the environment.
    pub fn load() -> Self {
        let loaded = Self::get_config_path().and_then(|path| Self::load_from(&path));
        Self::resolve(loaded, std::env::var(ENDPOINT_ENV_VAR).ok().as_deref())
    }

    /// The override applies even when the file could not be read.
    fn resolve(loaded: Result<Self>, endpoint_override: Option<&str>) -> Self {
        let mut config = loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load config, using defaults");
            Self::new()
        });
        if let Some(endpoint) = endpoint_override {
            config.apply_endpoint_override(endpoint);
        }
        config
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("table-filter").join("config.json"))
    }

    pub fn apply_endpoint_override(&mut self, endpoint: &str) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
