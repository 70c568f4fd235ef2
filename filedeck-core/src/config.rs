use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How new record ids are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Wall-clock milliseconds, bumped on collision
    #[default]
    Clock,
    /// Plain counter
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clock" => Ok(Self::Clock),
            "sequential" => Ok(Self::Sequential),
            other => Err(ConfigError::Config(format!("unknown id strategy '{other}'"))),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_delete_latency_ms() -> u64 {
    500
}

fn default_max_random_size_kib() -> u64 {
    100
}

/// YAML config file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    /// Simulated round trip for each delete call
    #[serde(default = "default_delete_latency_ms")]
    pub delete_latency_ms: u64,
    /// Upper bound (exclusive) for the random size of added files, in KiB
    #[serde(default = "default_max_random_size_kib")]
    pub max_random_size_kib: u64,
    /// Populate the sample batch at startup
    #[serde(default = "default_true")]
    pub seed_on_start: bool,
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub delete_latency_ms: u64,
    pub max_random_size_kib: u64,
    pub seed_on_start: bool,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delete_latency_ms: default_delete_latency_ms(),
            max_random_size_kib: default_max_random_size_kib(),
            seed_on_start: true,
            id_strategy: IdStrategy::Clock,
        }
    }
}

impl From<ConfigYaml> for Config {
    fn from(yaml: ConfigYaml) -> Self {
        Self {
            delete_latency_ms: yaml.delete_latency_ms,
            max_random_size_kib: yaml.max_random_size_kib,
            seed_on_start: yaml.seed_on_start,
            id_strategy: yaml.id_strategy,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let dev_mode = std::env::var("FILEDECK_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Dev mode activated - loading from environment");
            Self::from_env()
        } else {
            info!("Production mode - loading from config.yaml");
            Self::from_config_file()
        }
    }

    fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from `FILEDECK_*` variables. Unset, empty, or unparsable values
    /// fall back to defaults with a warning.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let delete_latency_ms = parse_or(
            get("FILEDECK_DELETE_LATENCY_MS"),
            "FILEDECK_DELETE_LATENCY_MS",
            defaults.delete_latency_ms,
        );
        let max_random_size_kib = parse_or(
            get("FILEDECK_MAX_RANDOM_SIZE_KIB"),
            "FILEDECK_MAX_RANDOM_SIZE_KIB",
            defaults.max_random_size_kib,
        );
        let seed_on_start = parse_or(
            get("FILEDECK_SEED_ON_START"),
            "FILEDECK_SEED_ON_START",
            defaults.seed_on_start,
        );
        let id_strategy = parse_or(
            get("FILEDECK_ID_STRATEGY"),
            "FILEDECK_ID_STRATEGY",
            defaults.id_strategy,
        );

        Self {
            delete_latency_ms,
            max_random_size_kib,
            seed_on_start,
            id_strategy,
        }
    }

    fn from_config_file() -> Self {
        let Some(path) = Self::default_config_path() else {
            warn!("No home directory, using default config");
            return Self::default();
        };
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// `~/.filedeck/config.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".filedeck").join("config.yaml"))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let yaml: ConfigYaml = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        Ok(yaml.into())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = ConfigYaml {
            delete_latency_ms: self.delete_latency_ms,
            max_random_size_kib: self.max_random_size_kib,
            seed_on_start: self.seed_on_start,
            id_strategy: self.id_strategy,
        };
        let content =
            serde_yaml::to_string(&yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write to the default location. Returns the path written.
    pub fn save_to_config_yaml(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_config_path()
            .ok_or_else(|| ConfigError::Config("no home directory".to_string()))?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn delete_latency(&self) -> Duration {
        Duration::from_millis(self.delete_latency_ms)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        Some(raw) => match raw.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Ignoring invalid {}={}", key, raw);
                default
            }
        },
        None => default,
    }
}
