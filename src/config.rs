use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    pub hierarchy_path: PathBuf,
    pub car_models_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5 // The upstream inference API queues cold models; waiting longer than this is pointless
}

fn default_batch_size() -> usize {
    10 // Zero-shot model limit on candidate labels per request
}

fn default_cache_capacity() -> usize {
    256
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default locations or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            "config/settings.toml",
            "./config/settings.toml",
            "~/.config/tagwise/settings.toml",
        ];

        for path in &default_paths {
            let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
            if expanded.exists() {
                return Self::from_file(expanded);
            }
        }

        Ok(Self::default())
    }

    /// Get classifier API key from config or environment variable
    pub fn classifier_api_key(&self) -> Option<String> {
        self.classifier
            .api_key
            .clone()
            .or_else(|| std::env::var("HUGGINGFACE_API_KEY").ok())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            taxonomy: TaxonomyConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            hierarchy_path: PathBuf::from("config/tag_hierarchy.json"),
            car_models_path: PathBuf::from("config/car_models.json"),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: "https://api-inference.huggingface.co/models/facebook/bart-large-mnli"
                .to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            batch_size: default_batch_size(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(
            config.taxonomy.hierarchy_path,
            PathBuf::from("config/tag_hierarchy.json")
        );
        assert_eq!(config.classifier.timeout_secs, 5);
        assert_eq!(config.classifier.batch_size, 10);
        assert_eq!(config.classifier.cache_capacity, 256);
    }

    #[test]
    fn test_config_from_file() {
        let temp_file = std::env::temp_dir().join("test_tagwise_config.toml");
        std::fs::write(
            &temp_file,
            r#"
[taxonomy]
hierarchy_path = "data/hierarchy.json"
car_models_path = "data/cars.json"

[classifier]
url = "http://localhost:9000/classify"
timeout_secs = 2
"#,
        )
        .unwrap();

        let config = Config::from_file(&temp_file).unwrap();
        assert_eq!(config.taxonomy.hierarchy_path, PathBuf::from("data/hierarchy.json"));
        assert_eq!(config.classifier.url, "http://localhost:9000/classify");
        assert_eq!(config.classifier.timeout_secs, 2);
        // Unset fields keep their defaults
        assert_eq!(config.classifier.batch_size, 10);
    }

    #[test]
    fn test_config_api_key_from_file() {
        let temp_file = std::env::temp_dir().join("test_tagwise_config_key.toml");
        std::fs::write(
            &temp_file,
            r#"
[classifier]
url = "http://localhost:9000/classify"
api_key = "hf_testkey"
"#,
        )
        .unwrap();

        let config = Config::from_file(&temp_file).unwrap();
        assert_eq!(config.classifier_api_key(), Some("hf_testkey".to_string()));
    }
}
