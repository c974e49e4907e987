//! Configuration file support for FitCoach.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitcoach/config.toml`.

use crate::catalog::default_store;
use crate::{ContentStore, ContentType, Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub videos: VideoConfig,
}

/// Where the saved profile and progress log live
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Content store source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// Directory of authored JSON content; the built-in catalog when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
}

impl ContentConfig {
    /// Resolve the content store this configuration points at
    pub fn load_store(&self) -> Result<Cow<'static, ContentStore>> {
        match &self.content_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(Error::Config(format!(
                        "content_dir {:?} is not a directory",
                        dir
                    )));
                }
                Ok(Cow::Owned(ContentStore::load_from_dir(dir)?))
            }
            None => {
                tracing::debug!("Using built-in content catalog");
                Ok(Cow::Borrowed(default_store()))
            }
        }
    }
}

/// Video recommendation defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoConfig {
    #[serde(default)]
    pub default_content_type: ContentType,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            default_content_type: ContentType::Both,
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("fitcoach")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("fitcoach").join("config.toml")
    }

    /// Path of the saved profile inside the data directory
    pub fn profile_path(&self) -> PathBuf {
        self.data.data_dir.join("profile.json")
    }

    /// Path of the progress log inside the data directory
    pub fn progress_path(&self) -> PathBuf {
        self.data.data_dir.join("progress.json")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.content.content_dir.is_none());
        assert_eq!(config.videos.default_content_type, ContentType::Both);
        assert!(config.data.data_dir.ends_with("fitcoach"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.content.content_dir = Some(temp_dir.path().join("content"));
        config.videos.default_content_type = ContentType::Diet;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.content.content_dir, config.content.content_dir);
        assert_eq!(parsed.videos.default_content_type, ContentType::Diet);
        assert_eq!(parsed.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[videos]
default_content_type = "workout"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.videos.default_content_type, ContentType::Workout);
        assert!(config.content.content_dir.is_none()); // default
    }

    #[test]
    fn test_unknown_content_type_rejected() {
        let toml_str = r#"
[videos]
default_content_type = "podcasts"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_builtin_store_when_no_content_dir() {
        let store = ContentConfig::default().load_store().unwrap();
        assert!(matches!(store, Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_content_dir_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let content = ContentConfig {
            content_dir: Some(temp_dir.path().join("missing")),
        };
        assert!(matches!(content.load_store(), Err(Error::Config(_))));
    }

    #[test]
    fn test_data_paths() {
        let mut config = Config::default();
        config.data.data_dir = PathBuf::from("/tmp/coach");
        assert_eq!(config.profile_path(), PathBuf::from("/tmp/coach/profile.json"));
        assert_eq!(config.progress_path(), PathBuf::from("/tmp/coach/progress.json"));
    }
}
