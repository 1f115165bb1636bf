use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub advisor: AdvisorConfig,
    pub game: GameConfig,
}

/// Settings for the remote move-suggestion service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Base URL of an OpenAI-compatible chat completions API
    pub base_url: String,
    pub model: String,
    /// Upper bound on one request; expiry counts as a failed request
    pub timeout_secs: u64,
    pub max_tokens: u32,
    /// Distinct (board, legal columns) pairs remembered
    pub cache_capacity: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
            timeout_secs: 10,
            max_tokens: 5,
            cache_capacity: 128,
        }
    }
}

impl AdvisorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Start in Player vs AI mode
    pub ai_opponent: bool,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.advisor.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "advisor.base_url must not be empty".into(),
            ));
        }
        if self.advisor.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "advisor.model must not be empty".into(),
            ));
        }
        if self.advisor.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "advisor.timeout_secs must be > 0".into(),
            ));
        }
        if self.advisor.max_tokens == 0 {
            return Err(ConfigError::Validation(
                "advisor.max_tokens must be > 0".into(),
            ));
        }
        if self.advisor.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "advisor.cache_capacity must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.advisor.cache_capacity, 128);
        assert_eq!(config.advisor.timeout(), Duration::from_secs(10));
        assert!(!config.game.ai_opponent);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[advisor]
model = "gpt-4o"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.advisor.model, "gpt-4o");
        // Other fields should be defaults
        assert_eq!(config.advisor.base_url, "https://api.deepseek.com");
        assert_eq!(config.advisor.max_tokens, 5);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.advisor.model, default.advisor.model);
        assert_eq!(config.advisor.timeout_secs, default.advisor.timeout_secs);
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.advisor.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cache_capacity() {
        let mut config = AppConfig::default();
        config.advisor.cache_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_max_tokens() {
        let mut config = AppConfig::default();
        config.advisor.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_model() {
        let mut config = AppConfig::default();
        config.advisor.model = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.advisor.cache_capacity, 128);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
ai_opponent = true

[advisor]
timeout_secs = 3
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.game.ai_opponent);
        assert_eq!(config.advisor.timeout_secs, 3);
        // Others are defaults
        assert_eq!(config.advisor.model, "deepseek-chat");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[advisor]\ncache_capacity = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
