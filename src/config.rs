use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::theme::ThemePreset;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Generation service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// URL every generation request is posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Transport timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/generate".to_string()
}

/// Initial values and bounds for the composer form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    #[serde(default = "default_min_word_count")]
    pub min_word_count: u32,
    #[serde(default = "default_max_word_count")]
    pub max_word_count: u32,
    /// Posts generated per batch
    #[serde(default = "default_post_count")]
    pub post_count: u32,
    #[serde(default = "default_max_post_count")]
    pub max_post_count: u32,
    #[serde(default = "default_true")]
    pub include_hashtags: bool,
    #[serde(default)]
    pub include_emojis: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            min_word_count: default_min_word_count(),
            max_word_count: default_max_word_count(),
            post_count: default_post_count(),
            max_post_count: default_max_post_count(),
            include_hashtags: true,
            include_emojis: false,
        }
    }
}

impl ComposerConfig {
    /// Clamp a word count into the configured slider range
    pub fn clamp_word_count(&self, words: u32) -> u32 {
        let max = self.max_word_count.max(self.min_word_count);
        words.clamp(self.min_word_count, max)
    }

    /// Clamp a post count into `1..=max_post_count`
    pub fn clamp_post_count(&self, count: u32) -> u32 {
        count.clamp(1, self.max_post_count.max(1))
    }
}

fn default_word_count() -> u32 {
    50
}

fn default_min_word_count() -> u32 {
    10
}

fn default_max_word_count() -> u32 {
    300
}

fn default_post_count() -> u32 {
    1
}

fn default_max_post_count() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

/// Look and feel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub theme: ThemePreset,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "scribe", "Scribe")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service.endpoint, "http://127.0.0.1:5000/generate");
        assert_eq!(config.service.timeout_secs, None);
        assert_eq!(config.composer.word_count, 50);
        assert_eq!(config.composer.post_count, 1);
        assert!(config.composer.include_hashtags);
        assert!(!config.composer.include_emojis);
        assert_eq!(config.appearance.theme, ThemePreset::Teal);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [service]
            endpoint = "http://localhost:8080/generate"

            [composer]
            max_post_count = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.service.endpoint, "http://localhost:8080/generate");
        assert_eq!(config.composer.max_post_count, 5);
        assert_eq!(config.composer.word_count, 50);
        assert_eq!(config.composer.max_word_count, 300);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.service.timeout_secs = Some(30);
        config.appearance.theme = ThemePreset::Amber;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.service.timeout_secs, Some(30));
        assert_eq!(parsed.appearance.theme, ThemePreset::Amber);
    }

    #[test]
    fn test_clamping() {
        let composer = ComposerConfig::default();
        assert_eq!(composer.clamp_word_count(1), 10);
        assert_eq!(composer.clamp_word_count(1000), 300);
        assert_eq!(composer.clamp_post_count(0), 1);
        assert_eq!(composer.clamp_post_count(50), 10);
        assert_eq!(composer.clamp_post_count(3), 3);
    }
}
