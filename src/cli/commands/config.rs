//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted};
use crate::config::Config;
use crate::ui::theme::ThemePreset;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "service.endpoint", "composer.word_count")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., "service.endpoint", "composer.word_count")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub async fn run(command: ConfigCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format).await,
        ConfigCommands::Get { key } => get(&key, format).await,
        ConfigCommands::Set { key, value } => set(&key, &value).await,
        ConfigCommands::Path => path(format).await,
    }
}

async fn show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let toml = toml::to_string_pretty(&config)?;
            println!("{}", toml);
        }
    }

    Ok(())
}

async fn get(key: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let value = get_config_value(&config, key)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Text => {
            println!("{}", value);
        }
    }

    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "endpoint"] => Ok(config.service.endpoint.clone()),
        ["service", "timeout_secs"] => Ok(config
            .service
            .timeout_secs
            .map(|s| s.to_string())
            .unwrap_or_else(|| "<not set>".to_string())),
        ["composer", "word_count"] => Ok(config.composer.word_count.to_string()),
        ["composer", "min_word_count"] => Ok(config.composer.min_word_count.to_string()),
        ["composer", "max_word_count"] => Ok(config.composer.max_word_count.to_string()),
        ["composer", "post_count"] => Ok(config.composer.post_count.to_string()),
        ["composer", "max_post_count"] => Ok(config.composer.max_post_count.to_string()),
        ["composer", "include_hashtags"] => Ok(config.composer.include_hashtags.to_string()),
        ["composer", "include_emojis"] => Ok(config.composer.include_emojis.to_string()),
        ["appearance", "theme"] => Ok(config.appearance.theme.name().to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

async fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    println!("Set {} = {}", key, value);
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "endpoint"] => {
            config.service.endpoint = value.to_string();
        }
        ["service", "timeout_secs"] => {
            config.service.timeout_secs = match value {
                "" | "none" => None,
                secs => Some(secs.parse()?),
            };
        }
        ["composer", "word_count"] => {
            config.composer.word_count = value.parse()?;
        }
        ["composer", "min_word_count"] => {
            config.composer.min_word_count = value.parse()?;
        }
        ["composer", "max_word_count"] => {
            config.composer.max_word_count = value.parse()?;
        }
        ["composer", "post_count"] => {
            config.composer.post_count = value.parse()?;
        }
        ["composer", "max_post_count"] => {
            config.composer.max_post_count = value.parse()?;
        }
        ["composer", "include_hashtags"] => {
            config.composer.include_hashtags = value.parse()?;
        }
        ["composer", "include_emojis"] => {
            config.composer.include_emojis = value.parse()?;
        }
        ["appearance", "theme"] => {
            config.appearance.theme = ThemePreset::from_key(value)
                .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", value))?;
        }
        _ => anyhow::bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

async fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let config = Config::default();
        assert_eq!(
            get_config_value(&config, "service.endpoint").unwrap(),
            "http://127.0.0.1:5000/generate"
        );
        assert_eq!(get_config_value(&config, "service.timeout_secs").unwrap(), "<not set>");
        assert_eq!(get_config_value(&config, "composer.post_count").unwrap(), "1");
        assert_eq!(get_config_value(&config, "appearance.theme").unwrap(), "Teal");
        assert!(get_config_value(&config, "game.directory").is_err());
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        set_config_value(&mut config, "service.timeout_secs", "45").unwrap();
        set_config_value(&mut config, "composer.include_emojis", "true").unwrap();
        set_config_value(&mut config, "appearance.theme", "cyan").unwrap();

        assert_eq!(config.service.timeout_secs, Some(45));
        assert!(config.composer.include_emojis);
        assert_eq!(config.appearance.theme, ThemePreset::Cyan);

        set_config_value(&mut config, "service.timeout_secs", "none").unwrap();
        assert_eq!(config.service.timeout_secs, None);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "composer.word_count", "lots").is_err());
        assert!(set_config_value(&mut config, "appearance.theme", "neon").is_err());
        assert!(set_config_value(&mut config, "nope", "1").is_err());
    }
}
