use crate::tui::{AppConfig, LayerOptions, ThemeName};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme of the dialogs
    pub theme: ThemeName,

    /// Whether mouse clicks are captured
    pub mouse: bool,

    /// Whether the screen behind a dialog is dimmed
    pub dim_backdrop: bool,

    /// Whether a key-hint line is shown under the buttons
    pub key_hints: bool,

    /// Print results as JSON instead of plain text
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            mouse: true,
            dim_backdrop: true,
            key_hints: true,
            json: false,
        }
    }
}

/// Accept the usual spellings of a boolean environment value
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Initialize configuration from various sources
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.load_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Configuration files in priority order
    pub fn config_paths() -> Vec<PathBuf> {
        let mut config_paths = vec![
            PathBuf::from("./.modalbox.json"),
            PathBuf::from("./modalbox.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("modalbox").join("modalbox.json"));
        }

        config_paths
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|path| path.exists())
    }

    /// Load configuration from a JSON file. Missing keys keep defaults.
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.load_from_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an environment lookup; unparsable values are
    /// logged and skipped
    pub fn load_from_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(theme) = lookup("MODALBOX_THEME") {
            match theme.parse() {
                Ok(theme) => self.theme = theme,
                Err(e) => debug!("Ignoring MODALBOX_THEME: {}", e),
            }
        }

        let flags: [(&str, &mut bool); 3] = [
            ("MODALBOX_MOUSE", &mut self.mouse),
            ("MODALBOX_DIM_BACKDROP", &mut self.dim_backdrop),
            ("MODALBOX_KEY_HINTS", &mut self.key_hints),
        ];
        for (key, slot) in flags {
            if let Some(raw) = lookup(key) {
                match parse_flag(&raw) {
                    Some(value) => *slot = value,
                    None => debug!("Ignoring {}: '{}' is not a boolean", key, raw),
                }
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.key_hints && !self.mouse && !self.dim_backdrop {
            debug!("All optional UI features disabled");
        }
        Ok(())
    }

    /// Terminal application settings derived from this configuration
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            layer: LayerOptions {
                dim_backdrop: self.dim_backdrop,
                key_hints: self.key_hints,
            },
            mouse_enabled: self.mouse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modalbox.json");
        std::fs::write(&path, r#"{"theme": "light", "mouse": false}"#).unwrap();

        let config = Config::load_from_file(&path).await.unwrap();
        assert_eq!(config.theme, ThemeName::Light);
        assert!(!config.mouse);
        assert!(config.dim_backdrop);
        assert!(config.key_hints);
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modalbox.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from_file(&path).await.is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("MODALBOX_THEME", "dark"),
            ("MODALBOX_MOUSE", "yes"),
            ("MODALBOX_KEY_HINTS", "off"),
            ("MODALBOX_DIM_BACKDROP", "maybe"),
        ]);
        let mut config = Config {
            theme: ThemeName::Light,
            mouse: false,
            ..Config::default()
        };
        config.load_from_env_with(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.theme, ThemeName::Dark);
        assert!(config.mouse);
        assert!(!config.key_hints);
        // unparsable value leaves the previous setting
        assert!(config.dim_backdrop);
    }

    #[test]
    fn test_app_config_mapping() {
        let config = Config {
            dim_backdrop: false,
            ..Config::default()
        };
        let app = config.app_config();
        assert!(!app.layer.dim_backdrop);
        assert!(app.layer.key_hints);
        assert!(app.mouse_enabled);
    }
}
