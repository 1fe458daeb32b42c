// ABOUTME: Split panel configuration handling.
// ABOUTME: Loads and saves panel options and style overrides from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Dimension, Style};

/// Which pane follows the divider; the other one fills the remaining space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Primary {
    #[default]
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Resize along x (panes side by side) instead of y
    pub horizontal: bool,

    /// Pane that receives the dragged size
    pub primary: Primary,

    /// Whether the divider accepts drags at all
    pub allow_resize: bool,

    /// Controlled size; overrides the dragged size whenever it changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Dimension>,

    /// Initial size, resolved on first measurement
    pub default_size: Dimension,

    pub min_size: Dimension,

    /// Upper bound; defaults to the whole content size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Dimension>,

    /// Snapping granularity; absent or zero disables stepping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Dimension>,

    /// Base identifier for the container and its parts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,

    pub style: Style,
    pub pane_style: Style,
    pub pane1_style: Style,
    pub pane2_style: Style,
    pub resizer_style: Style,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            horizontal: false,
            primary: Primary::First,
            allow_resize: true,
            size: None,
            default_size: Dimension::Percent(50.0),
            min_size: Dimension::Absolute(0.0),
            max_size: None,
            step: None,
            test_id: None,
            style: Style::default(),
            pane_style: Style::pane(),
            pane1_style: Style::default(),
            pane2_style: Style::default(),
            resizer_style: Style::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl SplitConfig {
    /// Get the default config file path (~/.config/split-panel/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("split-panel").join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn defaults_match_widget_defaults() {
        let config = SplitConfig::default();
        assert!(config.allow_resize);
        assert_eq!(config.primary, Primary::First);
        assert_eq!(config.default_size, Dimension::Percent(50.0));
        assert_eq!(config.min_size, Dimension::Absolute(0.0));
        assert_eq!(config.pane_style.flex, Some(1.0));
    }

    #[test]
    fn parses_numbers_and_percentages() {
        let config = SplitConfig::from_toml_str(
            r#"
            horizontal = true
            primary = "last"
            default_size = "30%"
            min_size = 40
            max_size = "80%"
            step = 12.5

            [pane1_style]
            background_color = { r = 1.0, g = 0.5, b = 0.3, a = 1.0 }
            "#,
        )
        .unwrap();

        assert!(config.horizontal);
        assert_eq!(config.primary, Primary::Last);
        assert_eq!(config.default_size, Dimension::Percent(30.0));
        assert_eq!(config.min_size, Dimension::Absolute(40.0));
        assert_eq!(config.max_size, Some(Dimension::Percent(80.0)));
        assert_eq!(config.step, Some(Dimension::Absolute(12.5)));
        assert_eq!(
            config.pane1_style.background_color,
            Some(Color::rgba(1.0, 0.5, 0.3, 1.0))
        );
        // untouched sections keep their defaults
        assert_eq!(config.pane_style.flex, Some(1.0));
    }

    #[test]
    fn rejects_unknown_primary() {
        let err = SplitConfig::from_toml_str("primary = \"middle\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let config = SplitConfig {
            horizontal: true,
            size: Some(Dimension::Percent(25.0)),
            step: Some(Dimension::Absolute(10.0)),
            test_id: Some("editor".to_string()),
            ..SplitConfig::default()
        };

        let temp_path = std::env::temp_dir()
            .join("split-panel-config-test")
            .join("config.toml");
        config.save(&temp_path).unwrap();
        let loaded = SplitConfig::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("split-panel-does-not-exist.toml");
        let err = SplitConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
