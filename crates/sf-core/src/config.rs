// ABOUTME: Frame layout configuration handling.
// ABOUTME: Loads and saves divider and region sizing from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::SizeSpec;

/// Divider thickness used when nothing else is configured
pub const DEFAULT_DIVIDER_THICKNESS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Thickness of every divider in pixels
    pub divider_thickness: u32,

    /// Width of the west/east columns and the corner regions
    pub edge_size: SizeSpec,

    /// Height of the top and bottom rows
    pub row_size: SizeSpec,

    /// Size of north, south and center regions and the middle row
    pub center_size: SizeSpec,

    /// Enable one-click collapse on the extreme dividers
    pub quick_hide: bool,

    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            divider_thickness: DEFAULT_DIVIDER_THICKNESS,
            edge_size: SizeSpec::Fixed(200),
            row_size: SizeSpec::Fixed(150),
            center_size: SizeSpec::Proportional(1),
            quick_hide: true,
            window_width: 1200,
            window_height: 800,
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

impl FrameConfig {
    /// Get the default config file path (~/.config/splitframe/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("splitframe").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
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

    #[test]
    fn partial_file_keeps_defaults() {
        let config = FrameConfig::from_toml(
            r#"
            divider_thickness = 6
            edge_size = "240px"
            "#,
        )
        .unwrap();

        assert_eq!(config.divider_thickness, 6);
        assert_eq!(config.edge_size, SizeSpec::Fixed(240));
        assert_eq!(config.row_size, SizeSpec::Fixed(150));
        assert!(config.quick_hide);
    }

    #[test]
    fn bad_size_token_is_a_parse_error() {
        let err = FrameConfig::from_toml(r#"row_size = "tall""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let config = FrameConfig {
            center_size: SizeSpec::Proportional(3),
            window_width: 640,
            ..FrameConfig::default()
        };

        let path = std::env::temp_dir()
            .join("splitframe-config-test")
            .join("config.toml");
        config.save(&path).unwrap();
        let loaded = FrameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }
}
