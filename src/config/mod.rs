//! Configuration file management
//!
//! Loads TOML configuration files and provides demo panel settings.
//! Default config path: ~/.config/ledcell/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{MIN_COLS, MIN_ROWS};
use crate::style::Palette;
use crate::utils::color::{parse_hex_or, Rgb};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display colors
    pub appearance: AppearanceConfig,
    /// Per-display cell allocation
    pub cell: CellBoxConfig,
}

/// Appearance settings
/// Colors are specified as RRGGBB hex strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Lit segment color (RRGGBB)
    pub lit: String,
    /// Unlit segment ghost color (RRGGBB)
    pub unlit: String,
    /// Panel background color (RRGGBB)
    pub background: String,
}

/// Cell box allocated to each display by the demo layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellBoxConfig {
    /// Box height in rows
    pub rows: usize,
    /// Box width in columns
    pub cols: usize,
    /// Blank columns between neighboring displays
    pub gap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            cell: CellBoxConfig::default(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            lit: "39ff14".to_string(),    // Neon green
            unlit: "0f2e12".to_string(),  // Ghost green
            background: "060c06".to_string(),
        }
    }
}

impl Default for CellBoxConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 8,
            gap: 1,
        }
    }
}

impl AppearanceConfig {
    /// Resolve the lit/unlit pair into a palette.
    /// Invalid hex strings fall back to the defaults per field, so one
    /// typo doesn't discard the rest of the theme.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette::new(
            parse_hex_or(&self.lit, defaults.lit),
            parse_hex_or(&self.unlit, defaults.unlit),
        )
    }

    /// Get the panel background color
    pub fn background_rgb(&self) -> Rgb {
        parse_hex_or(&self.background, Rgb::new(0x06, 0x0c, 0x06))
    }
}

impl CellBoxConfig {
    /// Box size clamped up to the display minimum, as `(rows, cols)`.
    /// The layout host owns the minimum-size precondition; it never hands
    /// a smaller box to a display.
    pub fn clamped(&self) -> (usize, usize) {
        (self.rows.max(MIN_ROWS), self.cols.max(MIN_COLS))
    }
}

impl Config {
    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. LEDCELL_CONFIG environment variable
        if let Ok(path) = std::env::var("LEDCELL_CONFIG") {
            let p = std::path::Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
        }

        // 2. User config: ~/.config/ledcell/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("ledcell").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }
        }

        None
    }

    /// Load configuration with priority:
    /// 1. LEDCELL_CONFIG environment variable
    /// 2. ~/.config/ledcell/config.toml (user config)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(path.to_string_lossy().as_ref()) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_meets_minimum() {
        let cell = CellBoxConfig::default();
        let (rows, cols) = cell.clamped();
        assert!(rows >= MIN_ROWS);
        assert!(cols >= MIN_COLS);
        assert_eq!((rows, cols), (7, 8));
    }

    #[test]
    fn test_clamped_raises_small_boxes() {
        let cell = CellBoxConfig { rows: 2, cols: 3, gap: 0 };
        assert_eq!(cell.clamped(), (MIN_ROWS, MIN_COLS));
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [cell]
            rows = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.cell.rows, 9);
        assert_eq!(config.cell.cols, 8);
        assert_eq!(config.appearance.lit, "39ff14");
    }

    #[test]
    fn test_palette_falls_back_per_field() {
        let appearance = AppearanceConfig {
            lit: "ff0000".to_string(),
            unlit: "oops".to_string(),
            background: String::new(),
        };
        let palette = appearance.palette();
        assert_eq!(palette.lit, Rgb::new(255, 0, 0));
        assert_eq!(palette.unlit, Palette::default().unlit);
        assert_eq!(appearance.background_rgb(), Rgb::new(0x06, 0x0c, 0x06));
    }
}
