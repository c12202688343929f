//! Configuration file support for stampboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/stampboard/config.toml`. Settings cover the palette, the
//! output surface, and the sizes of drawn objects.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, PaletteConfig};

use crate::draw::{Color, RenderStyle, color::WHITE};
use crate::input::{DrawingSession, SessionError};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [palette]
/// colors = ["red", "green", "blue", "yellow"]
///
/// [canvas]
/// width = 390
/// height = 844
/// background = "white"
///
/// [drawing]
/// stroke_width = 5.0
/// stamp_size = 50.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Palette colors offered by the color picker
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Output surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke, circle and stamp sizes
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `drawing.stroke_width`: 0.5 - 50.0
    /// - `drawing.circle_radius`: 1.0 - 100.0
    /// - `drawing.stamp_size`: 8.0 - 400.0
    fn validate_and_clamp(&mut self) {
        // Palette: every entry must resolve, and there must be at least one
        let unknown: Vec<_> = self
            .palette
            .colors
            .iter()
            .filter(|spec| spec.to_css().is_none())
            .collect();
        if self.palette.colors.is_empty() || !unknown.is_empty() {
            warn!(
                "Invalid palette {:?} (unrecognised: {:?}), falling back to the default palette",
                self.palette.colors, unknown
            );
            self.palette.colors = types::default_palette();
        }

        // Surface size: 1 - 8192
        if !(1..=8192).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }
        if !(1..=8192).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        if self.canvas.background.to_css().is_none() {
            warn!(
                "Invalid canvas background {:?}, falling back to white",
                self.canvas.background
            );
            self.canvas.background = types::default_background();
        }

        // Stroke width: 0.5 - 50.0
        if !(0.5..=50.0).contains(&self.drawing.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-50.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_f64(self.drawing.stroke_width, 0.5, 50.0);
        }

        // Circle radius: 1.0 - 100.0
        if !(1.0..=100.0).contains(&self.drawing.circle_radius) {
            warn!(
                "Invalid circle_radius {:.1}, clamping to 1.0-100.0 range",
                self.drawing.circle_radius
            );
            self.drawing.circle_radius = clamp_f64(self.drawing.circle_radius, 1.0, 100.0);
        }

        // Stamp size: 8.0 - 400.0
        if !(8.0..=400.0).contains(&self.drawing.stamp_size) {
            warn!(
                "Invalid stamp_size {:.1}, clamping to 8.0-400.0 range",
                self.drawing.stamp_size
            );
            self.drawing.stamp_size = clamp_f64(self.drawing.stamp_size, 8.0, 400.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/stampboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("stampboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source).context("Invalid config TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Palette as the CSS strings stored on canvas objects.
    pub fn palette_colors(&self) -> Vec<String> {
        self.palette
            .colors
            .iter()
            .filter_map(ColorSpec::to_css)
            .collect()
    }

    pub fn background_color(&self) -> Color {
        self.canvas.background.to_color().unwrap_or(WHITE)
    }

    /// Object sizes for the render pass.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            stroke_width: self.drawing.stroke_width,
            circle_radius: self.drawing.circle_radius,
            stamp_size: self.drawing.stamp_size,
            ..RenderStyle::default()
        }
    }

    /// Builds a fresh drawing session from this configuration.
    pub fn session(&self) -> Result<DrawingSession, SessionError> {
        DrawingSession::new(self.palette_colors()).map(|session| session.with_style(self.render_style()))
    }
}

fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}
