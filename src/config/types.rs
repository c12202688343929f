//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::DEFAULT_PALETTE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Palette settings.
///
/// The palette is fixed for a session; colors are selected by index only.
/// Defaults to red, green, blue and yellow.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Ordered palette colors; the first one is active at startup
    #[serde(default = "default_palette")]
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette(),
        }
    }
}

/// Output surface settings for headless rendering.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels, control strip included (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Canvas background color
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Draw the palette/tool control strip below the canvas
    #[serde(default = "default_show_controls")]
    pub show_controls: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            show_controls: default_show_controls(),
        }
    }
}

/// Sizes used for canvas objects.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke outline width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Circle radius in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,

    /// Stamp edge length in pixels (valid range: 8.0 - 400.0)
    ///
    /// Defaults to 50, so a tap at `(x, y)` stores the stamp at `(x - 25, y - 25)`.
    #[serde(default = "default_stamp_size")]
    pub stamp_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            circle_radius: default_circle_radius(),
            stamp_size: default_stamp_size(),
        }
    }
}

pub(super) fn default_palette() -> Vec<ColorSpec> {
    DEFAULT_PALETTE.iter().map(|&c| ColorSpec::from(c)).collect()
}

fn default_width() -> u32 {
    390
}

fn default_height() -> u32 {
    844
}

pub(super) fn default_background() -> ColorSpec {
    ColorSpec::from("white")
}

fn default_show_controls() -> bool {
    true
}

fn default_stroke_width() -> f64 {
    5.0
}

fn default_circle_radius() -> f64 {
    10.0
}

fn default_stamp_size() -> f64 {
    50.0
}
