//! Configuration enum types.

use crate::draw::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a CSS color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named or hex color
/// background = "white"
/// colors = ["red", "#00aa00"]
///
/// # Custom RGB color (0-255 per component)
/// background = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// CSS color name or hex string: red, green, "#ff8800", ...
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Returns the CSS string stored on canvas objects, or `None` when the
    /// name is not a recognised color.
    ///
    /// Names are kept verbatim (trimmed) so stroke colors read back exactly
    /// as configured; RGB arrays become `#rrggbb`.
    pub fn to_css(&self) -> Option<String> {
        match self {
            ColorSpec::Name(name) => {
                let name = name.trim();
                Color::parse(name).map(|_| name.to_string())
            }
            ColorSpec::Rgb([r, g, b]) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        }
    }

    /// Converts the specification to a [`Color`], if it is valid.
    pub fn to_color(&self) -> Option<Color> {
        self.to_css().and_then(|css| Color::parse(&css))
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}
