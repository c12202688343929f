//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines how pointer gestures are interpreted: pans
/// draw with the pencil, taps place stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing - follows the pan gesture (default)
    #[default]
    Pencil,
    /// Star stamp - placed on tap
    Stamp,
}

impl Tool {
    /// The tool the toolbar button switches to.
    pub fn toggled(self) -> Self {
        match self {
            Tool::Pencil => Tool::Stamp,
            Tool::Stamp => Tool::Pencil,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Stamp => "Stamp",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pencil" | "pen" => Ok(Tool::Pencil),
            "stamp" => Ok(Tool::Stamp),
            other => Err(format!("unknown tool '{other}'")),
        }
    }
}
