//! Gesture handling and the drawing session state machine.
//!
//! This module turns gesture callbacks (pan start/move/end, tap) and toolbar
//! controls into canvas mutations. It owns the active tool, the palette
//! selection, and the canvas contents.

pub mod events;
pub mod script;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{ControlEvent, GestureEvent, InputEvent};
pub use script::{ReplaySummary, ScriptError, parse_script, replay};
pub use state::{DEFAULT_PALETTE, DrawingSession, SessionError};
pub use tool::Tool;
