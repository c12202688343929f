//! Input event types delivered to the drawing session.

use super::tool::Tool;

/// Gesture callbacks, in surface-local coordinates.
///
/// For one continuous touch the recognizer delivers `PanStart`, then zero or
/// more `PanMove`, then `PanEnd`. Coordinates are not bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Finger went down and started moving
    PanStart { x: f64, y: f64 },
    /// Latest touch point while panning
    PanMove { x: f64, y: f64 },
    /// Finger lifted
    PanEnd,
    /// Short touch without movement
    Tap { x: f64, y: f64 },
}

/// Synchronous calls from the toolbar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Pick a palette color by index (also closes the palette)
    SelectColor(usize),
    /// Expand or collapse the palette
    TogglePalette,
    /// Switch Pencil <-> Stamp
    ToggleTool,
    /// Set a specific tool
    SetTool(Tool),
    /// Wipe the canvas
    Clear,
}

/// Any event the session consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Gesture(GestureEvent),
    Control(ControlEvent),
}

impl From<GestureEvent> for InputEvent {
    fn from(event: GestureEvent) -> Self {
        InputEvent::Gesture(event)
    }
}

impl From<ControlEvent> for InputEvent {
    fn from(event: ControlEvent) -> Self {
        InputEvent::Control(event)
    }
}
