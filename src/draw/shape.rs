//! Drawable objects recorded on the canvas.

use std::fmt;

/// A single path-drawing command inside a [`Stroke`].
///
/// Formats as SVG path data (`M x y` / `L x y`), so a stroke's commands
/// joined with spaces form a valid path string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Anchor point that starts the stroke
    MoveTo { x: f64, y: f64 },
    /// Straight segment to the given point
    LineTo { x: f64, y: f64 },
}

impl PathCommand {
    /// Returns the point this command targets.
    pub fn point(&self) -> (f64, f64) {
        match *self {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => (x, y),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { x, y } => write!(f, "M {x} {y}"),
            PathCommand::LineTo { x, y } => write!(f, "L {x} {y}"),
        }
    }
}

/// Lifecycle of a single stroke: `Empty -> Started -> Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeState {
    /// No point recorded yet
    Empty,
    /// Open and accepting further points
    Started,
    /// Pointer lifted; the stroke is immutable from here on
    Ended,
}

/// Freehand stroke built from pan gestures.
///
/// Commands are append-only: individual points are never reordered or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Move-to anchor followed by zero or more line-to commands
    pub commands: Vec<PathCommand>,
    /// Set once the first point is recorded
    pub started: bool,
    /// Set once the pointer is lifted
    pub ended: bool,
    /// Palette color the stroke was drawn with
    pub color: String,
}

impl Stroke {
    /// Begins a stroke anchored at `(x, y)`.
    pub fn begin(x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo { x, y }],
            started: true,
            ended: false,
            color: color.into(),
        }
    }

    pub fn state(&self) -> StrokeState {
        match (self.started, self.ended) {
            (_, true) => StrokeState::Ended,
            (true, false) => StrokeState::Started,
            (false, false) => StrokeState::Empty,
        }
    }

    /// A stroke receives further points iff it is started and not ended.
    pub fn is_active(&self) -> bool {
        self.started && !self.ended
    }

    /// Appends a line-to command. Returns `false` (and records nothing)
    /// when the stroke is not active.
    pub fn line_to(&mut self, x: f64, y: f64) -> bool {
        if !self.is_active() {
            return false;
        }
        self.commands.push(PathCommand::LineTo { x, y });
        true
    }

    /// Closes the stroke. Returns `false` if it was already ended.
    pub fn end(&mut self) -> bool {
        if self.ended {
            return false;
        }
        self.ended = true;
        true
    }

    /// Number of recorded points (anchor included).
    pub fn point_count(&self) -> usize {
        self.commands.len()
    }

    /// SVG path data: every command joined with a single space.
    pub fn path_data(&self) -> String {
        self.commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One placed star stamp. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    /// Top-left X of the stamp's render box
    pub x: f64,
    /// Top-left Y of the stamp's render box
    pub y: f64,
    /// Palette color the star is filled with
    pub color: String,
}

impl Stamp {
    /// Places a stamp so that `(cx, cy)` is the center of a `size`-wide square.
    pub fn centered_at(cx: f64, cy: f64, size: f64, color: impl Into<String>) -> Self {
        let half = size / 2.0;
        Self {
            x: cx - half,
            y: cy - half,
            color: color.into(),
        }
    }
}

/// Filled dot. Nothing creates these interactively; the list is kept for render order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center X coordinate
    pub x: f64,
    /// Center Y coordinate
    pub y: f64,
}
