//! Canvas contents and Cairo rendering.
//!
//! This module defines the drawable objects of a session:
//! - [`Stroke`]: freehand path made of move-to/line-to commands
//! - [`Stamp`]: a star placed at a position in a palette color
//! - [`Circle`]: filled dot, rendered beneath everything else
//! - [`Frame`]: container for all of the above, in render order
//! - Stamp shape parsing and Cairo rendering functions

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod stamp;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::{Frame, RenderSnapshot};
pub use render::{RenderStyle, render_background, render_snapshot};
pub use shape::{Circle, PathCommand, Stamp, Stroke, StrokeState};
pub use stamp::{StampCache, StampShape, StampShapeError, render_stamp_shape};
