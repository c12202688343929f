//! Frame container for the canvas contents.

use super::shape::{Circle, Stamp, Stroke};

/// Container for everything drawn in the current session.
///
/// All three lists are append-only and kept in insertion order; the only
/// removal is [`Frame::clear`], which empties them together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Dots, drawn first (bottom layer)
    pub circles: Vec<Circle>,
    /// Freehand strokes, drawn above circles
    pub strokes: Vec<Stroke>,
    /// Star stamps, drawn last (top layer)
    pub stamps: Vec<Stamp>,
}

/// Read-only view of a [`Frame`] in render order.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub circles: &'a [Circle],
    pub strokes: &'a [Stroke],
    pub stamps: &'a [Stamp],
}

impl RenderSnapshot<'_> {
    /// Returns true when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.strokes.is_empty() && self.stamps.is_empty()
    }
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all circles, strokes and stamps at once.
    pub fn clear(&mut self) {
        self.circles.clear();
        self.strokes.clear();
        self.stamps.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn push_stamp(&mut self, stamp: Stamp) {
        self.stamps.push(stamp);
    }

    pub fn push_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Most recently created stroke, if any.
    pub fn last_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    /// Borrowed view used by the render pass.
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            circles: &self.circles,
            strokes: &self.strokes,
            stamps: &self.stamps,
        }
    }
}
