use crate::draw::{Stamp, Stroke};
use crate::input::{events::GestureEvent, tool::Tool};
use log::{debug, trace};

use super::DrawingSession;

impl DrawingSession {
    /// Dispatches a gesture callback to the matching handler.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PanStart { x, y } => self.on_pan_start(x, y),
            GestureEvent::PanMove { x, y } => self.on_pan_move(x, y),
            GestureEvent::PanEnd => self.on_pan_end(),
            GestureEvent::Tap { x, y } => self.on_tap(x, y),
        }
    }

    /// Processes the start of a pan gesture.
    ///
    /// # Behavior
    /// - Pencil: closes any stroke still open, then opens a new stroke
    ///   anchored at `(x, y)` in the active color
    /// - Stamp: ignored
    pub fn on_pan_start(&mut self, x: f64, y: f64) {
        if self.active_tool != Tool::Pencil {
            return;
        }

        if let Some(open) = self.frame.last_stroke_mut() {
            if open.end() {
                debug!("Closing stroke left open by a missing pan end");
            }
        }

        let stroke = Stroke::begin(x, y, self.active_color());
        debug!("Stroke #{} started at ({x}, {y})", self.frame.strokes.len());
        self.frame.push_stroke(stroke);
        self.needs_redraw = true;
    }

    /// Processes pan movement.
    ///
    /// Appends a line-to point to the most recent stroke while it is open.
    /// Does nothing when there is no stroke, the stroke has ended, or the
    /// active tool is not Pencil.
    pub fn on_pan_move(&mut self, x: f64, y: f64) {
        if self.active_tool != Tool::Pencil {
            return;
        }

        if let Some(stroke) = self.frame.last_stroke_mut() {
            if stroke.line_to(x, y) {
                self.needs_redraw = true;
            }
        } else {
            trace!("Pan move at ({x}, {y}) with no stroke; ignoring");
        }
    }

    /// Processes the end of a pan gesture by closing the most recent stroke.
    ///
    /// Safe to call with no strokes recorded.
    pub fn on_pan_end(&mut self) {
        if self.active_tool != Tool::Pencil {
            return;
        }

        match self.frame.last_stroke_mut() {
            Some(stroke) => {
                if stroke.end() {
                    debug!("Stroke ended with {} point(s)", stroke.point_count());
                    self.needs_redraw = true;
                }
            }
            None => trace!("Pan end with no stroke; ignoring"),
        }
    }

    /// Processes a tap.
    ///
    /// With the Stamp tool, places a star centered on `(x, y)` in the active
    /// color. Ignored with the Pencil tool.
    pub fn on_tap(&mut self, x: f64, y: f64) {
        if self.active_tool != Tool::Stamp {
            return;
        }

        let stamp = Stamp::centered_at(x, y, self.style.stamp_size, self.active_color());
        debug!("Stamp placed at ({}, {}) in {}", stamp.x, stamp.y, stamp.color);
        self.frame.push_stamp(stamp);
        self.needs_redraw = true;
    }
}
