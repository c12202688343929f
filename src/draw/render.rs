//! Cairo-based rendering of the canvas contents.

use super::color::Color;
use super::frame::RenderSnapshot;
use super::shape::{Circle, Stamp, Stroke};
use super::stamp::{StampCache, StampShape};
use log::debug;

/// Fixed sizes used when drawing canvas objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Stroke outline width in pixels
    pub stroke_width: f64,
    /// Circle radius in pixels
    pub circle_radius: f64,
    /// Edge length of the square a stamp is drawn into
    pub stamp_size: f64,
    /// Color used for circles
    pub circle_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: 5.0,
            circle_radius: 10.0,
            stamp_size: 50.0,
            circle_color: super::color::BLACK,
        }
    }
}

/// Fills the whole canvas with a solid background color.
pub fn render_background(ctx: &cairo::Context, color: Color, width: f64, height: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill();
}

/// Draws a snapshot in stacking order: circles, then strokes, then stamps.
///
/// Returns the number of stamps that were skipped because their shape
/// could not be built. A skipped stamp never aborts the pass.
pub fn render_snapshot(
    ctx: &cairo::Context,
    snapshot: &RenderSnapshot<'_>,
    style: &RenderStyle,
    stamps: &mut StampCache,
) -> usize {
    for circle in snapshot.circles {
        render_circle(ctx, circle, style.circle_radius, style.circle_color);
    }

    for stroke in snapshot.strokes {
        render_stroke(ctx, stroke, style.stroke_width);
    }

    let mut skipped = 0;
    for stamp in snapshot.stamps {
        match stamps.get(&stamp.color) {
            Some(shape) => render_stamp(ctx, stamp, shape, style.stamp_size),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Render pass skipped {skipped} stamp(s)");
    }
    skipped
}

/// Render a filled circle centered on its position.
pub fn render_circle(ctx: &cairo::Context, circle: &Circle, radius: f64, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_sub_path();
    ctx.arc(circle.x, circle.y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
}

/// Render a freehand stroke as an outline-only polyline.
///
/// Strokes whose color cannot be resolved are drawn black.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke, width: f64) {
    let Some((first, rest)) = stroke.commands.split_first() else {
        return;
    };

    let color = Color::parse(&stroke.color).unwrap_or(super::color::BLACK);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    let (x0, y0) = first.point();
    ctx.move_to(x0, y0);

    if rest.is_empty() {
        // A lone anchor still leaves a dot under the finger.
        ctx.line_to(x0, y0);
    }
    for command in rest {
        let (x, y) = command.point();
        ctx.line_to(x, y);
    }

    let _ = ctx.stroke();
}

/// Render a stamp's shape scaled into its `size x size` box.
pub fn render_stamp(ctx: &cairo::Context, stamp: &Stamp, shape: &StampShape, size: f64) {
    let (sx, sy) = shape.scale_to(size);
    let fill = shape.fill;

    let _ = ctx.save();
    ctx.translate(stamp.x, stamp.y);
    ctx.scale(sx, sy);
    ctx.new_path();
    for contour in &shape.contours {
        let Some((&(x0, y0), rest)) = contour.split_first() else {
            continue;
        };
        ctx.move_to(x0, y0);
        for &(x, y) in rest {
            ctx.line_to(x, y);
        }
        ctx.close_path();
    }
    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    let _ = ctx.fill();
    let _ = ctx.restore();
}
