//! UI rendering: palette swatch, expanded palette, tool and clear controls

use crate::draw::{
    Color,
    color::{BLACK, CONTROL_STRIP},
};
use crate::input::DrawingSession;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Canvas share of the surface height (canvas : strip = 8 : 1)
const CANVAS_FLEX: f64 = 8.0;
/// Control strip share of the surface height
const STRIP_FLEX: f64 = 1.0;
/// Diameter of the swatch and palette entries
const SWATCH_SIZE: f64 = 50.0;
/// Gap between stacked palette entries
const SWATCH_SPACING: f64 = 5.0;
/// Inner padding of the strip
const STRIP_PADDING: f64 = 20.0;
/// Control label font size
const LABEL_FONT_SIZE: f64 = 18.0;

/// Splits a surface into the drawing canvas and the control strip below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLayout {
    /// Surface width in pixels
    pub width: f64,
    /// Height of the drawing canvas
    pub canvas_height: f64,
    /// Height of the control strip
    pub strip_height: f64,
}

impl ControlLayout {
    /// Lays out a `width x height` surface with the 8:1 canvas/strip split.
    pub fn new(width: f64, height: f64) -> Self {
        let canvas_height = (height * CANVAS_FLEX / (CANVAS_FLEX + STRIP_FLEX)).round();
        Self {
            width,
            canvas_height,
            strip_height: height - canvas_height,
        }
    }

    /// Center of the active-color swatch.
    pub fn swatch_center(&self) -> (f64, f64) {
        (
            STRIP_PADDING + SWATCH_SIZE / 2.0,
            self.canvas_height + self.strip_height / 2.0,
        )
    }

    /// Centers of the expanded palette entries, bottom entry nearest the swatch.
    pub fn palette_centers(&self, count: usize) -> Vec<(f64, f64)> {
        let (x, swatch_y) = self.swatch_center();
        let step = SWATCH_SIZE + SWATCH_SPACING;
        (0..count)
            .map(|i| (x, swatch_y - step * (count - i) as f64))
            .collect()
    }
}

/// Render the control strip and, when open, the palette column above it.
pub fn render_controls(ctx: &cairo::Context, session: &DrawingSession, layout: &ControlLayout) {
    let _ = ctx.save();

    ctx.set_source_rgba(CONTROL_STRIP.r, CONTROL_STRIP.g, CONTROL_STRIP.b, CONTROL_STRIP.a);
    ctx.rectangle(0.0, layout.canvas_height, layout.width, layout.strip_height);
    let _ = ctx.fill();

    let (sx, sy) = layout.swatch_center();
    if session.is_palette_open() {
        let centers = layout.palette_centers(session.palette().len());
        for (color, (cx, cy)) in session.palette().iter().zip(centers) {
            draw_swatch(ctx, cx, cy, resolve(color), false);
        }
    }
    draw_swatch(ctx, sx, sy, resolve(session.active_color()), true);

    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    ctx.set_font_size(LABEL_FONT_SIZE);
    draw_label(ctx, session.active_tool().label(), layout.width / 2.0, sy);
    draw_label(ctx, "Clear", layout.width - STRIP_PADDING - SWATCH_SIZE / 2.0, sy);

    let _ = ctx.restore();
}

fn resolve(color: &str) -> Color {
    Color::parse(color).unwrap_or(BLACK)
}

fn draw_swatch(ctx: &cairo::Context, cx: f64, cy: f64, color: Color, outlined: bool) {
    ctx.new_path();
    ctx.arc(cx, cy, SWATCH_SIZE / 2.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    if outlined {
        let _ = ctx.fill_preserve();
        ctx.set_source_rgba(BLACK.r, BLACK.g, BLACK.b, BLACK.a);
        ctx.set_line_width(1.0);
        let _ = ctx.stroke();
    } else {
        let _ = ctx.fill();
    }
}

/// Draws `text` centered on `(cx, cy)`.
fn draw_label(ctx: &cairo::Context, text: &str, cx: f64, cy: f64) {
    let extents = match ctx.text_extents(text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!("Failed to measure label '{text}': {e}, skipping");
            return;
        }
    };
    ctx.set_source_rgba(BLACK.r, BLACK.g, BLACK.b, BLACK.a);
    ctx.move_to(
        cx - extents.width() / 2.0 - extents.x_bearing(),
        cy - extents.height() / 2.0 - extents.y_bearing(),
    );
    let _ = ctx.show_text(text);
}
