//! Headless rendering of a session to an image surface or PNG file.

use crate::config::Config;
use crate::draw::{StampCache, render_background, render_snapshot};
use crate::input::DrawingSession;
use crate::ui::{ControlLayout, render_controls};
use anyhow::{Context, Result};
use log::info;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

/// Renders the canvas (and optionally the control strip) to a new surface.
///
/// Returns the surface along with the number of stamps that were skipped.
pub fn render_surface(
    session: &DrawingSession,
    config: &Config,
    stamps: &mut StampCache,
) -> Result<(cairo::ImageSurface, usize)> {
    let width = config.canvas.width as i32;
    let height = config.canvas.height as i32;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;

    let layout = if config.canvas.show_controls {
        ControlLayout::new(width as f64, height as f64)
    } else {
        ControlLayout {
            width: width as f64,
            canvas_height: height as f64,
            strip_height: 0.0,
        }
    };

    render_background(&ctx, config.background_color(), layout.width, layout.canvas_height);

    // Canvas objects are clipped to the canvas area; off-canvas points are fine.
    let _ = ctx.save();
    ctx.rectangle(0.0, 0.0, layout.width, layout.canvas_height);
    ctx.clip();
    let skipped = render_snapshot(&ctx, &session.render_snapshot(), session.style(), stamps);
    let _ = ctx.restore();

    if config.canvas.show_controls {
        render_controls(&ctx, session, &layout);
    }

    drop(ctx);
    Ok((surface, skipped))
}

/// Writes `surface` to `path` as PNG.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Text listing of the canvas: one line per stroke and stamp.
///
/// Colors containing whitespace are printed quoted so every line splits
/// unambiguously on spaces.
pub fn describe(session: &DrawingSession) -> String {
    let snapshot = session.render_snapshot();
    let mut out = String::new();
    for circle in snapshot.circles {
        let _ = writeln!(out, "circle {} {}", circle.x, circle.y);
    }
    for stroke in snapshot.strokes {
        let _ = writeln!(out, "stroke {} {}", color_field(&stroke.color), stroke.path_data());
    }
    for stamp in snapshot.stamps {
        let _ = writeln!(
            out,
            "stamp {} {} {}",
            color_field(&stamp.color),
            stamp.x,
            stamp.y
        );
    }
    out
}

fn color_field(color: &str) -> Cow<'_, str> {
    if color.contains(char::is_whitespace) {
        Cow::Owned(format!("{color:?}"))
    } else {
        Cow::Borrowed(color)
    }
}
