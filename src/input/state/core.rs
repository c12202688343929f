//! Drawing session state.

use crate::draw::{Frame, RenderSnapshot, RenderStyle};
use crate::input::tool::Tool;
use thiserror::Error;

/// Palette used when no configuration overrides it.
pub const DEFAULT_PALETTE: [&str; 4] = ["red", "green", "blue", "yellow"];

/// Errors reported by session operations that reject their input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Palette index outside `0..len`
    #[error("palette index {index} out of range (palette has {len} colors)")]
    ColorIndexOutOfRange { index: usize, len: usize },

    /// A session needs at least one color to draw with
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Session state owning the canvas contents and the tool/color selection.
///
/// All mutation happens through `&mut self` on a single owner. Gesture and
/// control handlers set `needs_redraw` whenever they change something the
/// render pass reads.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    /// Everything drawn so far
    pub(super) frame: Frame,
    /// Ordered palette of CSS color strings
    pub(super) palette: Vec<String>,
    /// Index into `palette`
    pub(super) active_color_index: usize,
    /// Whether the color picker is expanded
    pub(super) palette_open: bool,
    /// How gestures are interpreted
    pub(super) active_tool: Tool,
    /// Render sizes (stamp size drives stamp placement)
    pub(super) style: RenderStyle,
    /// Whether the surface must be redrawn
    pub(super) needs_redraw: bool,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self {
            frame: Frame::new(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            active_color_index: 0,
            palette_open: false,
            active_tool: Tool::default(),
            style: RenderStyle::default(),
            needs_redraw: true,
        }
    }
}

impl DrawingSession {
    /// Creates a session drawing with `palette`, starting on its first color.
    pub fn new<I, S>(palette: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette: Vec<String> = palette.into_iter().map(Into::into).collect();
        if palette.is_empty() {
            return Err(SessionError::EmptyPalette);
        }
        Ok(Self {
            palette,
            ..Self::default()
        })
    }

    /// Replaces the render sizes. Only affects objects created afterwards.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn active_color_index(&self) -> usize {
        self.active_color_index
    }

    /// Currently selected palette color.
    pub fn active_color(&self) -> &str {
        &self.palette[self.active_color_index]
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn is_palette_open(&self) -> bool {
        self.palette_open
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Immutable view of circles, strokes and stamps in render order.
    pub fn render_snapshot(&self) -> RenderSnapshot<'_> {
        self.frame.snapshot()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
