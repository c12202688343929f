use crate::input::{events::ControlEvent, tool::Tool};
use log::{info, warn};

use super::{DrawingSession, SessionError};

impl DrawingSession {
    /// Dispatches a toolbar control.
    ///
    /// Rejected controls (an out-of-range color index) are returned as errors
    /// and leave the session untouched.
    pub fn handle_control(&mut self, event: ControlEvent) -> Result<(), SessionError> {
        match event {
            ControlEvent::SelectColor(index) => self.select_palette_color(index)?,
            ControlEvent::TogglePalette => self.toggle_palette(),
            ControlEvent::ToggleTool => self.toggle_tool(),
            ControlEvent::SetTool(tool) => self.set_tool(tool),
            ControlEvent::Clear => self.clear(),
        }
        Ok(())
    }

    /// Selects the palette color at `index` and collapses the palette.
    pub fn select_palette_color(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.palette.len() {
            warn!(
                "Rejected palette index {index} (palette has {} colors)",
                self.palette.len()
            );
            return Err(SessionError::ColorIndexOutOfRange {
                index,
                len: self.palette.len(),
            });
        }

        self.active_color_index = index;
        self.palette_open = false;
        self.needs_redraw = true;
        Ok(())
    }

    /// Expands or collapses the palette.
    pub fn toggle_palette(&mut self) {
        self.palette_open = !self.palette_open;
        self.needs_redraw = true;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.active_tool != tool {
            info!("Tool: {} -> {}", self.active_tool, tool);
            self.active_tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Toolbar behaviour: Pencil switches to Stamp and vice versa.
    pub fn toggle_tool(&mut self) {
        self.set_tool(self.active_tool.toggled());
    }

    /// Empties strokes, stamps and circles. Tool and palette state are kept.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.needs_redraw = true;
    }
}
