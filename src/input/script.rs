//! Line-oriented gesture scripts for headless replay.
//!
//! Each non-blank line holds one event; `#` starts a comment.
//!
//! ```text
//! pan-start 10 10
//! pan-move 20 10
//! pan-end
//! tool stamp
//! color 2
//! tap 100 100
//! palette
//! clear
//! ```

use super::events::{ControlEvent, GestureEvent, InputEvent};
use super::state::DrawingSession;
use super::tool::Tool;
use log::{debug, warn};
use thiserror::Error;

/// Errors raised while parsing a script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArity {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: {message}")]
    InvalidArgument { line: usize, message: String },
}

/// A parsed event with the line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptEvent {
    pub line: usize,
    pub event: InputEvent,
}

/// Parses a whole script, failing on the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(event) = parse_line(raw, line)? {
            events.push(ScriptEvent { line, event });
        }
    }
    Ok(events)
}

/// Parses one line. Blank and comment-only lines yield `None`.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<InputEvent>, ScriptError> {
    let content = raw.split('#').next().unwrap_or_default().trim();
    let mut parts = content.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();
    let command = command.to_ascii_lowercase();

    let arity = |expected: &'static str| ScriptError::WrongArity {
        line,
        command: command.clone(),
        expected,
    };

    let event: InputEvent = match command.as_str() {
        "pan-start" | "pan-move" | "tap" => {
            let [x, y] = args[..] else {
                return Err(arity("two coordinates"));
            };
            let (x, y) = (parse_coord(x, line)?, parse_coord(y, line)?);
            let gesture = match command.as_str() {
                "pan-start" => GestureEvent::PanStart { x, y },
                "pan-move" => GestureEvent::PanMove { x, y },
                _ => GestureEvent::Tap { x, y },
            };
            gesture.into()
        }
        "pan-end" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            GestureEvent::PanEnd.into()
        }
        "color" => {
            let [index] = args[..] else {
                return Err(arity("a palette index"));
            };
            let index = index
                .parse::<usize>()
                .map_err(|_| ScriptError::InvalidNumber {
                    line,
                    value: index.to_string(),
                })?;
            ControlEvent::SelectColor(index).into()
        }
        "palette" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            ControlEvent::TogglePalette.into()
        }
        "tool" => match args[..] {
            [] => ControlEvent::ToggleTool.into(),
            [name] => {
                let tool = name
                    .parse::<Tool>()
                    .map_err(|message| ScriptError::InvalidArgument { line, message })?;
                ControlEvent::SetTool(tool).into()
            }
            _ => return Err(arity("at most one tool name")),
        },
        "clear" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            ControlEvent::Clear.into()
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.clone(),
            });
        }
    };

    Ok(Some(event))
}

fn parse_coord(value: &str, line: usize) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events handed to the session
    pub applied: usize,
    /// Controls the session rejected
    pub rejected: usize,
    /// Times the session asked for a redraw
    pub redraws: usize,
}

/// Feeds events to `session` in order.
///
/// Rejected controls are logged and skipped; replay continues.
pub fn replay(session: &mut DrawingSession, events: &[ScriptEvent]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for ScriptEvent { line, event } in events {
        match *event {
            InputEvent::Gesture(gesture) => session.handle_gesture(gesture),
            InputEvent::Control(control) => {
                if let Err(err) = session.handle_control(control) {
                    warn!("line {line}: {err}; skipping");
                    summary.rejected += 1;
                }
            }
        }
        summary.applied += 1;
        if session.take_redraw() {
            summary.redraws += 1;
        }
    }
    debug!(
        "Replayed {} event(s): {} rejected, {} redraw(s)",
        summary.applied, summary.rejected, summary.redraws
    );
    summary
}
