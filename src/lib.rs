//! Library exports for the stampboard drawing canvas.
//!
//! Exposes the drawing session, canvas data model, configuration, and the
//! Cairo renderers so that other front ends can drive the same state machine
//! the headless binary replays.

pub mod config;
pub mod draw;
pub mod input;
pub mod output;
pub mod ui;

pub use config::Config;
pub use input::DrawingSession;
