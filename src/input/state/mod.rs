mod controls;
mod core;
mod gestures;
#[cfg(test)]
mod tests;

pub use core::{DEFAULT_PALETTE, DrawingSession, SessionError};
