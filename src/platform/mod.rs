//! Platform abstraction layer
//!
//! Handles the parts of the frame loop that sit outside the simulation:
//! - Input events and key mapping
//! - Fixed-rate frame pacing

pub mod input;
pub mod time;

pub use input::{EventQueue, InputEvent, Key};
pub use time::FramePacer;
