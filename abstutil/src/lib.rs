//! Small utilities shared by the crates in this workspace: logging setup, a phase `Timer`, and
//! number formatting for progress messages.

#[macro_use]
extern crate log;

pub mod logger;
mod time;

pub use crate::time::{elapsed_seconds, prettyprint_time, prettyprint_usize, Timer};
