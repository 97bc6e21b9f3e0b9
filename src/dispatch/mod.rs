//! Registration and dispatch
//!
//! Wires the core matcher to handler callbacks and usage output.

pub mod commander;
pub mod usage;

pub use commander::{Commander, DEFAULT_COMMAND, Handler, Outcome};
