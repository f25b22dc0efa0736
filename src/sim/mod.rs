//! Simulation harness.
//!
//! The controller plays the external link master: it builds command
//! frames, drives the link clock edges, and interleaves subsystem ticks
//! the way two free-running clocks would. Scripts describe transaction
//! sequences for the CLI.

/// Host-side link master.
pub mod controller;

/// Transaction script loading.
pub mod script;

pub use controller::Controller;
pub use script::{load_script, ScriptOp};
