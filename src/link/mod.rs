//! Link clock domain: serial bit/byte engine.

/// Bit-level shift engine.
pub mod engine;

pub use engine::{SerialEngine, TxByteSource};
