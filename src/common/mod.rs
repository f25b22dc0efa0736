//! Common utilities shared across the bridge simulator.
//!
//! Provides the Gray-code conversion pair that makes multi-bit pointer
//! comparison safe across unsynchronized clock domains, plus the fixed
//! protocol constants (register bank geometry, frame layout).

/// Binary/Gray code conversion functions.
pub mod gray;

/// Fixed protocol and geometry constants.
pub mod constants;

pub use constants::{FILLER_BYTE, READ_CLOCK_SLOTS, REG_ADDR_BITS, REG_COUNT};
pub use gray::{from_gray, to_gray};
