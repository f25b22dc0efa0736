//! Clock-domain-crossing primitives.
//!
//! Everything that moves between the link domain and the subsystem domain
//! goes through one of the primitives in this module. Each primitive keeps
//! per-domain state and exposes per-domain tick methods; callers must only
//! invoke a side's methods from that side's clock domain.

/// Two-stage synchronizer and toggle-edge detector.
pub mod synchronizer;

/// Bounded FIFO with Gray-coded pointers compared across domains.
pub mod queue;

/// Inbound toggle bridge (link domain to subsystem domain, one byte).
pub mod bridge_in;

/// Outbound bridge strategies (subsystem domain to link domain).
pub mod bridge_out;

pub use bridge_in::ByteBridgeIn;
pub use bridge_out::{HandshakeBridgeOut, OutboundBridge, QueueBridgeOut};
pub use queue::CrossClockQueue;
pub use synchronizer::{Synchronizer, ToggleDetector};
