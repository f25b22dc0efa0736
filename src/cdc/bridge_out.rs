//! Outbound bridge strategies: subsystem domain to link domain.
//!
//! Two competing designs fill the same role, kept behind one trait. The
//! queue-backed form is the production default: the subsystem never loses
//! a byte it successfully enqueued and the link side pops on demand. The
//! single-register handshake form is retained only as a documented
//! anti-pattern; it can silently drop a byte when the subsystem writes
//! faster than the round-trip synchronization latency.

use crate::cdc::queue::CrossClockQueue;
use crate::cdc::synchronizer::Synchronizer;
use crate::link::TxByteSource;

/// Strategy interface for carrying outbound bytes across the boundary.
///
/// The subsystem side must observe `ready` before each `offer`; the link
/// side pulls through the [`TxByteSource`] supertrait at byte boundaries.
pub trait OutboundBridge: TxByteSource {
    /// Subsystem side: true when a byte may be offered this tick.
    fn ready(&self) -> bool;

    /// Subsystem side: hands over a byte. Returns `false` (and changes
    /// nothing) when the bridge is not ready.
    fn offer(&mut self, byte: u8) -> bool;

    /// Subsystem-domain tick (pointer/flag synchronization).
    fn tick_subsystem(&mut self);

    /// Link-domain tick (pointer/flag synchronization).
    fn tick_link(&mut self);

    /// Subsystem-domain reset; valid only while the link is quiescent.
    fn reset(&mut self);
}

/// Queue-backed outbound bridge (production default).
#[derive(Debug)]
pub struct QueueBridgeOut {
    queue: CrossClockQueue,
}

impl QueueBridgeOut {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: CrossClockQueue::new(capacity),
        }
    }
}

impl TxByteSource for QueueBridgeOut {
    fn try_take(&mut self) -> Option<u8> {
        self.queue.try_read()
    }
}

impl OutboundBridge for QueueBridgeOut {
    fn ready(&self) -> bool {
        !self.queue.is_full()
    }

    fn offer(&mut self, byte: u8) -> bool {
        self.queue.try_write(byte)
    }

    fn tick_subsystem(&mut self) {
        self.queue.tick_producer();
    }

    fn tick_link(&mut self) {
        self.queue.tick_consumer();
    }

    fn reset(&mut self) {
        self.queue.reset();
    }
}

/// Single-register handshake bridge (documented anti-pattern).
///
/// One shared byte slot plus a ready flag synchronized back from the link
/// domain with the standard two-stage delay. The subsystem may overwrite
/// the slot any time it observes ready high, even though the link's true
/// state may already have changed; a second offer inside the round-trip
/// window silently replaces an unconsumed byte. `dropped_bytes` counts
/// those overwrites so tests can observe the hazard the real hardware
/// could not.
#[derive(Debug)]
pub struct HandshakeBridgeOut {
    // Shared slot, written by the subsystem, read by the link.
    slot: u8,
    slot_valid: bool,

    // Link domain.
    ready_raw: bool,
    valid_sync: Synchronizer<bool>,

    // Subsystem domain.
    ready_sync: Synchronizer<bool>,

    /// Bytes lost to the overwrite hazard.
    pub dropped_bytes: u64,
}

impl HandshakeBridgeOut {
    pub fn new() -> Self {
        Self {
            slot: 0,
            slot_valid: false,
            ready_raw: true,
            valid_sync: Synchronizer::new(false),
            ready_sync: Synchronizer::new(true),
            dropped_bytes: 0,
        }
    }
}

impl TxByteSource for HandshakeBridgeOut {
    fn try_take(&mut self) -> Option<u8> {
        // The link may only consume once the valid flag has crossed its
        // synchronizer; the slot payload itself is assumed stable by then.
        if self.valid_sync.output() && self.slot_valid {
            self.slot_valid = false;
            Some(self.slot)
        } else {
            None
        }
    }
}

impl OutboundBridge for HandshakeBridgeOut {
    fn ready(&self) -> bool {
        self.ready_sync.output()
    }

    fn offer(&mut self, byte: u8) -> bool {
        if !self.ready() {
            return false;
        }
        if self.slot_valid {
            // Stale ready: the previous byte was never consumed.
            self.dropped_bytes += 1;
        }
        self.slot = byte;
        self.slot_valid = true;
        true
    }

    fn tick_subsystem(&mut self) {
        let published = self.ready_raw;
        self.ready_sync.capture(published);
    }

    fn tick_link(&mut self) {
        let published = self.slot_valid;
        self.valid_sync.capture(published);
        self.ready_raw = !self.slot_valid;
    }

    fn reset(&mut self) {
        self.slot = 0;
        self.slot_valid = false;
        self.ready_raw = true;
        self.valid_sync.reset(false);
        self.ready_sync.reset(true);
        self.dropped_bytes = 0;
    }
}

impl Default for HandshakeBridgeOut {
    fn default() -> Self {
        Self::new()
    }
}
