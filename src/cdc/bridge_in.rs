//! Inbound toggle bridge: link domain to subsystem domain, one byte at a
//! time.
//!
//! A full queue is unnecessary on this path because the serial engine only
//! completes one byte per eight link clocks; a latch plus a toggle line is
//! enough. The link side latches each completed byte and flips the toggle;
//! the subsystem side detects the flip through a two-stage synchronizer
//! and samples the latch at the detection tick.

use crate::cdc::synchronizer::ToggleDetector;

/// Carries completed inbound bytes across the clock boundary.
///
/// Delivers each published byte exactly once, in order, provided the link
/// domain does not publish again before the subsystem domain's
/// synchronization completes (two subsystem ticks). Violating that rate
/// precondition silently merges two publications into one delivery; the
/// primitive has no way to detect the overrun.
#[derive(Debug)]
pub struct ByteBridgeIn {
    // Link domain.
    data_latch: u8,
    toggle: bool,

    // Subsystem domain.
    detector: ToggleDetector,
}

impl ByteBridgeIn {
    pub fn new() -> Self {
        Self {
            data_latch: 0,
            toggle: false,
            detector: ToggleDetector::new(),
        }
    }

    /// Link-domain side: latches a completed byte and flips the toggle.
    pub fn publish(&mut self, byte: u8) {
        self.data_latch = byte;
        self.toggle = !self.toggle;
    }

    /// Subsystem-domain tick: returns the latched byte once per observed
    /// toggle flip, `None` otherwise.
    pub fn tick(&mut self) -> Option<u8> {
        if self.detector.tick(self.toggle) {
            Some(self.data_latch)
        } else {
            None
        }
    }

    /// Subsystem-domain reset; also clears the link-side latch and toggle
    /// (valid only while the link is quiescent).
    pub fn reset(&mut self) {
        self.data_latch = 0;
        self.toggle = false;
        self.detector.reset();
    }
}

impl Default for ByteBridgeIn {
    fn default() -> Self {
        Self::new()
    }
}
