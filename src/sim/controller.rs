//! Host-side link master.
//!
//! Drives the bridge the way an external controller drives the physical
//! link: frame-select asserted around byte transfers, outbound data
//! driven on one clock phase, inbound data sampled on the opposite phase,
//! MSB-first. Between link half-phases the controller advances the
//! subsystem domain by a configured number of ticks, modeling a subsystem
//! clock that runs faster than the link clock.
//!
//! Frame layouts:
//!
//! * Write: one frame of five byte slots (command, four payload bytes).
//! * Read: one frame of `1 + READ_CLOCK_SLOTS` byte slots (command, one
//!   turnaround slot that absorbs the outbound pointer synchronization
//!   latency, four response bytes). The controller discards the
//!   turnaround slot's byte.

use crate::common::constants::{CMD_ADDR_MASK, CMD_READ_BIT, READ_CLOCK_SLOTS};
use crate::config::Config;
use crate::system::Bridge;

/// Link master pacing parameters.
pub struct Controller {
    subsystem_ticks_per_phase: u32,
    inter_frame_ticks: u32,
    trace: bool,
}

impl Controller {
    /// Builds a controller from the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `subsystem_ticks_per_phase` is below 5: a command byte
    /// cannot cross the inbound bridge and reach the outbound queue
    /// within one half-phase below that, and read framing would break.
    pub fn new(config: &Config) -> Self {
        assert!(
            config.link.subsystem_ticks_per_phase >= 5,
            "subsystem_ticks_per_phase must be at least 5, got {}",
            config.link.subsystem_ticks_per_phase
        );
        Self {
            subsystem_ticks_per_phase: config.link.subsystem_ticks_per_phase,
            inter_frame_ticks: config.link.inter_frame_ticks,
            trace: config.general.trace,
        }
    }

    /// Writes `word` to register `addr` through the link.
    pub fn write_word(&self, bridge: &mut Bridge, addr: u8, word: u32) {
        if self.trace {
            println!("[Controller] write {:#04x} <= {:#010x}", addr, word);
        }
        self.clock_byte(bridge, addr & CMD_ADDR_MASK);
        for shift in [24, 16, 8, 0] {
            self.clock_byte(bridge, (word >> shift) as u8);
        }
        self.end_frame(bridge);
    }

    /// Reads register `addr` through the link.
    pub fn read_word(&self, bridge: &mut Bridge, addr: u8) -> u32 {
        self.clock_byte(bridge, CMD_READ_BIT | (addr & CMD_ADDR_MASK));
        let mut word = 0u32;
        for slot in 0..READ_CLOCK_SLOTS {
            let byte = self.clock_byte(bridge, 0x00);
            // Slot 0 is the turnaround byte; the rest are the response.
            if slot > 0 {
                word = (word << 8) | byte as u32;
            }
        }
        self.end_frame(bridge);
        if self.trace {
            println!("[Controller] read  {:#04x} => {:#010x}", addr, word);
        }
        word
    }

    /// Runs `count` idle subsystem ticks with the link quiescent.
    pub fn idle(&self, bridge: &mut Bridge, count: u32) {
        for _ in 0..count {
            bridge.subsystem_tick();
        }
    }

    /// Clocks one byte slot with frame-select asserted: eight link clock
    /// cycles, drive phase then sample phase, subsystem ticks interleaved
    /// after each edge. Returns the byte observed on the outbound line.
    pub fn clock_byte(&self, bridge: &mut Bridge, si_byte: u8) -> u8 {
        let mut so_byte = 0u8;
        for bit in (0..8).rev() {
            let so = bridge.link_drive_edge(true).unwrap_or(false);
            so_byte = (so_byte << 1) | so as u8;
            self.run_subsystem(bridge);

            let si = (si_byte >> bit) & 1 == 1;
            bridge.link_sample_edge(true, si);
            self.run_subsystem(bridge);
        }
        so_byte
    }

    /// Deasserts frame-select and lets in-flight crossings settle.
    pub fn end_frame(&self, bridge: &mut Bridge) {
        bridge.link_deselect();
        self.idle(bridge, self.inter_frame_ticks);
    }

    fn run_subsystem(&self, bridge: &mut Bridge) {
        for _ in 0..self.subsystem_ticks_per_phase {
            bridge.subsystem_tick();
        }
    }
}
