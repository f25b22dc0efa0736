//! Top-level bridge: wires the serial engine, the crossing primitives,
//! the command decoder, and the register file together, and exposes the
//! two clock domains' tick entry points.
//!
//! Data flow: link pins -> serial engine -> inbound toggle bridge ->
//! command decoder -> register file on the write path, and register file
//! -> command decoder -> outbound bridge -> serial engine -> link pins on
//! the read path. Within each domain, per-tick updates run in a fixed
//! order so intra-domain state is race-free; across domains, only the
//! crossing primitives are touched from both sides.

use crate::cdc::{ByteBridgeIn, HandshakeBridgeOut, OutboundBridge, QueueBridgeOut};
use crate::config::{Config, OutboundKind};
use crate::decoder::{CommandDecoder, DecodeEvent};
use crate::link::SerialEngine;
use crate::regfile::RegisterFile;
use crate::stats::BridgeStats;

/// The complete register-access bridge.
pub struct Bridge {
    engine: SerialEngine,
    bridge_in: ByteBridgeIn,
    outbound: Box<dyn OutboundBridge>,
    decoder: CommandDecoder,
    regs: RegisterFile,

    clear_registers_on_reset: bool,
    trace: bool,
    frame_active: bool,

    pub stats: BridgeStats,
}

impl Bridge {
    /// Builds a bridge from the configuration.
    pub fn new(config: &Config) -> Self {
        let outbound: Box<dyn OutboundBridge> = match config.bridge.outbound {
            OutboundKind::Queue => Box::new(QueueBridgeOut::new(config.bridge.queue_depth)),
            OutboundKind::Handshake => Box::new(HandshakeBridgeOut::new()),
        };
        if config.general.trace {
            println!(
                "[Bridge] Outbound: {:?}, queue depth {}",
                config.bridge.outbound, config.bridge.queue_depth
            );
        }
        Self {
            engine: SerialEngine::new(),
            bridge_in: ByteBridgeIn::new(),
            outbound,
            decoder: CommandDecoder::new(),
            regs: RegisterFile::new(),
            clear_registers_on_reset: config.bridge.clear_registers_on_reset,
            trace: config.general.trace,
            frame_active: false,
            stats: BridgeStats::new(),
        }
    }

    /// Sampling-phase link clock edge.
    ///
    /// Samples the inbound data line; a completed byte is published into
    /// the inbound toggle bridge.
    pub fn link_sample_edge(&mut self, frame_select: bool, si: bool) {
        self.stats.link_sample_edges += 1;
        if frame_select && !self.frame_active {
            self.frame_active = true;
            self.stats.frames += 1;
        }
        if let Some(byte) = self.engine.sample_edge(frame_select, si) {
            self.stats.bytes_received += 1;
            self.bridge_in.publish(byte);
        }
    }

    /// Drive-phase link clock edge.
    ///
    /// Ticks the outbound bridge's link side, then drives the outbound
    /// data line. Returns `None` (high-impedance) while frame-select is
    /// deasserted.
    pub fn link_drive_edge(&mut self, frame_select: bool) -> Option<bool> {
        self.stats.link_drive_edges += 1;
        self.outbound.tick_link();
        self.engine.drive_edge(frame_select, self.outbound.as_mut())
    }

    /// Frame-select deassertion: resets the engine's bit positions. The
    /// decoder and crossing bridges are deliberately unaware of framing;
    /// an abort mid-transaction leaves them parked (documented hazard).
    pub fn link_deselect(&mut self) {
        self.engine.deselect();
        self.frame_active = false;
    }

    /// One subsystem clock cycle: inbound bridge synchronization, decoder
    /// step, outbound bridge producer-side synchronization.
    pub fn subsystem_tick(&mut self) {
        self.stats.subsystem_ticks += 1;
        self.outbound.tick_subsystem();
        let rx = self.bridge_in.tick();
        if rx.is_some() {
            self.stats.bytes_delivered += 1;
        }
        if let Some(event) = self.decoder.tick(rx, &mut self.regs, self.outbound.as_mut()) {
            match event {
                DecodeEvent::Write { addr, word } => {
                    self.stats.write_commands += 1;
                    if self.trace {
                        println!("[Decoder] WRITE reg {:#04x} <= {:#010x}", addr, word);
                    }
                }
                DecodeEvent::Read { addr, word } => {
                    self.stats.read_commands += 1;
                    if self.trace {
                        println!("[Decoder] READ  reg {:#04x} => {:#010x}", addr, word);
                    }
                }
            }
        }
    }

    /// Subsystem-domain reset: clears all protocol state machines and
    /// pointers. Register contents are cleared or retained per the
    /// configured policy.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.bridge_in.reset();
        self.outbound.reset();
        self.decoder.reset();
        self.frame_active = false;
        if self.clear_registers_on_reset {
            self.regs.reset();
        }
    }

    /// Debug peek at a register word, bypassing the link.
    pub fn register(&self, addr: u8) -> u32 {
        self.regs.read(addr)
    }

    /// True when no transaction is in flight in the decoder.
    pub fn decoder_idle(&self) -> bool {
        self.decoder.is_idle()
    }

    /// Folds the engine's counters into the statistics and prints them.
    pub fn print_stats(&mut self) {
        self.stats.bytes_transmitted = self.engine.bytes_pulled();
        self.stats.filler_bytes = self.engine.filler_bytes();
        self.stats.print();
    }
}
