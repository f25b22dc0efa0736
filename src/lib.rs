//! Serial Register Bridge Simulator Library.
//!
//! This crate implements a cycle-level simulator for a register-access
//! bridge: an external controller reads and writes a bank of 32-bit
//! registers over a full-duplex serial link whose clock is asynchronous
//! to the subsystem's internal clock. Every hardware block is a plain
//! struct with explicit per-tick methods; the two clock domains advance
//! through independent tick entry points that a harness may interleave
//! arbitrarily.
//!
//! # Architecture
//!
//! * **Link domain**: externally clocked serial bit engine (sample on one
//!   clock phase, drive on the opposite phase, MSB-first).
//! * **Subsystem domain**: command decoder and register file, internally
//!   clocked.
//! * **Crossing**: all traffic between the domains passes through
//!   synchronizer-based primitives (toggle bridge inbound, Gray-pointer
//!   queue outbound); nothing else is shared.
//!
//! # Modules
//!
//! * `common`: Gray-code conversion and shared protocol constants.
//! * `config`: Configuration loading and parsing.
//! * `cdc`: Clock-domain-crossing primitives.
//! * `link`: Serial bit/byte engine in the link clock domain.
//! * `decoder`: Command decoder state machine.
//! * `regfile`: Register file storage.
//! * `system`: Top-level bridge wiring.
//! * `sim`: Host-side link controller and transaction scripts.
//! * `stats`: Simulation statistics collection.

/// Gray-code conversion helpers and shared protocol constants.
pub mod common;

/// Configuration system for queue sizing, tick ratios, and bridge selection.
///
/// Loads and parses TOML configuration files to customize simulator
/// behavior for different scenarios.
pub mod config;

/// Clock-domain-crossing primitives.
///
/// Implements the two-stage synchronizer, the Gray-pointer cross-clock
/// queue, the inbound toggle bridge, and the outbound bridge strategies.
pub mod cdc;

/// Serial bit engine in the link clock domain.
///
/// Samples inbound bits into bytes and drives outbound bytes bit-by-bit,
/// MSB-first, on opposite phases of the link clock.
pub mod link;

/// Command decoder state machine.
///
/// Parses the inbound byte stream into read/write register transactions
/// and drives the outbound byte stream for read responses.
pub mod decoder;

/// Register file storage (flat array of 32-bit words).
pub mod regfile;

/// Top-level bridge wiring link pins, engine, crossing primitives,
/// decoder, and register file together.
pub mod system;

/// Simulation harness: host-side link controller and transaction scripts.
pub mod sim;

/// Simulation statistics collection and reporting.
pub mod stats;
