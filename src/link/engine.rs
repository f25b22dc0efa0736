//! Serial bit engine.
//!
//! Lives entirely in the link clock domain. Inbound bits are sampled on
//! one clock phase and shifted MSB-first into an accumulator; outbound
//! bits are driven on the opposite phase so driven data settles before it
//! is sampled. Frame-select gates both directions: while deasserted the
//! bit positions are held at zero, the outbound line is high-impedance,
//! and partial inbound bytes are discarded.

use crate::common::constants::FILLER_BYTE;

/// Upstream source of outbound bytes, pulled at byte boundaries.
///
/// Implemented by the outbound bridge strategies; also trivially
/// implementable over any buffered byte store for bench setups.
pub trait TxByteSource {
    /// Link-domain pull; `None` means no byte is available this boundary.
    fn try_take(&mut self) -> Option<u8>;
}

/// Bit-level shift engine for the full-duplex serial link.
#[derive(Debug)]
pub struct SerialEngine {
    rx_pos: u8,
    rx_shift: u8,
    rx_byte: u8,

    tx_pos: u8,
    tx_shift: u8,

    bytes_pulled: u64,
    filler_bytes: u64,
}

impl SerialEngine {
    pub fn new() -> Self {
        Self {
            rx_pos: 0,
            rx_shift: 0,
            rx_byte: 0,
            tx_pos: 0,
            tx_shift: 0,
            bytes_pulled: 0,
            filler_bytes: 0,
        }
    }

    /// Sampling-phase edge of the link clock.
    ///
    /// While `frame_select` is asserted, shifts `si` into the MSB-first
    /// accumulator; on the eighth bit the completed byte is latched and
    /// returned (the one-edge byte-complete event). While deasserted, the
    /// bit position is held at zero and any partial byte is discarded; the
    /// last fully latched byte is not affected.
    pub fn sample_edge(&mut self, frame_select: bool, si: bool) -> Option<u8> {
        if !frame_select {
            self.rx_pos = 0;
            return None;
        }
        self.rx_shift = (self.rx_shift << 1) | si as u8;
        if self.rx_pos == 7 {
            self.rx_pos = 0;
            self.rx_byte = self.rx_shift;
            return Some(self.rx_byte);
        }
        self.rx_pos += 1;
        None
    }

    /// Drive-phase edge of the link clock.
    ///
    /// Returns the outbound bit, or `None` (high-impedance) while
    /// `frame_select` is deasserted. At each byte boundary the next byte
    /// is pulled from `source`; if the source is dry the all-zero filler
    /// byte is driven instead of leaving the line undefined.
    pub fn drive_edge<S: TxByteSource + ?Sized>(
        &mut self,
        frame_select: bool,
        source: &mut S,
    ) -> Option<bool> {
        if !frame_select {
            self.tx_pos = 0;
            return None;
        }
        if self.tx_pos == 0 {
            match source.try_take() {
                Some(byte) => {
                    self.tx_shift = byte;
                    self.bytes_pulled += 1;
                }
                None => {
                    self.tx_shift = FILLER_BYTE;
                    self.filler_bytes += 1;
                }
            }
        }
        let bit = self.tx_shift & 0x80 != 0;
        self.tx_shift <<= 1;
        self.tx_pos = (self.tx_pos + 1) & 7;
        Some(bit)
    }

    /// Frame-select deassertion (asynchronous on the wire): resets both
    /// bit positions without clocking anything.
    pub fn deselect(&mut self) {
        self.rx_pos = 0;
        self.tx_pos = 0;
    }

    /// Last fully latched inbound byte; stable until the next completed
    /// byte overwrites it, including across mid-byte aborts.
    pub fn last_byte(&self) -> u8 {
        self.rx_byte
    }

    /// Current inbound bit position (0..7).
    pub fn rx_position(&self) -> u8 {
        self.rx_pos
    }

    /// Outbound bytes pulled from the upstream source.
    pub fn bytes_pulled(&self) -> u64 {
        self.bytes_pulled
    }

    /// Filler bytes driven because the source was dry at a boundary.
    pub fn filler_bytes(&self) -> u64 {
        self.filler_bytes
    }

    /// Link-quiescent reset of all engine state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SerialEngine {
    fn default() -> Self {
        Self::new()
    }
}
