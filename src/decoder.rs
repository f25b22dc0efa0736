//! Command decoder: subsystem-domain state machine.
//!
//! Parses the inbound byte stream into register transactions. The first
//! byte of a transaction carries the direction in bit 7 (1 = read) and a
//! 7-bit register address in bits 6..0. A write collects four payload
//! bytes MSB-first and issues exactly one write strobe. A read latches the
//! register value, then emits the four response bytes MSB-first, each
//! gated on the outbound bridge's ready flag.
//!
//! The decoder has no knowledge of link-level framing. Inbound bytes that
//! arrive while a read response is being clocked out are the controller's
//! clock-filler bytes; the decoder discards them and uses their count to
//! delimit the transaction (see [`READ_CLOCK_SLOTS`]). There is no error
//! state: a partially received write parks the decoder mid-sequence until
//! more bytes arrive. Recovering an orphaned decoder after an unseen frame
//! abort is a higher-layer concern (watchdog or timeout); the primitives
//! cannot detect that it happened.

use crate::cdc::OutboundBridge;
use crate::common::constants::{CMD_ADDR_MASK, CMD_READ_BIT, READ_CLOCK_SLOTS};
use crate::regfile::RegisterFile;

/// Decoder state. A transaction is created on its first command byte and
/// destroyed on completion; there is no abort path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Idle,
    WriteCollect { addr: u8, word: u32, idx: u8 },
    ReadPrepare { addr: u8 },
    ReadEmit { word: u32, emitted: u8, clocked: u8 },
}

/// Transaction-level event reported by a decoder tick, for tracing and
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent {
    /// A write transaction completed and strobed the register file.
    Write { addr: u8, word: u32 },
    /// A read transaction latched the register value and began emitting.
    Read { addr: u8, word: u32 },
}

/// Subsystem-domain command decoder.
#[derive(Debug)]
pub struct CommandDecoder {
    state: DecodeState,
}

impl CommandDecoder {
    pub fn new() -> Self {
        Self {
            state: DecodeState::Idle,
        }
    }

    /// True when no transaction is in flight.
    pub fn is_idle(&self) -> bool {
        self.state == DecodeState::Idle
    }

    /// One subsystem-domain tick.
    ///
    /// `rx` is this tick's delivery from the inbound bridge, if any.
    /// Returns a transaction event when one completes a phase this tick.
    pub fn tick(
        &mut self,
        rx: Option<u8>,
        regs: &mut RegisterFile,
        out: &mut dyn OutboundBridge,
    ) -> Option<DecodeEvent> {
        match self.state {
            DecodeState::Idle => {
                if let Some(byte) = rx {
                    let addr = byte & CMD_ADDR_MASK;
                    if byte & CMD_READ_BIT != 0 {
                        self.state = DecodeState::ReadPrepare { addr };
                    } else {
                        self.state = DecodeState::WriteCollect {
                            addr,
                            word: 0,
                            idx: 0,
                        };
                    }
                }
                None
            }

            DecodeState::WriteCollect { addr, word, idx } => {
                if let Some(byte) = rx {
                    let word = word | (byte as u32) << (8 * (3 - idx));
                    if idx == 3 {
                        regs.write(addr, word);
                        self.state = DecodeState::Idle;
                        return Some(DecodeEvent::Write { addr, word });
                    }
                    self.state = DecodeState::WriteCollect {
                        addr,
                        word,
                        idx: idx + 1,
                    };
                }
                None
            }

            DecodeState::ReadPrepare { addr } => {
                // One tick to latch the register value into the shift
                // buffer. No inbound byte can arrive this early in the
                // frame, so rx is not consulted.
                let word = regs.read(addr);
                self.state = DecodeState::ReadEmit {
                    word,
                    emitted: 0,
                    clocked: 0,
                };
                Some(DecodeEvent::Read { addr, word })
            }

            DecodeState::ReadEmit {
                word,
                mut emitted,
                mut clocked,
            } => {
                // Inbound bytes here are the controller's clock-filler
                // bytes; their payload is discarded, their count delimits
                // the transaction.
                if rx.is_some() {
                    clocked += 1;
                }
                if emitted < 4 && out.ready() {
                    let byte = (word >> (8 * (3 - emitted))) as u8;
                    if out.offer(byte) {
                        emitted += 1;
                    }
                }
                if emitted == 4 && clocked >= READ_CLOCK_SLOTS {
                    self.state = DecodeState::Idle;
                } else {
                    self.state = DecodeState::ReadEmit {
                        word,
                        emitted,
                        clocked,
                    };
                }
                None
            }
        }
    }

    /// Subsystem-domain reset back to Idle.
    pub fn reset(&mut self) {
        self.state = DecodeState::Idle;
    }
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new()
    }
}
