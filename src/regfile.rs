//! Register file: flat array of 32-bit words with synchronous write.
//!
//! External collaborator of the bridge core; only its interface matters to
//! the protocol machines. One write strobe updates one word; reads are
//! side-effect free. The reset value is all-zero. Whether a subsystem
//! reset clears or retains contents is a policy choice owned by whoever
//! instantiates the file (see [`crate::system::Bridge`]).

use crate::common::constants::REG_COUNT;

/// Flat bank of 128 x 32-bit registers, 7-bit address space.
#[derive(Debug)]
pub struct RegisterFile {
    words: Vec<u32>,
}

impl RegisterFile {
    /// Creates a register file with all words at the reset value (zero).
    pub fn new() -> Self {
        Self {
            words: vec![0; REG_COUNT],
        }
    }

    /// Reads the word at `addr` (address wraps into the 7-bit space).
    pub fn read(&self, addr: u8) -> u32 {
        self.words[addr as usize & (REG_COUNT - 1)]
    }

    /// One-strobe write of `word` at `addr`.
    pub fn write(&mut self, addr: u8, word: u32) {
        self.words[addr as usize & (REG_COUNT - 1)] = word;
    }

    /// Clears every word back to the reset value.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
