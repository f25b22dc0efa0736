//! Cross-clock bounded FIFO with Gray-coded pointers.
//!
//! The producer side owns the write pointer and runs in the producer's
//! clock domain; the consumer side owns the read pointer and runs in the
//! consumer's domain. Each side sees the other's pointer only through a
//! two-stage synchronizer, refreshed on that side's own ticks. Because the
//! pointers are Gray-coded, a mid-transition sample is at worst one
//! increment stale, so the full/empty flags can lag the truth but never
//! lie in the unsafe direction: `is_full` is never false while the queue
//! is truly at capacity, and `is_empty` is never false while it is truly
//! empty.

use crate::common::gray::to_gray;
use crate::cdc::synchronizer::Synchronizer;

/// Bounded byte FIFO crossing a clock-domain boundary.
///
/// Capacity must be a power of two, minimum 4. Pointers carry one bit more
/// than the slot index needs; the extra bit disambiguates "full" from
/// "empty" when the raw pointers are numerically equal.
#[derive(Debug)]
pub struct CrossClockQueue {
    slots: Vec<u8>,
    slot_mask: u32,
    ptr_mask: u32,
    /// XOR mask inverting the top two pointer bits, for the full test.
    top_mask: u32,

    // Producer domain.
    wptr_bin: u32,
    wptr_gray: u32,
    rptr_sync: Synchronizer<u32>,

    // Consumer domain.
    rptr_bin: u32,
    rptr_gray: u32,
    wptr_sync: Synchronizer<u32>,
}

impl CrossClockQueue {
    /// Creates a queue with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of two or is below 4; the Gray
    /// pointer comparison is not well-defined otherwise.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 4 && capacity.is_power_of_two(),
            "queue capacity must be a power of two >= 4, got {}",
            capacity
        );
        let ptr_bits = capacity.trailing_zeros() + 1;
        Self {
            slots: vec![0; capacity],
            slot_mask: capacity as u32 - 1,
            ptr_mask: (1 << ptr_bits) - 1,
            top_mask: 0b11 << (ptr_bits - 2),
            wptr_bin: 0,
            wptr_gray: 0,
            rptr_sync: Synchronizer::new(0),
            rptr_bin: 0,
            rptr_gray: 0,
            wptr_sync: Synchronizer::new(0),
        }
    }

    /// Number of byte slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Producer-domain tick: refreshes the synchronized view of the
    /// consumer's Gray read pointer.
    pub fn tick_producer(&mut self) {
        let published = self.rptr_gray;
        self.rptr_sync.capture(published);
    }

    /// Consumer-domain tick: refreshes the synchronized view of the
    /// producer's Gray write pointer.
    pub fn tick_consumer(&mut self) {
        let published = self.wptr_gray;
        self.wptr_sync.capture(published);
    }

    /// Producer-side full flag.
    ///
    /// True when the write pointer's Gray code equals the synchronized
    /// read pointer's Gray code with its top two bits inverted (the
    /// standard two-pointer full test for Gray-coded circular buffers).
    pub fn is_full(&self) -> bool {
        self.wptr_gray == (self.rptr_sync.output() ^ self.top_mask)
    }

    /// Consumer-side empty flag.
    ///
    /// True when the read pointer's Gray code equals the synchronized
    /// write pointer's Gray code exactly.
    pub fn is_empty(&self) -> bool {
        self.rptr_gray == self.wptr_sync.output()
    }

    /// Producer side: enqueues a byte unless the queue reports full.
    ///
    /// Returns `false` (and changes nothing) when full; backpressure is
    /// expressed purely through this flag.
    pub fn try_write(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[(self.wptr_bin & self.slot_mask) as usize] = byte;
        self.wptr_bin = (self.wptr_bin + 1) & self.ptr_mask;
        self.wptr_gray = to_gray(self.wptr_bin);
        true
    }

    /// Consumer side: dequeues a byte unless the queue reports empty.
    pub fn try_read(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.slots[(self.rptr_bin & self.slot_mask) as usize];
        self.rptr_bin = (self.rptr_bin + 1) & self.ptr_mask;
        self.rptr_gray = to_gray(self.rptr_bin);
        Some(byte)
    }

    /// Resets both sides' pointers and synchronizers to the empty state.
    ///
    /// Only valid while both domains are quiescent (subsystem reset).
    pub fn reset(&mut self) {
        self.wptr_bin = 0;
        self.wptr_gray = 0;
        self.rptr_bin = 0;
        self.rptr_gray = 0;
        self.rptr_sync.reset(0);
        self.wptr_sync.reset(0);
    }
}
