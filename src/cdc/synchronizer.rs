//! Two-stage metastability filter.
//!
//! The synchronizer is the only legal way to observe a foreign clock
//! domain's signal. After two local captures the output is guaranteed
//! stable, at the cost of two local ticks of latency. In simulation the
//! delay is deterministic; the conservative flag logic built on top of it
//! must already tolerate the worst case.

/// Two sequential local-domain latches sampling one foreign-domain value.
///
/// Generic over `Copy` payloads so the same primitive serves 1-bit toggles
/// and multi-bit Gray pointers (safe only because Gray pointers change one
/// bit per increment).
#[derive(Debug, Clone)]
pub struct Synchronizer<T: Copy> {
    stage1: T,
    stage2: T,
}

impl<T: Copy> Synchronizer<T> {
    /// Creates a synchronizer with both stages holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            stage1: initial,
            stage2: initial,
        }
    }

    /// Local-domain tick: shifts `input` through the two latches.
    pub fn capture(&mut self, input: T) {
        self.stage2 = self.stage1;
        self.stage1 = input;
    }

    /// The twice-delayed, stable view of the foreign signal.
    pub fn output(&self) -> T {
        self.stage2
    }

    /// Forces both stages back to `value` (local-domain reset).
    pub fn reset(&mut self, value: T) {
        self.stage1 = value;
        self.stage2 = value;
    }
}

/// Edge detector over a synchronized foreign toggle line.
///
/// XORs the synchronized toggle against its own previous-tick value; a
/// mismatch yields a one-tick pulse per foreign-domain flip, provided the
/// foreign domain does not flip again before synchronization completes
/// (two local ticks).
#[derive(Debug, Clone)]
pub struct ToggleDetector {
    sync: Synchronizer<bool>,
    prev: bool,
}

impl ToggleDetector {
    pub fn new() -> Self {
        Self {
            sync: Synchronizer::new(false),
            prev: false,
        }
    }

    /// Local-domain tick: captures the foreign toggle and reports whether
    /// a flip became visible this tick.
    pub fn tick(&mut self, foreign_toggle: bool) -> bool {
        self.sync.capture(foreign_toggle);
        let now = self.sync.output();
        let pulse = now != self.prev;
        self.prev = now;
        pulse
    }

    /// Local-domain reset back to the quiescent state.
    pub fn reset(&mut self) {
        self.sync.reset(false);
        self.prev = false;
    }
}

impl Default for ToggleDetector {
    fn default() -> Self {
        Self::new()
    }
}
