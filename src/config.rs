use serde::Deserialize;

const DEFAULT_QUEUE_DEPTH: usize = 4;
const DEFAULT_TICKS_PER_PHASE: u32 = 8;
const DEFAULT_INTER_FRAME_TICKS: u32 = 16;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub link: LinkConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            link: LinkConfig::default(),
            bridge: BridgeConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LinkConfig {
    /// Subsystem ticks interleaved per link clock half-phase. Must be at
    /// least 5 so a command byte can cross the inbound bridge and reach
    /// the outbound queue within one half-phase.
    #[serde(default = "default_ticks_per_phase")]
    pub subsystem_ticks_per_phase: u32,

    /// Idle subsystem ticks after frame-select deasserts, letting
    /// in-flight toggles and clock-filler bytes settle.
    #[serde(default = "default_inter_frame_ticks")]
    pub inter_frame_ticks: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            subsystem_ticks_per_phase: DEFAULT_TICKS_PER_PHASE,
            inter_frame_ticks: DEFAULT_INTER_FRAME_TICKS,
        }
    }
}

/// Outbound bridge strategy selection.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutboundKind {
    /// Queue-backed bridge with full backpressure (production default).
    #[default]
    Queue,
    /// Single-register handshake with the documented overwrite hazard.
    Handshake,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BridgeConfig {
    /// Outbound queue capacity; power of two, minimum 4.
    #[serde(default = "default_queue_depth")]
    pub queue_depth: usize,

    #[serde(default)]
    pub outbound: OutboundKind,

    /// Whether a subsystem reset clears register contents (policy owned
    /// here; the protocol machines are always cleared).
    #[serde(default = "default_clear_registers")]
    pub clear_registers_on_reset: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            queue_depth: DEFAULT_QUEUE_DEPTH,
            outbound: OutboundKind::Queue,
            clear_registers_on_reset: true,
        }
    }
}

fn default_queue_depth() -> usize {
    DEFAULT_QUEUE_DEPTH
}

fn default_ticks_per_phase() -> u32 {
    DEFAULT_TICKS_PER_PHASE
}

fn default_inter_frame_ticks() -> u32 {
    DEFAULT_INTER_FRAME_TICKS
}

fn default_clear_registers() -> bool {
    true
}
