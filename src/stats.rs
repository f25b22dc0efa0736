//! Simulation statistics collection and reporting.
//!
//! Tracks link activity, crossing traffic, and decoded transactions
//! during a simulation run.

/// Counters accumulated by the bridge while the simulation runs.
#[derive(Debug, Default)]
pub struct BridgeStats {
    pub link_sample_edges: u64,
    pub link_drive_edges: u64,
    pub subsystem_ticks: u64,

    /// Inbound bytes completed by the serial engine.
    pub bytes_received: u64,
    /// Bytes delivered across the inbound bridge to the decoder.
    pub bytes_delivered: u64,
    /// Outbound data bytes pulled by the serial engine.
    pub bytes_transmitted: u64,
    /// Filler bytes driven because no data byte was available.
    pub filler_bytes: u64,

    pub write_commands: u64,
    pub read_commands: u64,
    pub frames: u64,
}

impl BridgeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the statistics report.
    pub fn print(&self) {
        println!();
        println!("Bridge Statistics");
        println!("-----------------");
        println!("Link:");
        println!("  Sample edges:     {}", self.link_sample_edges);
        println!("  Drive edges:      {}", self.link_drive_edges);
        println!("  Frames:           {}", self.frames);
        println!("Subsystem:");
        println!("  Ticks:            {}", self.subsystem_ticks);
        println!("Traffic:");
        println!("  Bytes received:   {}", self.bytes_received);
        println!("  Bytes delivered:  {}", self.bytes_delivered);
        println!("  Bytes sent:       {}", self.bytes_transmitted);
        println!("  Filler bytes:     {}", self.filler_bytes);
        println!("Commands:");
        println!("  Writes:           {}", self.write_commands);
        println!("  Reads:            {}", self.read_commands);
        println!("-----------------");
    }
}
