/// Number of registers in the bank (7-bit address space).
pub const REG_COUNT: usize = 128;

/// Width of a register address in bits.
pub const REG_ADDR_BITS: u32 = 7;

/// Command byte bit 7: set for read transactions, clear for write.
pub const CMD_READ_BIT: u8 = 0x80;

/// Mask extracting the register address from a command byte.
pub const CMD_ADDR_MASK: u8 = 0x7F;

/// Byte driven on the outbound line when no data byte is available.
pub const FILLER_BYTE: u8 = 0x00;

/// Byte slots the controller clocks after a read command byte: one
/// turnaround slot (covers the outbound pointer synchronization latency)
/// followed by the four response bytes. The decoder consumes exactly this
/// many inbound clock-filler bytes before a read transaction completes.
pub const READ_CLOCK_SLOTS: u8 = 5;
