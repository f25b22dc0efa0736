//! Tests for the command decoder state machine.

use regbridge::cdc::{OutboundBridge, QueueBridgeOut};
use regbridge::decoder::{CommandDecoder, DecodeEvent};
use regbridge::link::TxByteSource;
use regbridge::regfile::RegisterFile;

fn setup() -> (CommandDecoder, RegisterFile, QueueBridgeOut) {
    (
        CommandDecoder::new(),
        RegisterFile::new(),
        QueueBridgeOut::new(4),
    )
}

/// Tests write command assembly: four payload bytes MSB-first, exactly
/// one write strobe at the end.
#[test]
fn test_write_command_assembly() {
    let (mut dec, mut regs, mut out) = setup();

    assert!(dec.tick(Some(0x12), &mut regs, &mut out).is_none());
    assert!(!dec.is_idle());

    for byte in [0xDE, 0xAD, 0xBE] {
        assert!(dec.tick(Some(byte), &mut regs, &mut out).is_none());
        assert_eq!(regs.read(0x12), 0, "no strobe before the payload completes");
    }

    let event = dec.tick(Some(0xEF), &mut regs, &mut out);
    assert_eq!(
        event,
        Some(DecodeEvent::Write {
            addr: 0x12,
            word: 0xDEAD_BEEF
        })
    );
    assert!(dec.is_idle());
    assert_eq!(regs.read(0x12), 0xDEAD_BEEF);
}

/// Tests that ticks without inbound bytes leave a write collection
/// parked without side effects.
#[test]
fn test_write_collection_waits_for_bytes() {
    let (mut dec, mut regs, mut out) = setup();
    dec.tick(Some(0x08), &mut regs, &mut out);
    dec.tick(Some(0x11), &mut regs, &mut out);

    for _ in 0..20 {
        assert!(dec.tick(None, &mut regs, &mut out).is_none());
    }
    assert!(!dec.is_idle());
    assert_eq!(regs.read(0x08), 0);

    dec.tick(Some(0x22), &mut regs, &mut out);
    dec.tick(Some(0x33), &mut regs, &mut out);
    let event = dec.tick(Some(0x44), &mut regs, &mut out);
    assert_eq!(
        event,
        Some(DecodeEvent::Write {
            addr: 0x08,
            word: 0x1122_3344
        })
    );
}

/// Tests the read path: value latched from the register file, response
/// bytes emitted MSB-first, each gated on outbound readiness.
#[test]
fn test_read_command_emission() {
    let (mut dec, mut regs, mut out) = setup();
    regs.write(0x12, 0xCAFE_BABE);

    assert!(dec.tick(Some(0x92), &mut regs, &mut out).is_none());
    let event = dec.tick(None, &mut regs, &mut out);
    assert_eq!(
        event,
        Some(DecodeEvent::Read {
            addr: 0x12,
            word: 0xCAFE_BABE
        })
    );

    // One emission per tick while the queue has room.
    for _ in 0..4 {
        out.tick_subsystem();
        dec.tick(None, &mut regs, &mut out);
    }
    assert!(!dec.is_idle(), "transaction is delimited by clock bytes");

    let mut emitted = Vec::new();
    for _ in 0..12 {
        out.tick_link();
        if let Some(byte) = out.try_take() {
            emitted.push(byte);
        }
    }
    assert_eq!(emitted, [0xCA, 0xFE, 0xBA, 0xBE]);

    // Five inbound clock-filler bytes complete the transaction; their
    // payload is discarded, not decoded.
    for _ in 0..4 {
        dec.tick(Some(0x7F), &mut regs, &mut out);
        assert!(!dec.is_idle());
    }
    dec.tick(Some(0x7F), &mut regs, &mut out);
    assert!(dec.is_idle());
    assert_eq!(regs.read(0x7F), 0, "clock bytes must not start a write");
}

/// Tests that read emission stalls while the outbound bridge reports
/// not-ready and resumes when room appears.
#[test]
fn test_read_emission_respects_backpressure() {
    let (mut dec, mut regs, mut out) = setup();
    regs.write(0x01, 0x1122_3344);

    // Pre-fill the queue so the decoder cannot emit at all.
    for i in 0..4 {
        out.offer(0xE0 + i);
    }
    dec.tick(Some(0x81), &mut regs, &mut out);
    dec.tick(None, &mut regs, &mut out);
    for _ in 0..8 {
        out.tick_subsystem();
        dec.tick(None, &mut regs, &mut out);
    }

    // Nothing beyond the pre-filled bytes went in.
    let mut drained = Vec::new();
    for _ in 0..30 {
        out.tick_link();
        if let Some(byte) = out.try_take() {
            drained.push(byte);
        }
        out.tick_subsystem();
        dec.tick(None, &mut regs, &mut out);
    }
    assert_eq!(&drained[..4], &[0xE0, 0xE1, 0xE2, 0xE3]);
    assert_eq!(&drained[4..], &[0x11, 0x22, 0x33, 0x44]);
}

/// Tests back-to-back transaction independence: a command following a
/// completed transaction decodes from a clean Idle state.
#[test]
fn test_back_to_back_commands() {
    let (mut dec, mut regs, mut out) = setup();

    for byte in [0x05, 0xAA, 0xBB, 0xCC, 0xDD] {
        dec.tick(Some(byte), &mut regs, &mut out);
    }
    assert_eq!(regs.read(0x05), 0xAABB_CCDD);
    assert!(dec.is_idle());

    for byte in [0x06, 0x01, 0x02, 0x03, 0x04] {
        dec.tick(Some(byte), &mut regs, &mut out);
    }
    assert_eq!(regs.read(0x06), 0x0102_0304);
    assert_eq!(regs.read(0x05), 0xAABB_CCDD);
}

/// Tests that reset returns a parked decoder to Idle.
#[test]
fn test_reset_recovers_parked_decoder() {
    let (mut dec, mut regs, mut out) = setup();
    dec.tick(Some(0x10), &mut regs, &mut out);
    dec.tick(Some(0x99), &mut regs, &mut out);
    assert!(!dec.is_idle());

    dec.reset();
    assert!(dec.is_idle());
    assert_eq!(regs.read(0x10), 0, "no partial write was committed");
}
