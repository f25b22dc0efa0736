//! Tests for the inbound toggle bridge and the outbound bridge
//! strategies, including the documented hazards.

use regbridge::cdc::{ByteBridgeIn, HandshakeBridgeOut, OutboundBridge, QueueBridgeOut};
use regbridge::link::TxByteSource;

/// Tests single-byte delivery timing: a published byte becomes visible
/// on the second subsystem tick, exactly once.
#[test]
fn test_bridge_in_single_delivery() {
    let mut bridge = ByteBridgeIn::new();
    assert_eq!(bridge.tick(), None);

    bridge.publish(0x11);
    assert_eq!(bridge.tick(), None, "synchronization takes two ticks");
    assert_eq!(bridge.tick(), Some(0x11));
    assert_eq!(bridge.tick(), None, "a byte is delivered exactly once");
}

/// Tests byte bridge fidelity: when publications are spaced at least two
/// subsystem ticks apart, every byte arrives exactly once, in order.
#[test]
fn test_bridge_in_ordered_fidelity() {
    let mut bridge = ByteBridgeIn::new();
    let mut delivered = Vec::new();

    for value in 0..50u8 {
        bridge.publish(value);
        for _ in 0..3 {
            if let Some(byte) = bridge.tick() {
                delivered.push(byte);
            }
        }
    }

    let expected: Vec<u8> = (0..50).collect();
    assert_eq!(delivered, expected);
}

/// Tests the documented toggle-overrun hazard: publishing twice inside
/// the synchronization window does not deliver both bytes.
#[test]
fn test_bridge_in_overrun_hazard() {
    let mut bridge = ByteBridgeIn::new();

    // Two flips before any subsystem tick cancel out; the bridge has no
    // way to detect that anything happened.
    bridge.publish(0xAA);
    bridge.publish(0xBB);
    let mut delivered = Vec::new();
    for _ in 0..6 {
        if let Some(byte) = bridge.tick() {
            delivered.push(byte);
        }
    }
    assert!(
        delivered.len() < 2,
        "overrun must not deliver both bytes, got {:?}",
        delivered
    );
}

/// Tests backpressure on the queue-backed outbound bridge: offers are
/// gated by ready and nothing enqueued is ever lost.
#[test]
fn test_queue_bridge_out_backpressure() {
    let mut bridge = QueueBridgeOut::new(4);

    for i in 0..4u8 {
        bridge.tick_subsystem();
        assert!(bridge.ready());
        assert!(bridge.offer(0xC0 + i));
    }
    assert!(!bridge.ready());
    assert!(!bridge.offer(0xFF));

    let mut taken = Vec::new();
    for _ in 0..10 {
        bridge.tick_link();
        if let Some(byte) = bridge.try_take() {
            taken.push(byte);
        }
    }
    assert_eq!(taken, [0xC0, 0xC1, 0xC2, 0xC3]);
}

/// Tests that the queue-backed bridge reports ready again once the link
/// side's consumption has synchronized back.
#[test]
fn test_queue_bridge_out_ready_recovers() {
    let mut bridge = QueueBridgeOut::new(4);
    for i in 0..4 {
        bridge.offer(i);
    }
    assert!(!bridge.ready());

    bridge.tick_link();
    bridge.tick_link();
    assert_eq!(bridge.try_take(), Some(0));

    bridge.tick_subsystem();
    assert!(!bridge.ready(), "producer view must lag conservatively");
    bridge.tick_subsystem();
    assert!(bridge.ready());
}

/// Tests the handshake bridge in its safe regime: offers paced slower
/// than the round-trip synchronization latency all get through.
#[test]
fn test_handshake_bridge_paced_transfer() {
    let mut bridge = HandshakeBridgeOut::new();
    let mut taken = Vec::new();

    for value in [0x10u8, 0x20, 0x30] {
        assert!(bridge.ready());
        assert!(bridge.offer(value));
        // Valid crosses into the link domain after two link ticks.
        bridge.tick_link();
        bridge.tick_link();
        if let Some(byte) = bridge.try_take() {
            taken.push(byte);
        }
        // Ready crosses back after two subsystem ticks.
        bridge.tick_link();
        bridge.tick_subsystem();
        bridge.tick_subsystem();
    }

    assert_eq!(taken, [0x10, 0x20, 0x30]);
    assert_eq!(bridge.dropped_bytes, 0);
}

/// Tests the documented data-loss hazard of the handshake bridge: a
/// second offer inside the round-trip window silently overwrites the
/// first byte while ready still reads stale-high.
#[test]
fn test_handshake_bridge_overwrite_hazard() {
    let mut bridge = HandshakeBridgeOut::new();

    assert!(bridge.offer(0xAA));
    // Ready is still the stale synchronized value, so the bridge accepts
    // a second byte before the link consumed the first.
    assert!(bridge.ready());
    assert!(bridge.offer(0xBB));
    assert_eq!(bridge.dropped_bytes, 1);

    bridge.tick_link();
    bridge.tick_link();
    assert_eq!(bridge.try_take(), Some(0xBB), "first byte silently lost");
    assert_eq!(bridge.try_take(), None);
}
