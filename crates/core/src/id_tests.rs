// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;
use chrono::{TimeZone, Utc};
use std::collections::HashSet;

#[test]
fn order_numbers_have_prefix_timestamp_and_suffix() {
    let clock = FakeClock::at(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
    let id_gen = OrderNumberGen::with_clock("CA", clock.clone());

    let id = id_gen.next();
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "CA");
    assert_eq!(parts[1], to_base36(clock.now().timestamp_millis() as u64));
    assert_eq!(parts[2].len(), 4);
    assert!(parts[2]
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
}

#[test]
fn order_numbers_differ_within_the_same_millisecond() {
    let clock = FakeClock::new();
    let id_gen = OrderNumberGen::with_clock("ORD", clock);

    // Frozen clock: only the random suffix varies. Collisions in 16 bits are
    // possible but vanishingly unlikely across a handful of draws.
    let ids: HashSet<String> = (0..8).map(|_| id_gen.next()).collect();
    assert!(ids.len() >= 7);
}

#[test]
fn default_order_gen_uses_default_prefix() {
    let id = OrderNumberGen::default().next();
    assert!(id.starts_with("ORD-"));
}

#[test]
fn base36_encoding() {
    assert_eq!(to_base36(0), "0");
    assert_eq!(to_base36(35), "Z");
    assert_eq!(to_base36(36), "10");
    assert_eq!(to_base36(1_295), "ZZ");
}

#[test]
fn sequential_gen_creates_predictable_ids() {
    let id_gen = SequentialIdGen::new("test");
    assert_eq!(id_gen.next(), "test-1");
    assert_eq!(id_gen.next(), "test-2");
    assert_eq!(id_gen.next(), "test-3");
}

#[test]
fn sequential_gen_is_cloneable_and_shared() {
    let id_gen1 = SequentialIdGen::new("shared");
    let id_gen2 = id_gen1.clone();
    assert_eq!(id_gen1.next(), "shared-1");
    assert_eq!(id_gen2.next(), "shared-2");
    assert_eq!(id_gen1.next(), "shared-3");
}
