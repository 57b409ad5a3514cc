// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn starts_at_initial() {
    let counter = EpochCounter::new();
    assert_eq!(counter.current(), Epoch::INITIAL);
}

#[test]
fn bump_strictly_increases() {
    let counter = EpochCounter::new();
    let first = counter.bump();
    let second = counter.bump();
    assert!(second > first);
    assert_eq!(first.value(), 1);
    assert_eq!(second.value(), 2);
}

#[test]
fn shared_counter_observes_bumps_across_clones() {
    let counter = EpochCounter::new();
    let clone = counter.clone();
    clone.bump();
    assert_eq!(counter.current(), Epoch(1));
}

#[test]
fn stamped_reports_its_epoch() {
    let stamped = Stamped::new(Epoch(3), "payload");
    assert_eq!(stamped.epoch(), Epoch(3));
    assert_eq!(stamped.value, "payload");
}
