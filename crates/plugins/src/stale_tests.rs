// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hermes_core::{EpochCounter, Stamped};

#[yare::parameterized(
    older = { 0, 1, true },
    same = { 1, 1, false },
    newer = { 2, 1, false },
)]
fn checks_against_current_epoch(msg_epoch: u64, current_epoch: u64, expected_stale: bool) {
    let counter = EpochCounter::new();
    let epochs: Vec<Epoch> = std::iter::once(Epoch::INITIAL)
        .chain((0..3).map(|_| counter.bump()))
        .collect();

    let msg = Stamped::new(epochs[msg_epoch as usize], ());
    assert_eq!(
        is_stale(epochs[current_epoch as usize], &msg),
        expected_stale
    );
}
