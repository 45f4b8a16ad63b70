// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. Its
//! predicates deliberately break the purity contract: they record that they
//! were invoked, which is exactly what the short-circuit tests need to
//! observe.
//!
//! Counters are thread-local, so parallel test threads never see each
//! other's probe hits.

use std::cell::Cell;

use crate::dependent::DependentPredicate;
use crate::domain::KnownMonth;
use crate::predicate::Predicate;

thread_local! {
    static FIRST_STAGE_CALLS: Cell<usize> = const { Cell::new(0) };
    static SECOND_STAGE_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// Reset both probe counters for the current thread.
pub fn reset_probe() {
    FIRST_STAGE_CALLS.with(|calls| calls.set(0));
    SECOND_STAGE_CALLS.with(|calls| calls.set(0));
}

/// How many times the probed stage-one predicate ran on this thread.
pub fn first_stage_calls() -> usize {
    FIRST_STAGE_CALLS.with(Cell::get)
}

/// How many times the probed stage-two predicate ran on this thread.
pub fn second_stage_calls() -> usize {
    SECOND_STAGE_CALLS.with(Cell::get)
}

/// Stage-one probe: counts invocations, then judges like [`KnownMonth`].
pub enum ProbedKnownMonth {}

impl Predicate<String> for ProbedKnownMonth {
    const NAME: &'static str = "probed-known-month";

    fn holds(value: &String) -> bool {
        FIRST_STAGE_CALLS.with(|calls| calls.set(calls.get() + 1));
        KnownMonth::holds(value)
    }
}

/// Instrumented day-of-month chain: same judgement as
/// [`DayOfMonth`](crate::domain::DayOfMonth), with both stages counted.
pub enum ProbedDayOfMonth {}

impl DependentPredicate<String, u8> for ProbedDayOfMonth {
    const NAME: &'static str = "probed-day-of-month";

    type First = ProbedKnownMonth;

    fn holds(month: &String, day: &u8) -> bool {
        SECOND_STAGE_CALLS.with(|calls| calls.set(calls.get() + 1));
        match month.parse::<crate::domain::Month>() {
            Ok(month) => (1..=month.days()).contains(day),
            Err(_) => false,
        }
    }
}
