// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the dependent month/day chain.
//!
//! The chain must never panic on garbage month strings, and any accepted
//! pair must satisfy both stages on re-evaluation.

#![no_main]

use libfuzzer_sys::fuzz_target;

use attest::{DayOfMonth, DepRefined, KnownMonth, Month, Predicate};

fuzz_target!(|data: (String, u8)| {
    let (month, day) = data;

    match DepRefined::<String, u8, DayOfMonth>::verify(month.clone(), day) {
        Ok(pair) => {
            // Stage one must hold for the stored first field
            assert!(KnownMonth::holds(pair.first()));

            // Stage two must hold against the parsed month's bound
            let parsed: Month = pair.first().parse().expect("stage one vouched for this");
            assert!(*pair.second() >= 1);
            assert!(*pair.second() <= parsed.days());
        }
        Err(rejected) => {
            // Negation completeness: both fields come back unchanged
            let (month_back, day_back) = rejected.into_inner();
            assert_eq!(month_back, month);
            assert_eq!(day_back, day);
        }
    }
});
