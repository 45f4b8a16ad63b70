// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for name-keyed registry dispatch.
//!
//! Lookups with arbitrary names must never panic, and every checked value
//! must still satisfy the predicate it claims.

#![no_main]

use libfuzzer_sys::fuzz_target;

use attest::{NonNegativeInteger, Registry, Whole};

fuzz_target!(|data: (String, f64)| {
    let (name, candidate) = data;

    let mut registry = Registry::<f64>::new();
    registry.register_predicate::<NonNegativeInteger>();
    registry.register_predicate::<Whole>();

    // Arbitrary names must dispatch or miss cleanly, never panic
    match registry.verify(&name, candidate) {
        Ok(checked) => {
            assert!(registry.contains(checked.predicate()));
            assert_eq!(
                registry.evaluate(checked.predicate(), checked.get()),
                Some(true)
            );
        }
        Err(err) => {
            // The candidate always comes back
            assert_eq!(err.into_inner().to_bits(), candidate.to_bits());
        }
    }
});
