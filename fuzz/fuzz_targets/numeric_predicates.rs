// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the scalar predicates.
//!
//! Every candidate must produce exactly one outcome without panicking, and
//! a success must re-evaluate to true (soundness under fuzz).

#![no_main]

use libfuzzer_sys::fuzz_target;

use attest::{evaluate, is_prime, NonNegativeInteger, Prime, Refined, Whole};

fuzz_target!(|data: (f64, u64)| {
    let (float_candidate, int_candidate) = data;

    // Property 1: verify never panics, for any bit pattern including NaN
    match Refined::<f64, Whole>::verify(float_candidate) {
        Ok(whole) => {
            // Property 2: soundness - the brand re-evaluates to true
            assert!(evaluate::<Whole, _>(whole.get()));
        }
        Err(rejected) => {
            // Property 3: the candidate survives rejection bit-for-bit
            assert_eq!(rejected.into_inner().to_bits(), float_candidate.to_bits());
        }
    }

    match Refined::<f64, NonNegativeInteger>::verify(float_candidate) {
        Ok(value) => assert!(*value.get() >= 0.0),
        Err(rejected) => assert!(!evaluate::<NonNegativeInteger, _>(rejected.value())),
    }

    // Property 4: primality is total and sound for any u64
    if let Ok(prime) = Refined::<u64, Prime>::verify(int_candidate) {
        let n = prime.into_inner();
        assert!(n >= 2);
        assert!(is_prime(n));
    }
});
