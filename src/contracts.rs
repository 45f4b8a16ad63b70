// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the refinement invariants.
//!
//! Debug-mode assertions that re-check what the type system already
//! guarantees. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Restate the library's core properties at the value level
//!
//! | Contract Function        | Property                                    |
//! |--------------------------|---------------------------------------------|
//! | `check_refined_sound`    | verified value still satisfies its predicate|
//! | `check_checked_sound`    | registry-verified value still satisfies     |
//! | `check_dependent_sound`  | dependent pair passes both chain stages     |
//! | `check_unwrap_identity`  | unwrap is representation-preserving         |

use crate::dependent::{DepRefined, DependentPredicate};
use crate::predicate::Predicate;
use crate::refined::Refined;
use crate::registry::{Checked, Registry};

// Compile-time restatement of the calendar table bounds.
const _: () = {
    use crate::domain::Month;
    assert!(Month::February.days() == 28);
    assert!(Month::April.days() == 30);
    assert!(Month::December.days() == 31);
};

/// Check that a refined value still satisfies its predicate.
///
/// Cannot fail through the public API; a failure here means the purity
/// contract was broken (a predicate observing mutable external state).
///
/// # Panics (debug builds only)
/// Panics if `P::holds` no longer accepts the wrapped value.
#[inline]
pub fn check_refined_sound<T, P: Predicate<T>>(refined: &Refined<T, P>) {
    debug_assert!(
        P::holds(refined.get()),
        "Contract violation: soundness - value no longer satisfies '{}'",
        P::NAME
    );
}

/// Check that a registry-verified value still satisfies its named predicate.
///
/// # Panics (debug builds only)
/// Panics if the registry rejects the value, or no longer knows the name it
/// was verified under.
#[inline]
pub fn check_checked_sound<T>(registry: &Registry<T>, checked: &Checked<T>) {
    let verdict = registry.evaluate(checked.predicate(), checked.get());
    debug_assert!(
        verdict == Some(true),
        "Contract violation: soundness - '{}' does not vouch for this value (verdict {:?})",
        checked.predicate(),
        verdict
    );
}

/// Check that a dependent pair passes both stages of its chain.
///
/// # Panics (debug builds only)
/// Panics if either the stage-one predicate or the dependent stage rejects.
#[inline]
pub fn check_dependent_sound<A, B, P: DependentPredicate<A, B>>(pair: &DepRefined<A, B, P>) {
    debug_assert!(
        <P::First as Predicate<A>>::holds(pair.first()),
        "Contract violation: chain order - first field fails '{}'",
        <P::First as Predicate<A>>::NAME
    );
    debug_assert!(
        P::holds(pair.first(), pair.second()),
        "Contract violation: soundness - pair fails '{}'",
        P::NAME
    );
}

/// Check that unwrapping preserved the representation exactly.
///
/// # Panics (debug builds only)
/// Panics if the unwrapped value differs from the original candidate.
#[inline]
pub fn check_unwrap_identity<T: PartialEq + std::fmt::Debug>(original: &T, unwrapped: &T) {
    debug_assert!(
        original == unwrapped,
        "Contract violation: representation identity - {:?} != {:?}",
        original,
        unwrapped
    );
}
