//! Negation completeness: exactly one outcome, nothing lost on failure.

use attest::{evaluate, NonNegativeInteger, Refined, Whole};
use proptest::prelude::*;

/// The early-return shape: validate, bail on failure, use the brand after.
fn sum_of_whole(value: f64) -> Option<f64> {
    let whole = match Refined::<f64, Whole>::verify(value) {
        Err(_) => return None,
        Ok(whole) => whole,
    };
    Some(*whole.get() + *whole.get())
}

/// The success-branch shape of the same function.
fn sum_of_whole_matched(value: f64) -> Option<f64> {
    match Refined::<f64, Whole>::verify(value) {
        Ok(whole) => Some(*whole.get() + *whole.get()),
        Err(_) => None,
    }
}

proptest! {
    /// Property: verify is total and two-valued - exactly one branch fires.
    #[test]
    fn prop_exactly_one_outcome(value in any::<f64>()) {
        let holds = evaluate::<NonNegativeInteger, _>(&value);
        let outcome = Refined::<f64, NonNegativeInteger>::verify(value);
        prop_assert_eq!(outcome.is_ok(), holds);
        prop_assert_eq!(outcome.is_err(), !holds);
    }

    /// Property: the failure branch hands the candidate back bit-for-bit.
    #[test]
    fn prop_failure_returns_the_candidate(value in any::<f64>()) {
        if let Err(rejected) = Refined::<f64, NonNegativeInteger>::verify(value) {
            prop_assert_eq!(rejected.into_inner().to_bits(), value.to_bits());
        }
    }

    /// Property: early-return and branch-on-success are interchangeable.
    #[test]
    fn prop_branch_shapes_are_equivalent(value in any::<f64>()) {
        prop_assert_eq!(sum_of_whole(value), sum_of_whole_matched(value));
    }

    /// Property: a failed check does not poison a later retry.
    #[test]
    fn prop_rejected_value_can_be_repaired(value in any::<f64>()) {
        if let Err(rejected) = Refined::<f64, NonNegativeInteger>::verify(value) {
            let repaired = rejected.into_inner().abs().round();
            if repaired.is_finite() {
                prop_assert!(Refined::<f64, NonNegativeInteger>::verify(repaired).is_ok());
            }
        }
    }
}
