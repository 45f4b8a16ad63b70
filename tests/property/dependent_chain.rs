//! Dependent chain properties: evaluation order and short-circuiting.

use attest::testing::{
    first_stage_calls, reset_probe, second_stage_calls, ProbedDayOfMonth, ProbedKnownMonth,
};
use attest::{DepRefined, KnownMonth, Predicate, Refined};
use proptest::prelude::*;

use crate::common::month_names;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Strings that are mostly not month names.
fn garbage_month_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,12}"
}

/// Real month names, in canonical capitalization.
fn month_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(month_names()).prop_map(str::to_string)
}

proptest! {
    /// Property: when stage one rejects, stage two is never evaluated.
    #[test]
    fn prop_stage_two_skipped_on_stage_one_failure(
        month in garbage_month_strategy(),
        day in any::<u8>(),
    ) {
        prop_assume!(!KnownMonth::holds(&month));

        reset_probe();
        let outcome = DepRefined::<String, u8, ProbedDayOfMonth>::verify(month, day);
        prop_assert!(outcome.is_err());
        prop_assert_eq!(first_stage_calls(), 1);
        prop_assert_eq!(second_stage_calls(), 0);
    }

    /// Property: when stage one accepts, stage two runs exactly once.
    #[test]
    fn prop_stage_two_runs_after_stage_one(
        month in month_name_strategy(),
        day in any::<u8>(),
    ) {
        reset_probe();
        let _ = DepRefined::<String, u8, ProbedDayOfMonth>::verify(month, day);
        prop_assert_eq!(first_stage_calls(), 1);
        prop_assert_eq!(second_stage_calls(), 1);
    }

    /// Property: one-shot and staged construction agree.
    #[test]
    fn prop_one_shot_equals_staged(
        month in month_name_strategy(),
        day in any::<u8>(),
    ) {
        let one_shot =
            DepRefined::<String, u8, ProbedDayOfMonth>::verify(month.clone(), day).is_ok();

        let staged = Refined::<String, ProbedKnownMonth>::verify(month)
            .ok()
            .and_then(|verified| {
                DepRefined::<String, u8, ProbedDayOfMonth>::complete(verified, day).ok()
            })
            .is_some();

        prop_assert_eq!(one_shot, staged);
    }
}
