//! Calendar properties: day bounds keyed by month.

use attest::{evaluate, DayOfMonth, DepRefined, Month, MonthDay, MONTHS};
use proptest::prelude::*;

use crate::common::day_bound;

fn month_strategy() -> impl Strategy<Value = Month> {
    prop::sample::select(MONTHS.to_vec())
}

proptest! {
    /// Property: a (month, day) pair is valid iff day is in [1, bound].
    #[test]
    fn prop_day_valid_iff_within_bound(month in month_strategy(), day in any::<u8>()) {
        let expected = day >= 1 && day <= day_bound(month);
        prop_assert_eq!(evaluate::<MonthDay, _>(&(month, day)), expected);
    }

    /// Property: the string-typed dependent chain agrees with the enum form.
    #[test]
    fn prop_dependent_chain_agrees_with_enum_form(
        month in month_strategy(),
        day in any::<u8>(),
    ) {
        let by_chain =
            DepRefined::<String, u8, DayOfMonth>::verify(month.to_string(), day).is_ok();
        let by_enum = evaluate::<MonthDay, _>(&(month, day));
        prop_assert_eq!(by_chain, by_enum);
    }

    /// Property: month parsing is case-insensitive and total over the table.
    #[test]
    fn prop_month_names_round_trip(month in month_strategy()) {
        let lower: Month = month.to_string().to_lowercase().parse().unwrap();
        let upper: Month = month.to_string().to_uppercase().parse().unwrap();
        prop_assert_eq!(lower, month);
        prop_assert_eq!(upper, month);
    }

    /// Property: no month admits day 0 or day bound + 1.
    #[test]
    fn prop_bounds_are_tight(month in month_strategy()) {
        prop_assert!(!evaluate::<MonthDay, _>(&(month, 0)));
        prop_assert!(evaluate::<MonthDay, _>(&(month, day_bound(month))));
        prop_assert!(!evaluate::<MonthDay, _>(&(month, day_bound(month) + 1)));
    }
}
