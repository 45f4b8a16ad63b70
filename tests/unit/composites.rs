//! Composite scenarios: tuples, dependent pairs, and whole-record validation.

use attest::{
    evaluate, outfit_combinations, DayOfMonth, DepRefined, Divisible, Month, MonthDay, Refined,
    Signup, SufficientOutfits, ValidSignup,
};

use crate::common::{good_signup, wardrobe};

// ============================================================================
// TUPLES
// ============================================================================

#[test]
fn divisibility_scenarios() {
    assert!(evaluate::<Divisible, _>(&(6, 2)));
    assert!(!evaluate::<Divisible, _>(&(7, 2)));
}

#[test]
fn month_day_scenarios() {
    assert!(!evaluate::<MonthDay, _>(&(Month::April, 31)));
    assert!(evaluate::<MonthDay, _>(&(Month::April, 30)));
    assert!(!evaluate::<MonthDay, _>(&(Month::February, 29)));
}

#[test]
fn february_is_fixed_at_twenty_eight_days() {
    assert!(evaluate::<MonthDay, _>(&(Month::February, 28)));
    // No leap-year extension.
    assert!(!evaluate::<MonthDay, _>(&(Month::February, 29)));
}

// ============================================================================
// DEPENDENT PAIRS
// ============================================================================

#[test]
fn dependent_pair_accepts_valid_month_and_day() {
    let pair = DepRefined::<String, u8, DayOfMonth>::verify("April".to_string(), 30).unwrap();
    assert_eq!(pair.into_parts(), ("April".to_string(), 30));
}

#[test]
fn dependent_pair_failure_names_the_failing_stage() {
    let stage_one =
        DepRefined::<String, u8, DayOfMonth>::verify("Smarch".to_string(), 1).unwrap_err();
    assert_eq!(stage_one.predicate(), "known-month");

    let stage_two =
        DepRefined::<String, u8, DayOfMonth>::verify("April".to_string(), 31).unwrap_err();
    assert_eq!(stage_two.predicate(), "day-of-month");
}

#[test]
fn staged_construction_only_runs_the_second_stage() {
    use attest::KnownMonth;

    let month = Refined::<String, KnownMonth>::verify("February".to_string()).unwrap();
    let pair = DepRefined::<String, u8, DayOfMonth>::complete(month, 28).unwrap();
    assert_eq!(*pair.second(), 28);
}

#[test]
fn a_verified_prefix_is_not_a_verified_composite() {
    use attest::KnownMonth;

    // The month alone refines fine...
    let month = Refined::<String, KnownMonth>::verify("February".to_string()).unwrap();
    // ...but the pair still fails as a whole when the day is out of bound.
    let err = DepRefined::<String, u8, DayOfMonth>::complete(month, 30).unwrap_err();
    assert_eq!(err.into_inner(), 30);
}

// ============================================================================
// RECORDS
// ============================================================================

#[test]
fn signup_record_validates_as_a_whole() {
    assert!(Refined::<Signup, ValidSignup>::verify(good_signup()).is_ok());

    let underage = Signup {
        username: "kid".to_string(),
        age: 9,
    };
    let err = Refined::<Signup, ValidSignup>::verify(underage.clone()).unwrap_err();
    assert_eq!(err.into_inner(), underage);
}

#[test]
fn inventory_threshold_is_met_or_rejected() {
    // 3 * 2 * 2 = 12 outfits.
    assert_eq!(outfit_combinations(&wardrobe(3, 2, 2, 0)), 12);

    assert!(Refined::<_, SufficientOutfits>::verify(wardrobe(3, 2, 2, 12)).is_ok());
    assert!(Refined::<_, SufficientOutfits>::verify(wardrobe(3, 2, 2, 13)).is_err());
}

#[test]
fn empty_category_means_no_outfits() {
    assert_eq!(outfit_combinations(&wardrobe(5, 0, 5, 0)), 0);
    assert!(Refined::<_, SufficientOutfits>::verify(wardrobe(5, 0, 5, 1)).is_err());
}
