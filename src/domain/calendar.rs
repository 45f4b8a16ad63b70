// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Month/day validity: the canonical dependent pair.
//!
//! The day bound is keyed by the month, so the month must be judged first.
//! [`DayOfMonth`] expresses that as a two-stage chain over raw input
//! (`String` month name, `u8` day); [`MonthDay`] is the simple-tuple form
//! for callers that already hold a parsed [`Month`].
//!
//! February is fixed at 28 days. Leap years are deliberately out of scope;
//! callers needing them should treat the year as a third chain stage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dependent::DependentPredicate;
use crate::predicate::Predicate;

/// Calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// All twelve months, in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Upper day bound for this month. February is fixed at 28.
    pub const fn days(self) -> u8 {
        match self {
            Month::February => 28,
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
        }
    }

    /// English name, capitalized.
    pub const fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for strings that name no month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthError {
    input: String,
}

impl ParseMonthError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a month name", self.input)
    }
}

impl std::error::Error for ParseMonthError {}

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Case-insensitive English month names.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        MONTHS
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| ParseMonthError {
                input: input.to_string(),
            })
    }
}

/// Strings that name a month (stage one of [`DayOfMonth`]).
pub enum KnownMonth {}

impl Predicate<String> for KnownMonth {
    const NAME: &'static str = "known-month";

    fn holds(value: &String) -> bool {
        Month::from_str(value).is_ok()
    }
}

/// Dependent pair over raw input: the month name gates the day bound.
///
/// Stage one ([`KnownMonth`]) must recognize the month before stage two can
/// look up its day bound; an unparsed month has no bound to check against.
pub enum DayOfMonth {}

impl DependentPredicate<String, u8> for DayOfMonth {
    const NAME: &'static str = "day-of-month";

    type First = KnownMonth;

    fn holds(month: &String, day: &u8) -> bool {
        match Month::from_str(month) {
            Ok(month) => (1..=month.days()).contains(day),
            Err(_) => false,
        }
    }
}

/// Simple-tuple form for callers that already hold a parsed [`Month`].
pub enum MonthDay {}

impl Predicate<(Month, u8)> for MonthDay {
    const NAME: &'static str = "month-day";

    fn holds(&(month, day): &(Month, u8)) -> bool {
        (1..=month.days()).contains(&day)
    }
}
