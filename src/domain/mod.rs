// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference predicates across the four base shapes.
//!
//! Each submodule exercises the engine on one kind of domain without adding
//! engine behavior: scalars ([`numeric`]), sequences ([`sequence`]),
//! dependent tuples ([`calendar`]), and records ([`records`]).

mod calendar;
mod numeric;
mod records;
mod sequence;

pub use calendar::{DayOfMonth, KnownMonth, Month, MonthDay, ParseMonthError, MONTHS};
pub use numeric::{is_prime, AtLeast, Divisible, NonNegativeInteger, Prime, Whole};
pub use records::{outfit_combinations, Inventory, Signup, SufficientOutfits, ValidSignup, MINIMUM_AGE};
pub use sequence::{head, NonEmpty};
