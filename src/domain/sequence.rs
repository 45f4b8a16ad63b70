// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence predicates, and the total operations they unlock.
//!
//! `first()` on a bare `Vec` is partial: the empty case has no answer. Once
//! a sequence is refined under [`NonEmpty`], [`head`] is total: the invariant
//! held at construction, so index 0 exists for the wrapper's whole lifetime.

use crate::predicate::Predicate;
use crate::refined::Refined;

/// Sequences (and strings) with at least one element.
pub enum NonEmpty {}

impl<T> Predicate<Vec<T>> for NonEmpty {
    const NAME: &'static str = "non-empty";

    fn holds(value: &Vec<T>) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NonEmpty {
    const NAME: &'static str = "non-empty";

    fn holds(value: &String) -> bool {
        !value.is_empty()
    }
}

/// First element of a non-empty sequence. Total.
pub fn head<T>(list: &Refined<Vec<T>, NonEmpty>) -> &T {
    // Invariant: NonEmpty held at construction, so index 0 exists.
    &list.get()[0]
}
