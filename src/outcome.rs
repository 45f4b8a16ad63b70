// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation outcomes and the narrowing contract.
//!
//! A failed check is not an error condition, it is one of two first-class
//! outcomes. [`Unverified`] carries the rejected base value back to the
//! caller, so after branching on a `verify` result the continuation always
//! holds exactly one of:
//!
//! - a [`Refined`](crate::Refined) wrapper (the success branch), or
//! - the bare base value, recovered via [`Unverified::into_inner`] (the
//!   failure branch).
//!
//! There is no third state. Because `verify` consumes its input, branching on
//! failure and returning early is interchangeable with branching on success:
//! both shapes leave the surrounding code with the same two possibilities.

use std::fmt;

use crate::predicate::Predicate;
use crate::refined::Refined;

/// Result of running a predicate's smart constructor.
pub type Outcome<T, P> = Result<Refined<T, P>, Unverified<T>>;

/// A rejected candidate, still owned by the caller.
///
/// Holds the base value that failed validation together with the name of the
/// predicate that rejected it. The value is returned unchanged; rejection
/// never consumes or mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unverified<T> {
    value: T,
    predicate: &'static str,
}

impl<T> Unverified<T> {
    pub(crate) fn new(value: T, predicate: &'static str) -> Self {
        Self { value, predicate }
    }

    /// Name of the predicate that rejected the value.
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// Borrow the rejected value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the rejected value back.
    ///
    /// This is the negated branch of the narrowing contract: the caller
    /// regains ownership of the base value, unverified.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Retry against a different predicate.
    pub fn retry<P>(self) -> Outcome<T, P>
    where
        P: Predicate<T>,
    {
        Refined::verify(self.value)
    }
}

impl<T> fmt::Display for Unverified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value did not satisfy predicate '{}'", self.predicate)
    }
}

impl<T: fmt::Debug> std::error::Error for Unverified<T> {}
