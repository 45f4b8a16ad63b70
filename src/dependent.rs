// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dependent refinements: the second field is judged against the first.
//!
//! A [`DependentPredicate`] is a two-stage chain. Stage one is an ordinary
//! [`Predicate`] over the first field; stage two sees the first field as
//! context while judging the second. Evaluation is left-to-right and
//! short-circuits: when stage one rejects, stage two is never invoked. That
//! ordering is structural, not incidental, since stage two may be ill-defined
//! without a valid first field (a day bound means nothing for an unknown
//! month).
//!
//! The composite is validated only as a whole. A verified first field alone
//! is a [`Refined`], never a partial [`DepRefined`]; the pair exists only
//! once both stages have passed.

use std::fmt;
use std::marker::PhantomData;

use crate::outcome::Unverified;
use crate::predicate::Predicate;
use crate::refined::Refined;

/// A two-stage predicate over an ordered pair.
///
/// `First` gates the first field; `holds` judges the second field with the
/// first as context. Both stages share the purity contract of [`Predicate`].
pub trait DependentPredicate<A, B> {
    /// Name used in failure reports for a stage-two rejection.
    const NAME: &'static str;

    /// Stage one: the predicate the first field must satisfy on its own.
    type First: Predicate<A>;

    /// Stage two: judge the second field given a first field that already
    /// passed [`Self::First`].
    fn holds(first: &A, second: &B) -> bool;
}

/// An ordered pair proven valid under a dependent predicate.
///
/// Construction runs the chain `First(a) ∧ holds(a, b)` left-to-right with
/// short-circuit; there is no way to assemble the pair field-by-field
/// without that order.
pub struct DepRefined<A, B, P> {
    first: A,
    second: B,
    _predicate: PhantomData<fn() -> P>,
}

impl<A, B, P: DependentPredicate<A, B>> DepRefined<A, B, P> {
    /// Validate the whole pair at once.
    ///
    /// Stage one runs first; if it rejects, stage two is never evaluated and
    /// the error names the stage-one predicate. Either way the caller gets
    /// both fields back on failure.
    pub fn verify(first: A, second: B) -> Result<Self, Unverified<(A, B)>> {
        if !<P::First as Predicate<A>>::holds(&first) {
            return Err(Unverified::new(
                (first, second),
                <P::First as Predicate<A>>::NAME,
            ));
        }
        if !P::holds(&first, &second) {
            return Err(Unverified::new((first, second), P::NAME));
        }
        Ok(Self {
            first,
            second,
            _predicate: PhantomData,
        })
    }

    /// Staged construction: accept an already-verified first field, then
    /// judge the second against it.
    ///
    /// This is the builder form of the chain: the stage-one check happened
    /// when the caller obtained the `Refined`, so only stage two runs here.
    pub fn complete(first: Refined<A, P::First>, second: B) -> Result<Self, Unverified<B>> {
        let first = first.into_inner();
        if P::holds(&first, &second) {
            Ok(Self {
                first,
                second,
                _predicate: PhantomData,
            })
        } else {
            Err(Unverified::new(second, P::NAME))
        }
    }

    /// Name of the stage-two predicate.
    pub fn predicate() -> &'static str {
        P::NAME
    }
}

impl<A, B, P> DepRefined<A, B, P> {
    /// Borrow the first field.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Borrow the second field.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Unwrap back to the bare pair, representation-preserving.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Clone, B: Clone, P> Clone for DepRefined<A, B, P> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<A: PartialEq, B: PartialEq, P> PartialEq for DepRefined<A, B, P> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<A: Eq, B: Eq, P> Eq for DepRefined<A, B, P> {}

impl<A, B, P> fmt::Debug for DepRefined<A, B, P>
where
    A: fmt::Debug,
    B: fmt::Debug,
    P: DependentPredicate<A, B>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepRefined")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("predicate", &P::NAME)
            .finish()
    }
}
