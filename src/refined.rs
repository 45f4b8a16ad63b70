// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The branded wrapper that makes "checked" a type, not a comment.
//!
//! [`Refined<T, P>`] pairs a base value with a phantom predicate marker. The
//! field is private to this module and the only producing operation is
//! [`Refined::verify`], so holding a `Refined<T, P>` anywhere in a program is
//! proof that `P` held for that value at construction time.
//!
//! # Invariants (enforced at construction)
//!
//! | Property                | How it is guaranteed                          |
//! |-------------------------|-----------------------------------------------|
//! | Soundness               | `verify` runs `P::holds` before wrapping      |
//! | No fabrication          | private field, no other constructor, `unsafe_code = "forbid"` |
//! | Representation identity | `repr(transparent)`, `into_inner` moves the value out unchanged |
//! | Permanence              | no `&mut` access to the inner value           |
//!
//! # Example
//!
//! ```
//! use attest::{Prime, Refined};
//!
//! let prime = Refined::<u64, Prime>::verify(13).unwrap();
//! assert_eq!(*prime, 13);
//!
//! // 14 is simply not convertible; the candidate comes back in the error.
//! let rejected = Refined::<u64, Prime>::verify(14).unwrap_err();
//! assert_eq!(rejected.into_inner(), 14);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::outcome::{Outcome, Unverified};
use crate::predicate::Predicate;

/// A value of `T` proven to satisfy predicate `P` at construction time.
///
/// Same bits, same shape as a bare `T`; the phantom parameter only changes
/// what the type system lets you do with it. Read access is free (`Deref`,
/// [`get`](Refined::get)); mutation is not offered, since an edited value
/// would need re-validation.
#[repr(transparent)]
pub struct Refined<T, P> {
    value: T,
    // fn() -> P keeps the wrapper Send/Sync/covariant independent of P.
    _predicate: PhantomData<fn() -> P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Run the predicate and brand the value on success.
    ///
    /// This is the sole way to obtain a `Refined<T, P>`. On failure the
    /// candidate is returned inside [`Unverified`], so the caller keeps
    /// ownership either way.
    pub fn verify(value: T) -> Outcome<T, P> {
        if P::holds(&value) {
            Ok(Self {
                value,
                _predicate: PhantomData,
            })
        } else {
            Err(Unverified::new(value, P::NAME))
        }
    }

    /// Name of the predicate this wrapper is branded with.
    pub fn predicate() -> &'static str {
        P::NAME
    }
}

impl<T, P> Refined<T, P> {
    /// Borrow the underlying value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap back to the base value, representation-preserving.
    ///
    /// Always succeeds; the brand is dropped, the bits are unchanged.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, P> Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, P> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// Manual impls: deriving would demand the bounds on P, which is a phantom.

impl<T: Clone, P> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<T: Copy, P> Copy for Refined<T, P> {}

impl<T: PartialEq, P> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P> Eq for Refined<T, P> {}

impl<T: PartialOrd, P> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &P::NAME)
            .finish()
    }
}

impl<T: fmt::Display, P> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Serializes transparently as the base value.
impl<T: Serialize, P> Serialize for Refined<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Deserializes through [`Refined::verify`]: persisted data re-enters the
/// program only through the smart constructor, so a stored value that fails
/// its predicate is a deserialization error.
impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::verify(value).map_err(serde::de::Error::custom)
    }
}
