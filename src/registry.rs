// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name-keyed predicate catalog for callers that pick predicates at runtime.
//!
//! [`Refined`](crate::Refined) brands values with a compile-time marker, but
//! a phantom parameter cannot be chosen from a string read at runtime. The
//! registry covers that case: predicates over one base domain are registered
//! under names, and [`Registry::verify`] produces a [`Checked`] wrapper that
//! carries the name it was verified under.
//!
//! Registration is pure association. Duplicate names are a caller concern,
//! not a failure: the newer predicate wins and `register` reports the
//! replacement.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::outcome::Unverified;
use crate::predicate::Predicate;

type ErasedPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A catalog of named predicates over the base domain `T`.
///
/// Entries are immutable once registered and shared behind `Arc`, so a
/// registry can be consulted freely from multiple threads.
pub struct Registry<T> {
    entries: HashMap<&'static str, ErasedPredicate<T>>,
}

impl<T> Registry<T> {
    /// An empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a predicate under a name. Returns `true` when an existing
    /// entry was replaced (last registration wins).
    pub fn register<F>(&mut self, name: &'static str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(name, Arc::new(predicate)).is_some()
    }

    /// Register a typed predicate marker under its own [`Predicate::NAME`].
    pub fn register_predicate<P>(&mut self) -> bool
    where
        P: Predicate<T> + 'static,
        T: 'static,
    {
        self.register(P::NAME, P::holds)
    }

    /// Whether a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of all registered predicates, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered predicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate a named predicate without constructing a wrapper.
    ///
    /// `None` means no predicate is registered under `name`.
    pub fn evaluate(&self, name: &str, value: &T) -> Option<bool> {
        self.entries.get(name).map(|predicate| predicate(value))
    }

    /// Run a named predicate and brand the value on success.
    ///
    /// The caller keeps ownership on every path: an unknown name and a
    /// rejection both hand the value back through [`RegistryError`].
    pub fn verify(&self, name: &str, value: T) -> Result<Checked<T>, RegistryError<T>> {
        match self.entries.get_key_value(name) {
            None => Err(RegistryError::Unknown {
                name: name.to_string(),
                value,
            }),
            Some((&key, predicate)) => {
                if predicate(&value) {
                    Ok(Checked {
                        value,
                        predicate: key,
                    })
                } else {
                    Err(RegistryError::Rejected(Unverified::new(value, key)))
                }
            }
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("names", &names).finish()
    }
}

/// A value verified against a predicate chosen by name at runtime.
///
/// The runtime counterpart of [`Refined`](crate::Refined): instead of a
/// phantom marker, the wrapper records which registry entry vouched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    value: T,
    predicate: &'static str,
}

impl<T> Checked<T> {
    /// Name of the predicate this value was verified under.
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// Borrow the underlying value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap back to the base value, representation-preserving.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Serializes transparently as the base value.
impl<T: Serialize> Serialize for Checked<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Why a registry verification did not produce a [`Checked`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError<T> {
    /// No predicate registered under the requested name.
    Unknown { name: String, value: T },
    /// The named predicate rejected the value.
    Rejected(Unverified<T>),
}

impl<T> RegistryError<T> {
    /// Take the candidate value back, whatever went wrong.
    pub fn into_inner(self) -> T {
        match self {
            RegistryError::Unknown { value, .. } => value,
            RegistryError::Rejected(unverified) => unverified.into_inner(),
        }
    }
}

impl<T> fmt::Display for RegistryError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unknown { name, .. } => {
                write!(f, "no predicate registered under '{}'", name)
            }
            RegistryError::Rejected(unverified) => unverified.fmt(f),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for RegistryError<T> {}
