// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record predicates: whole-structure validation.
//!
//! Both records here are validated as a single yes/no. That trades per-field
//! diagnosis for one combined verdict and one combined wrapper, so the caller
//! never tracks which field of a half-checked record is trustworthy.

use serde::{Deserialize, Serialize};

use crate::predicate::Predicate;

/// Minimum age accepted by [`ValidSignup`].
pub const MINIMUM_AGE: u32 = 13;

/// A signup form candidate. Freely constructible; validity lives in
/// [`ValidSignup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub username: String,
    pub age: u32,
}

/// Signup validity: non-blank username and a minimum age, judged together.
pub enum ValidSignup {}

impl Predicate<Signup> for ValidSignup {
    const NAME: &'static str = "valid-signup";

    fn holds(form: &Signup) -> bool {
        !form.username.trim().is_empty() && form.age >= MINIMUM_AGE
    }
}

/// A wardrobe inventory candidate with a requested variety threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub shirts: Vec<String>,
    pub pants: Vec<String>,
    pub shoes: Vec<String>,
    /// Number of distinct outfits the inventory must support.
    pub minimum_outfits: u64,
}

/// Distinct outfits derivable from an inventory: one item per category.
///
/// Saturating so absurd inventories cap at `u64::MAX` instead of wrapping
/// into a wrong verdict.
pub fn outfit_combinations(inventory: &Inventory) -> u64 {
    (inventory.shirts.len() as u64)
        .saturating_mul(inventory.pants.len() as u64)
        .saturating_mul(inventory.shoes.len() as u64)
}

/// Inventory validity: the derivable combination count meets the threshold.
pub enum SufficientOutfits {}

impl Predicate<Inventory> for SufficientOutfits {
    const NAME: &'static str = "sufficient-outfits";

    fn holds(inventory: &Inventory) -> bool {
        outfit_combinations(inventory) >= inventory.minimum_outfits
    }
}
