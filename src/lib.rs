//! Runtime-verified refinement values.
//!
//! A [`Refined<T, P>`] is a value of `T` that provably passed predicate `P`.
//! The wrapper's field is private and the only constructor runs the
//! predicate, so holding one *is* the proof. The guarantee costs one
//! predicate run at the boundary; after that, trusted operations take the
//! branded type and never re-check.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ predicate.rs │────▶│  refined.rs   │────▶│  domain/     │
//! │ (Predicate,  │     │ (Refined,     │     │ (Prime,      │
//! │  evaluate)   │     │  verify)      │     │  NonEmpty,…) │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ dependent.rs │     │  outcome.rs   │     │ registry.rs  │
//! │ (DepRefined, │     │ (Unverified,  │     │ (Registry,   │
//! │  two-stage)  │     │  narrowing)   │     │  Checked)    │
//! └──────────────┘     └───────────────┘     └──────────────┘
//! ```
//!
//! # Properties
//!
//! | Property                | Where it is enforced                          |
//! |-------------------------|-----------------------------------------------|
//! | Soundness               | `verify` gates every construction              |
//! | No fabrication          | private fields + `unsafe_code = "forbid"`      |
//! | Representation identity | `repr(transparent)`, move-out unwrap           |
//! | Negation completeness   | failures return the candidate in `Unverified`  |
//! | Dependent short-circuit | stage order is structural in `DepRefined`      |
//!
//! # Usage
//!
//! ```
//! use attest::{head, NonEmpty, Refined};
//!
//! fn describe(names: Vec<String>) -> String {
//!     match Refined::<_, NonEmpty>::verify(names) {
//!         // Success branch: the brand unlocks the total head().
//!         Ok(names) => format!("first up: {}", head(&names)),
//!         // Failure branch: the same Vec comes back, unverified.
//!         Err(rejected) => format!("{} names to work with", rejected.into_inner().len()),
//!     }
//! }
//!
//! assert_eq!(describe(vec!["ada".into()]), "first up: ada");
//! assert_eq!(describe(vec![]), "0 names to work with");
//! ```

// Module declarations
pub mod contracts;
mod dependent;
mod domain;
mod outcome;
mod predicate;
mod refined;
mod registry;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use dependent::{DepRefined, DependentPredicate};
pub use domain::{
    head, is_prime, outfit_combinations, AtLeast, DayOfMonth, Divisible, Inventory, KnownMonth,
    Month, MonthDay, NonEmpty, NonNegativeInteger, ParseMonthError, Prime, Signup,
    SufficientOutfits, ValidSignup, Whole, MINIMUM_AGE, MONTHS,
};
pub use outcome::{Outcome, Unverified};
pub use predicate::{evaluate, And, Not, Or, Predicate};
pub use refined::Refined;
pub use registry::{Checked, Registry, RegistryError};
