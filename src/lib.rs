//! # seqset
//!
//! An insertion-ordered set of unique values backed by a dense sequence,
//! together with the usual set algebra.
//!
//! ## Overview
//!
//! - **Ordered Set**: [`OrderedSet`](set::OrderedSet) keeps the first
//!   occurrence of every value in the order it was added. Membership is a
//!   linear scan, so elements only need `PartialEq`.
//! - **Set Algebra**: union, intersection, difference, symmetric difference,
//!   subset/superset/disjoint tests, and family union/intersection over any
//!   number of sets.
//! - **Type Classes**: `Semigroup`, `Monoid` and `Foldable` instances so an
//!   `OrderedSet` composes with generic folding code.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Semigroup, Monoid, Foldable)
//! - `set`: The ordered set and its algebra
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqset::prelude::*;
//!
//! let mut primes = ordered_set![2, 3, 5];
//! primes.add(7).add(3);
//! assert_eq!(primes.values(), vec![2, 3, 5, 7]);
//!
//! let odds = ordered_set![1, 3, 5, 7, 9];
//! assert_eq!(primes.intersect(&odds).values(), vec![3, 5, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use seqset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "set")]
    pub use crate::ordered_set;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "set")]
pub mod set;
