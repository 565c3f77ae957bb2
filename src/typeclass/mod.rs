//! Type class traits used by the set collections.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types with GATs
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! [`OrderedSet`](crate::set::OrderedSet) is a monoid under union with the
//! empty set as identity, and folds in insertion order.
//!
//! # Examples
//!
//! ```rust
//! use seqset::ordered_set;
//! use seqset::set::OrderedSet;
//! use seqset::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let merged = ordered_set![1, 2].combine(ordered_set![2, 3]);
//! assert_eq!(merged.values(), vec![1, 2, 3]);
//!
//! let everything = OrderedSet::combine_all(vec![ordered_set![5], merged]);
//! assert_eq!(everything.fold_left(0, |sum, element| sum + element), 11);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
