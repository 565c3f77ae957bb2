//! Insertion-ordered set collections.
//!
//! - [`OrderedSet`]: A mutable set that keeps values in first-insertion order
//! - [`OrderedSetIterator`] / [`OrderedSetIntoIterator`]: Its borrowed and
//!   owning iterators
//!
//! Set algebra lives on `OrderedSet` itself: binary operations borrow both
//! operands and return a new set, while [`OrderedSet::family_union`] and
//! [`OrderedSet::family_intersection`] fold a whole sequence of sets.
//!
//! # Examples
//!
//! ## Building and mutating
//!
//! ```rust
//! use seqset::ordered_set;
//!
//! let mut set = ordered_set![1, 2];
//! set.add(3).add(1);
//! assert_eq!(set.values(), vec![1, 2, 3]);
//!
//! assert!(set.delete(&2));
//! assert_eq!(set.values(), vec![1, 3]);
//! ```
//!
//! ## Set algebra
//!
//! ```rust
//! use seqset::ordered_set;
//!
//! let a = ordered_set![1, 2, 3];
//! let b = ordered_set![2, 3, 4];
//!
//! assert_eq!(a.union(&b).values(), vec![1, 2, 3, 4]);
//! assert_eq!(a.intersect(&b).values(), vec![2, 3]);
//! assert_eq!(a.difference(&b).values(), vec![1]);
//! assert_eq!(a.symmetric_difference(&b).values(), vec![1, 4]);
//! assert!(a.is_superset_of(&ordered_set![3, 1]));
//! ```

mod algebra;
mod family;
mod macros;
mod ordered_set;

pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
