//! Monoid type class - semigroups with an identity element.
//!
//! For [`OrderedSet`](crate::set::OrderedSet) the identity is the empty set
//! and [`Monoid::combine_all`] is a family union.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use seqset::ordered_set;
/// use seqset::set::OrderedSet;
/// use seqset::typeclass::{Monoid, Semigroup};
///
/// let set = ordered_set![1, 2];
/// assert_eq!(OrderedSet::empty().combine(set.clone()), set);
/// assert_eq!(set.clone().combine(OrderedSet::empty()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity.
    ///
    /// An empty iterator yields [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::set::OrderedSet;
    /// use seqset::typeclass::Monoid;
    ///
    /// let all = OrderedSet::combine_all([ordered_set![3, 1], ordered_set![2, 3]]);
    /// assert_eq!(all.values(), vec![3, 1, 2]);
    ///
    /// let none: Vec<OrderedSet<i32>> = Vec::new();
    /// assert!(OrderedSet::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
