//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup when it has a `combine: (T, T) -> T` that is
//! associative. For [`OrderedSet`](crate::set::OrderedSet) the operation is
//! union, which is associative both as a set and in the resulting element
//! order.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqset::ordered_set;
//! use seqset::typeclass::Semigroup;
//!
//! let evens = ordered_set![2, 4];
//! let small = ordered_set![1, 2, 3];
//! assert_eq!(evens.combine(small).values(), vec![2, 4, 1, 3]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::typeclass::Semigroup;
    ///
    /// let left = ordered_set!['a', 'b'];
    /// let right = ordered_set!['b', 'c'];
    /// let combined = left.combine_ref(&right);
    ///
    /// // Operands are still available
    /// assert_eq!(left.len(), 2);
    /// assert_eq!(combined.values(), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements of an iterator with the semigroup operation.
    ///
    /// Returns `None` for an empty iterator. See
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a version that
    /// falls back to the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::set::OrderedSet;
    /// use seqset::typeclass::Semigroup;
    ///
    /// let sets = vec![ordered_set![1], ordered_set![2], ordered_set![1, 3]];
    /// let reduced = OrderedSet::reduce_all(sets).map(|set| set.values());
    /// assert_eq!(reduced, Some(vec![1, 2, 3]));
    ///
    /// let none: Vec<OrderedSet<i32>> = Vec::new();
    /// assert!(OrderedSet::reduce_all(none).is_none());
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
