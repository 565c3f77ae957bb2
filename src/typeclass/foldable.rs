//! Foldable type class - folding a structure down to a summary value.
//!
//! Implementors provide [`Foldable::fold_left`] and [`Foldable::fold_right`];
//! everything else is derived from `fold_left`. For
//! [`OrderedSet`](crate::set::OrderedSet) the left fold visits elements in
//! insertion order and the right fold visits them in reverse.
//!
//! # Examples
//!
//! ```rust
//! use seqset::ordered_set;
//! use seqset::typeclass::Foldable;
//!
//! let set = ordered_set![1, 2, 3, 4];
//! let total = set.clone().fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 10);
//! assert!(set.exists(|element| *element > 3));
//! ```

use super::{Monoid, TypeConstructor};

/// A type class for structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::typeclass::Foldable;
    ///
    /// let letters = ordered_set!['a', 'b', 'c'];
    /// let word = letters.fold_right(String::new(), |element, mut accumulator| {
    ///     accumulator.push(element);
    ///     accumulator
    /// });
    /// assert_eq!(word, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::typeclass::Foldable;
    ///
    /// let words = ordered_set!["ab", "cd"];
    /// let letters: Vec<char> = words.fold_map(|word| word.chars().collect::<Vec<_>>());
    /// assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects every element into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        let mut list = Vec::new();
        self.fold_left((), |(), element| list.push(element));
        list
    }

    /// Returns the first element, in fold order, that satisfies `predicate`.
    fn find<P>(self, predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.to_list().into_iter().find(predicate)
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty structure satisfies every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |all, element| all && predicate(&element))
    }
}
