//! Binary set algebra on [`OrderedSet`].
//!
//! Every operation borrows both operands and returns a new set. Result order
//! is part of each operation's contract:
//!
//! | Operation              | Result order                                            |
//! |------------------------|---------------------------------------------------------|
//! | `union`                | `self`, then the new elements of `other` in its order   |
//! | `intersect`            | `other`'s order                                         |
//! | `difference`           | `self`'s order                                          |
//! | `symmetric_difference` | `self` minus common elements, then `other`-only elements|
//!
//! The same operations are available as operators on references:
//! `&a | &b`, `&a & &b`, `&a - &b` and `&a ^ &b`.
//!
//! Operands must be sets of the same element type; anything else is
//! rejected by the compiler:
//!
//! ```compile_fail
//! use seqset::ordered_set;
//!
//! let set = ordered_set![1, 2];
//! let _ = set.union(&vec![3, 4]);
//! ```

use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::OrderedSet;

impl<T: Clone + PartialEq> OrderedSet<T> {
    /// Returns the union of `self` and `other`.
    ///
    /// The result holds every element of `self` in its order, followed by
    /// the elements of `other` that `self` lacks, in `other`'s order.
    ///
    /// # Complexity
    ///
    /// O(n * m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let left = ordered_set![1, 2];
    /// let right = ordered_set![3, 1];
    /// assert_eq!(left.union(&right).values(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(
            other
                .iter()
                .filter(|element| !self.has(*element))
                .cloned(),
        );
        result
    }

    /// Returns the elements of `other` that are also in `self`.
    ///
    /// Membership is symmetric, but the order of the result follows `other`,
    /// so `a.intersect(&b)` and `b.intersect(&a)` can differ in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let left = ordered_set![1, 2, 3];
    /// let right = ordered_set![3, 4, 1];
    /// assert_eq!(left.intersect(&right).values(), vec![3, 1]);
    /// assert_eq!(right.intersect(&left).values(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        other
            .iter()
            .filter(|element| self.has(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// An empty `self` gives an empty set; an empty `other` gives a copy of
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::set::OrderedSet;
    ///
    /// let set = ordered_set![1, 2];
    /// let empty: OrderedSet<i32> = OrderedSet::new();
    ///
    /// assert_eq!(set.difference(&ordered_set![2]).values(), vec![1]);
    /// assert_eq!(set.difference(&empty).values(), vec![1, 2]);
    /// assert!(empty.difference(&set).is_empty());
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() {
            return Self::new();
        }
        if other.is_empty() {
            return self.clone();
        }

        self.iter()
            .filter(|element| !other.has(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements that are in exactly one of `self` and `other`.
    ///
    /// Starts from a copy of `self` and walks `other` in order, removing each
    /// element that is present and appending each one that is not. The
    /// result therefore keeps `self`'s surviving elements first, followed by
    /// the elements only `other` has.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let left = ordered_set![1, 2, 5];
    /// let right = ordered_set![2, 3, 4];
    /// assert_eq!(left.symmetric_difference(&right).values(), vec![1, 5, 3, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            if !result.delete(element) {
                result.add(element.clone());
            }
        }
        result
    }
}

impl<T: PartialEq> OrderedSet<T> {
    /// Returns `true` if every element of `other` is in `self`.
    ///
    /// Every set is a superset of the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::set::OrderedSet;
    ///
    /// assert!(ordered_set![1, 2].is_superset_of(&ordered_set![1]));
    /// assert!(!ordered_set![1].is_superset_of(&ordered_set![1, 2]));
    /// assert!(ordered_set![1].is_superset_of(&OrderedSet::new()));
    /// ```
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.iter().all(|element| self.has(element))
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.is_superset_of(self)
    }

    /// Returns `true` if `self` and `other` share no element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// assert!(ordered_set![1, 2].is_disjoint(&ordered_set![3]));
    /// assert!(!ordered_set![1, 2].is_disjoint(&ordered_set![2]));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.has(element))
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<T: Clone + PartialEq> BitOr<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.union(other)`.
    fn bitor(self, other: &OrderedSet<T>) -> Self::Output {
        self.union(other)
    }
}

impl<T: Clone + PartialEq> BitAnd<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.intersect(other)`.
    fn bitand(self, other: &OrderedSet<T>) -> Self::Output {
        self.intersect(other)
    }
}

impl<T: Clone + PartialEq> Sub<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.difference(other)`.
    fn sub(self, other: &OrderedSet<T>) -> Self::Output {
        self.difference(other)
    }
}

impl<T: Clone + PartialEq> BitXor<&OrderedSet<T>> for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Returns `self.symmetric_difference(other)`.
    fn bitxor(self, other: &OrderedSet<T>) -> Self::Output {
        self.symmetric_difference(other)
    }
}
