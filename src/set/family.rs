//! Union and intersection over a whole family of sets.
//!
//! Both operations take the family by value. A family with a single member
//! hands that member back as-is (moved, not copied), and longer families are
//! folded left to right with the binary operation. Because the sets are
//! owned, the returned set never aliases one the caller still holds; callers
//! starting from borrowed sets opt into a copy with `.iter().cloned()`.

use super::OrderedSet;

impl<T: PartialEq> OrderedSet<T> {
    /// Returns the union of every set in `sets`, folded left to right.
    ///
    /// - no sets: an empty set
    /// - one set: that set, unchanged
    /// - more: `((s0 ∪ s1) ∪ s2) ∪ ...`, so elements appear in the order
    ///   they are first met across the family
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::set::OrderedSet;
    ///
    /// let union = OrderedSet::family_union([
    ///     ordered_set![1, 2],
    ///     ordered_set![3, 4],
    ///     ordered_set![1, 5, 6],
    /// ]);
    /// assert_eq!(union.values(), vec![1, 2, 3, 4, 5, 6]);
    ///
    /// let none: [OrderedSet<i32>; 0] = [];
    /// assert!(OrderedSet::family_union(none).is_empty());
    /// ```
    #[must_use]
    pub fn family_union<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sets = sets.into_iter();
        let Some(first) = sets.next() else {
            return Self::new();
        };

        sets.fold(first, |mut accumulator, set| {
            accumulator.extend(set);
            accumulator
        })
    }

    /// Returns the intersection of every set in `sets`, folded left to right.
    ///
    /// - no sets: an empty set (the intersection of nothing is left empty
    ///   rather than treated as an error)
    /// - one set: that set, unchanged
    /// - more: `((s0 ∩ s1) ∩ s2) ∩ ...`; each step keeps the order of the
    ///   right-hand set, so the result follows the last set's order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    /// use seqset::set::OrderedSet;
    ///
    /// let common = OrderedSet::family_intersection([
    ///     ordered_set![1, 2, 3, 4],
    ///     ordered_set![4, 3, 2],
    ///     ordered_set![2, 4, 9],
    /// ]);
    /// assert_eq!(common.values(), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn family_intersection<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sets = sets.into_iter();
        let Some(first) = sets.next() else {
            return Self::new();
        };

        sets.fold(first, |accumulator, set| {
            set.into_iter()
                .filter(|element| accumulator.has(element))
                .collect()
        })
    }
}
