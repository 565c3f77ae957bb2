//! Insertion-ordered set backed by a dense sequence.
//!
//! This module provides [`OrderedSet`], a mutable collection of unique values
//! that remembers the order in which values were first added.
//!
//! # Overview
//!
//! `OrderedSet` stores its elements in a contiguous sequence:
//! - The first 8 elements live inline (`SmallVec`), larger sets spill to the heap
//! - Indices are always `0..len` with no holes, also after removals
//! - Uniqueness is enforced on every insertion by a linear equality scan
//!
//! Because membership is a scan rather than a hash or ordering lookup, the
//! element type only needs `PartialEq`. Values that are not equal to
//! themselves (such as `f64::NAN`) are never found and can be added more than
//! once, exactly like any other strict-equality scan.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `add` / `try_add`          | O(n)       |
//! | `insert_at`                | O(n)       |
//! | `delete`                   | O(n)       |
//! | `remove_at`                | O(n)       |
//! | `has` / `position`         | O(n)       |
//! | `len` / `size` / `get`     | O(1)       |
//! | `entries` / `iter`         | O(1) + O(n)|
//!
//! # Examples
//!
//! ```rust
//! use seqset::set::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.add(1).add(2).add(1);
//!
//! assert_eq!(set.values(), vec![1, 2]);
//! assert_eq!(set.size(), 2);
//!
//! assert!(set.delete(&1));
//! assert!(!set.delete(&3));
//! assert_eq!(set.values(), vec![2]);
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// Number of elements stored inline before the set spills to the heap.
const INLINE_CAPACITY: usize = 8;

type Storage<T> = SmallVec<[T; INLINE_CAPACITY]>;

const UNIQUE_INVARIANT_PANIC_MESSAGE: &str = "OrderedSet invariant violated: duplicate elements";

/// Returns `true` if the element at `index` has no equal elsewhere in `elements`.
fn occurs_at_most_once<T: PartialEq>(elements: &[T], index: usize) -> bool {
    elements.get(index).is_none_or(|target| {
        elements
            .iter()
            .filter(|element| *element == target)
            .count()
            <= 1
    })
}

/// Where a value lands when it is not yet in the set.
///
/// `At` an occupied index replaces the element there; `At` past the end
/// behaves like `Back`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Back,
    At(usize),
}

/// Which element a removal targets.
enum Removal<'a, Q: ?Sized> {
    Value(&'a Q),
    Position(usize),
}

/// An insertion-ordered collection of unique values.
///
/// Every value is stored at most once; adding a value that is already
/// present is a no-op. Elements keep the position at which they were first
/// added, and removing an element closes the gap it leaves.
///
/// Set-algebra operations ([`union`](Self::union),
/// [`intersect`](Self::intersect), [`difference`](Self::difference),
/// [`symmetric_difference`](Self::symmetric_difference)) never touch their
/// operands and return new sets.
///
/// # Type Parameters
///
/// * `T` - The element type. Lookups and insertions need `T: PartialEq`,
///   set algebra additionally needs `T: Clone`.
///
/// # Examples
///
/// ```rust
/// use seqset::set::OrderedSet;
///
/// let set: OrderedSet<&str> = ["b", "a", "b", "c"].into_iter().collect();
///
/// // Iteration follows first insertion
/// let order: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(order, vec!["b", "a", "c"]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    elements: Storage<T>,
}

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// The count is read from the backing sequence, so it is always in step
    /// with the stored elements after any mutation, positional or not.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the set.
    ///
    /// Same value as [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let set = ordered_set!['x', 'y', 'x'];
    /// assert_eq!(set.size(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the earliest inserted element still in the set.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the latest inserted element still in the set.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes all elements. Returns the set for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let mut set = ordered_set![1, 2];
    /// set.clear().add(3);
    /// assert_eq!(set.values(), vec![3]);
    /// ```
    pub fn clear(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// The iterator is finite and restartable: clone it, or call `entries`
    /// again, to traverse the set another time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let set = ordered_set![10, 20, 30];
    /// let entries = set.entries();
    ///
    /// let first_pass: Vec<&i32> = entries.clone().collect();
    /// let second_pass: Vec<&i32> = entries.collect();
    /// assert_eq!(first_pass, second_pass);
    /// assert_eq!(first_pass, vec![&10, &20, &30]);
    /// ```
    #[inline]
    #[must_use]
    pub fn entries(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// Same iterator as [`entries`](Self::entries).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        self.entries()
    }

    /// Calls `callback` once for every element, in insertion order.
    ///
    /// Whatever the callback returns is discarded; it only sees shared
    /// references, so the set cannot change during the traversal. Returns
    /// the set for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let set = ordered_set![1, 2, 3];
    /// let mut seen = Vec::new();
    /// set.each(|element| seen.push(*element));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn each<F, R>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&T) -> R,
    {
        for element in &self.elements {
            callback(element);
        }
        self
    }

    /// Like [`each`](Self::each), but also hands `arguments` to every call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let set = ordered_set![1, 2];
    /// let mut scaled = Vec::new();
    /// set.each_with(&10, |element, factor| scaled.push(element * factor));
    /// assert_eq!(scaled, vec![10, 20]);
    ///
    /// // The set itself is untouched
    /// assert_eq!(set.values(), vec![1, 2]);
    /// ```
    pub fn each_with<A, F, R>(&self, arguments: &A, mut callback: F) -> &Self
    where
        A: ?Sized,
        F: FnMut(&T, &A) -> R,
    {
        for element in &self.elements {
            callback(element, arguments);
        }
        self
    }

    /// Consumes the set and returns its elements in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }
}

impl<T: Clone> OrderedSet<T> {
    /// Returns a copy of the elements in insertion order.
    ///
    /// The returned `Vec` is independent of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let set = ordered_set![1, 2];
    /// let mut snapshot = set.values();
    /// snapshot.push(3);
    ///
    /// assert_eq!(set.values(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.elements.to_vec()
    }
}

impl<T: PartialEq> OrderedSet<T> {
    /// Returns `true` if the set contains `value`.
    ///
    /// Accepts borrowed forms of the element type, e.g. `&str` for a set of
    /// `String`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(!set.has("apple"));
    ///
    /// set.add("apple".to_string());
    /// assert!(set.has("apple"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(value).is_some()
    }

    /// Returns the index of `value`, or `None` if it is absent.
    #[must_use]
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements
            .iter()
            .position(|element| element.borrow() == value)
    }

    /// Appends `value` unless an equal element is already present.
    ///
    /// Duplicates are ignored, never overwritten. Returns the set so calls
    /// can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.add("a").add("b").add("a");
    /// assert_eq!(set.values(), vec!["a", "b"]);
    /// ```
    pub fn add(&mut self, value: T) -> &mut Self {
        self.place(value, Placement::Back);
        self
    }

    /// Appends `value` unless already present and reports whether it was added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.try_add(1));
    /// assert!(!set.try_add(1));
    /// ```
    pub fn try_add(&mut self, value: T) -> bool {
        self.place(value, Placement::Back)
    }

    /// Writes `value` at `position`, unless it is already present.
    ///
    /// An element already stored at `position` is replaced by `value`. When
    /// `position` is `None` or past the end, the value is appended, so
    /// indices stay contiguous. Returns `false` (and leaves the set
    /// untouched) if an equal element exists anywhere in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let mut set = ordered_set!['a', 'b', 'c'];
    /// assert!(set.insert_at(Some(1), 'x'));
    /// assert_eq!(set.values(), vec!['a', 'x', 'c']);
    ///
    /// assert!(set.insert_at(None, 'd'));
    /// assert!(set.insert_at(Some(9), 'e'));
    /// assert!(!set.insert_at(Some(0), 'c'));
    ///
    /// assert_eq!(set.values(), vec!['a', 'x', 'c', 'd', 'e']);
    /// ```
    pub fn insert_at(&mut self, position: Option<usize>, value: T) -> bool {
        let placement = position.map_or(Placement::Back, Placement::At);
        self.place(value, placement)
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if it was present. Later elements shift down by one, so
    /// indices stay contiguous.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let mut set = ordered_set![1, 2, 3];
    /// assert!(set.delete(&2));
    /// assert!(!set.delete(&2));
    /// assert_eq!(set.get(1), Some(&3));
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.take(Removal::Value(value)).is_some()
    }

    /// Removes and returns the element at `position`.
    ///
    /// Returns `None`, leaving the set untouched, if there is no element
    /// there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::ordered_set;
    ///
    /// let mut set = ordered_set!["x", "y", "z"];
    /// assert_eq!(set.remove_at(0), Some("x"));
    /// assert_eq!(set.remove_at(5), None);
    /// assert_eq!(set.values(), vec!["y", "z"]);
    /// ```
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        self.take::<T>(Removal::Position(position))
    }

    /// Single insertion path shared by `add`, `try_add`, `insert_at` and
    /// every constructor.
    fn place(&mut self, value: T, placement: Placement) -> bool {
        if self.has(&value) {
            return false;
        }

        let index = match placement {
            Placement::At(position) if position < self.elements.len() => {
                let _replaced = self.take::<T>(Removal::Position(position));
                self.elements.insert(position, value);
                position
            }
            Placement::At(_) | Placement::Back => {
                self.elements.push(value);
                self.elements.len() - 1
            }
        };

        debug_assert!(
            occurs_at_most_once(&self.elements, index),
            "{}",
            UNIQUE_INVARIANT_PANIC_MESSAGE
        );
        true
    }

    /// Single removal path shared by `delete` and `remove_at`.
    fn take<Q>(&mut self, removal: Removal<'_, Q>) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let position = match removal {
            Removal::Value(value) => self.position(value)?,
            Removal::Position(position) => position,
        };

        (position < self.elements.len()).then(|| self.elements.remove(position))
    }
}

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Iterator over references to the elements of an [`OrderedSet`], in
/// insertion order.
#[derive(Clone)]
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedSetIterator<'_, T> {}

/// Owning iterator over the elements of an [`OrderedSet`], in insertion order.
pub struct OrderedSetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {}

impl<T> FusedIterator for OrderedSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.place(value, Placement::Back);
        }
        set
    }
}

impl<T: PartialEq> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.place(value, Placement::Back);
        }
    }
}

impl<'a, T: PartialEq + Copy + 'a> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.place(*value, Placement::Back);
        }
    }
}

impl<T: PartialEq> From<Vec<T>> for OrderedSet<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<OrderedSet<T>> for Vec<T> {
    fn from(set: OrderedSet<T>) -> Self {
        set.into_vec()
    }
}

/// Positional read access.
///
/// # Panics
///
/// Panics if `index` is out of bounds, like slice indexing.
impl<T> Index<usize> for OrderedSet<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

/// Membership equality: same size and the same elements, in any order.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.has(element))
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for OrderedSet<T> {
    type Inner = T;
    type WithType<B> = OrderedSet<B>;
}

/// Union. Elements of `other` not already present are appended in `other`'s
/// order.
impl<T: PartialEq> Semigroup for OrderedSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: PartialEq> Monoid for OrderedSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Foldable for OrderedSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }

    fn to_list(self) -> Vec<T> {
        self.into_vec()
    }
}
