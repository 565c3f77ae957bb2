//! The `ordered_set!` macro for building a set from a list of values.

/// Creates an [`OrderedSet`](crate::set::OrderedSet) containing the given values.
///
/// Values are added left to right through [`add`](crate::set::OrderedSet::add),
/// so a repeated value keeps the position of its first occurrence.
///
/// # Examples
///
/// ```
/// use seqset::ordered_set;
/// use seqset::set::OrderedSet;
///
/// let set = ordered_set![3, 1, 3, 2];
/// assert_eq!(set.values(), vec![3, 1, 2]);
///
/// // Same result as collecting the same sequence
/// let collected: OrderedSet<i32> = vec![3, 1, 3, 2].into_iter().collect();
/// assert_eq!(set.values(), collected.values());
///
/// let empty: OrderedSet<String> = ordered_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! ordered_set {
    () => {
        $crate::set::OrderedSet::new()
    };

    ($($value:expr),+ $(,)?) => {{
        let mut set = $crate::set::OrderedSet::new();
        $(
            set.add($value);
        )+
        set
    }};
}
