//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! [`Foldable`](super::Foldable) needs to name the element type of the
//! container it folds. Rust has no higher-kinded types, so a container
//! describes itself through [`TypeConstructor`]: the element type it holds
//! and the same container applied to another element type.
//!
//! # Example
//!
//! ```rust
//! use seqset::set::OrderedSet;
//! use seqset::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
//! let words: OrderedSet<String> = empty_like(&numbers);
//! assert!(words.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `OrderedSet<i32>`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
