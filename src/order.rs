//! Ordering functions and the [`Builder`] used to configure an [`OrderedTree`].
//!
//! A tree never compares elements on its own. It holds exactly one [`Compare`] implementation,
//! fixed when the tree is built. The trait is implemented for every `Fn(&T, &T) -> Ordering`,
//! so a closure works as well as a dedicated comparer type.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! // Order integers by magnitude.
//! let tree = OrderedTree::builder()
//!     .order(|a: &i32, b: &i32| a.abs().cmp(&b.abs()))
//!     .build(Some(vec![-3, 2, -1]))
//!     .unwrap();
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [-1, 2, -3]);
//!
//! // Without an order there is nothing to sort by.
//! let err = OrderedTree::<i32>::builder().build(Some(vec![1])).unwrap_err();
//! assert_eq!(err, TreeError::Configuration);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::{OrderedTree, Result, TreeError};

/// A total (or weak-total) order over `T`. Implementations must be consistent for every value
/// ever inserted into a tree; the tree does not check this.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of a type, as given by its [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Configures and builds an [`OrderedTree`]. The ordering is resolved when
/// [`build`][Builder::build] is called, never lazily.
pub struct Builder<T> {
    order: Option<Box<dyn Compare<T>>>,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("has_order", &self.order.is_some())
            .finish()
    }
}

impl<T> Builder<T> {
    /// A builder with no ordering installed yet.
    pub fn new() -> Self {
        Self { order: None }
    }

    /// Installs an explicit ordering function or comparer, replacing any previous one.
    pub fn order<C>(mut self, order: C) -> Self
    where
        C: Compare<T> + 'static,
    {
        self.order = Some(Box::new(order));
        self
    }

    /// Uses the natural order of `T`. Only available when `T` has one.
    pub fn natural_order(self) -> Self
    where
        T: Ord,
    {
        self.order(NaturalOrder)
    }

    /// Builds a tree, inserting every element of `elements` in iteration order.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidArgument`] if `elements` is `None`.
    /// - [`TreeError::Configuration`] if no ordering was installed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let tree = OrderedTree::builder()
    ///     .natural_order()
    ///     .build(Some([3, 1, 2]))
    ///     .unwrap();
    /// assert_eq!(tree.count(), 3);
    ///
    /// let err = OrderedTree::<i32>::builder()
    ///     .natural_order()
    ///     .build(None::<Vec<i32>>)
    ///     .unwrap_err();
    /// assert_eq!(err, TreeError::InvalidArgument { name: "elements" });
    /// ```
    pub fn build<I>(self, elements: Option<I>) -> Result<OrderedTree<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.ok_or(TreeError::InvalidArgument { name: "elements" })?;
        let order = self.order.ok_or(TreeError::Configuration)?;

        let mut tree = OrderedTree::from_order(order);
        tree.extend(elements);
        Ok(tree)
    }
}
