//! A plain, unbalanced BST ordered by a caller-supplied [`Compare`] implementation.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::from_elements(vec![10, 15, -7, 7, 14, 3, 2, 1, 22]);
//!
//! assert!(tree.contains(&22));
//! assert!(!tree.contains(&-16));
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.count(), 8);
//!
//! // Iterating a tree visits its elements in order.
//! let sorted: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(sorted, [-7, 1, 2, 7, 10, 14, 15, 22]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::order::{Builder, Compare, NaturalOrder};
use crate::traversal::{InOrder, PostOrder, PreOrder};
use crate::{Result, TreeError};

/// An owning link to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element and the two subtrees it exclusively owns.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Panics if either child breaks the ordering against this node.
    fn assert_local_order(&self, order: &dyn Compare<T>) {
        if let Some(left) = self.left.as_deref() {
            assert_eq!(order.compare(&left.value, &self.value), Ordering::Less);
        }
        if let Some(right) = self.right.as_deref() {
            assert_ne!(order.compare(&right.value, &self.value), Ordering::Less);
        }
    }
}

/// Which way a search for a value goes at a given node.
#[derive(Clone, Copy)]
enum Step {
    Found,
    Left,
    Right,
}

impl Step {
    fn at<T>(order: &dyn Compare<T>, node_value: &T, value: &T) -> Self {
        if order.compare(node_value, value) == Ordering::Equal {
            Step::Found
        } else if order.compare(value, node_value) == Ordering::Greater {
            Step::Right
        } else {
            Step::Left
        }
    }
}

/// An ordered collection backed by an unbalanced Binary Search Tree.
///
/// Values that compare equal are all kept: a new value that ties with a node goes into that
/// node's right subtree. Nothing rebalances the tree, so its height (and with it the cost of
/// `insert`, `contains` and `remove`) depends entirely on insertion order.
///
/// The ordering is fixed for the life of the tree. See [`Builder`] for choosing one.
pub struct OrderedTree<T> {
    root: Link<T>,
    count: usize,
    order: Box<dyn Compare<T>>,
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("count", &self.count)
            .field("elements", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` using the natural order of `T`.
    pub fn new() -> Self {
        Self::from_order(Box::new(NaturalOrder))
    }

    /// Builds a tree using the natural order of `T`, inserting `elements` one at a time in
    /// iteration order.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(elements);
        tree
    }
}

impl<T> OrderedTree<T> {
    /// Builds a tree ordered by `order`, inserting `elements` one at a time in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let words = vec!["three", "one", "eleven"];
    /// let tree = OrderedTree::with_order(words, |a: &&str, b: &&str| a.len().cmp(&b.len()));
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["one", "three", "eleven"]);
    /// ```
    pub fn with_order<I, C>(elements: I, order: C) -> Self
    where
        I: IntoIterator<Item = T>,
        C: Compare<T> + 'static,
    {
        let mut tree = Self::from_order(Box::new(order));
        tree.extend(elements);
        tree
    }

    /// Starts configuring a tree. See [`Builder`].
    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    pub(crate) fn from_order(order: Box<dyn Compare<T>>) -> Self {
        Self {
            root: None,
            count: 0,
            order,
        }
    }

    /// The number of elements in the tree, duplicates included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf. Values equal to an existing element are kept and placed to
    /// its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.count(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let order = &*self.order;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match order.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Node::new_boxed(value));
        self.count += 1;
    }

    /// Like [`insert`][OrderedTree::insert] for a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `value` is `None`. The tree is left untouched.
    pub fn try_insert(&mut self, value: Option<T>) -> Result<()> {
        let value = value.ok_or(TreeError::InvalidArgument { name: "value" })?;
        self.insert(value);
        Ok(())
    }

    /// Inserts every element of `elements`, in iteration order.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `elements` is `None`.
    pub fn extend_from<I>(&mut self, elements: Option<I>) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.ok_or(TreeError::InvalidArgument { name: "elements" })?;
        self.extend(elements);
        Ok(())
    }

    /// Whether some element compares equal to `value`. An absent value is never contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_elements(vec![1, 2, 3]);
    ///
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&4));
    /// assert!(!tree.contains(None::<&i32>));
    /// ```
    pub fn contains<'v>(&self, value: impl Into<Option<&'v T>>) -> bool
    where
        T: 'v,
    {
        let Some(value) = value.into() else {
            return false;
        };

        let order = &*self.order;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            node = match Step::at(order, &current.value, value) {
                Step::Found => return true,
                Step::Left => current.left.as_deref(),
                Step::Right => current.right.as_deref(),
            };
        }

        false
    }

    /// Removes one element comparing equal to `value` and returns the element that left the
    /// tree. Returns `None`, leaving the tree alone, if there is no such element.
    ///
    /// When duplicates exist, the first one met walking down from the root is the one removed.
    /// A node with a right subtree is not unlinked itself: it takes over its in-order
    /// successor's value and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_elements(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = self.unlink(value);
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Like [`remove`][OrderedTree::remove] for a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `value` is `None`. The tree is left untouched.
    pub fn try_remove(&mut self, value: Option<&T>) -> Result<Option<T>> {
        let value = value.ok_or(TreeError::InvalidArgument { name: "value" })?;
        Ok(self.remove(value))
    }

    fn unlink(&mut self, value: &T) -> Option<T> {
        let order = &*self.order;

        // Walk down to the slot owning the target.
        let mut slot = &mut self.root;
        loop {
            match slot.as_deref().map(|node| Step::at(order, &node.value, value)) {
                None => return None,
                Some(Step::Found) => break,
                Some(Step::Left) => {
                    if let Some(node) = slot {
                        slot = &mut node.left;
                    }
                }
                Some(Step::Right) => {
                    if let Some(node) = slot {
                        slot = &mut node.right;
                    }
                }
            }
        }

        let target = slot.as_mut()?;
        if target.right.is_none() {
            // The left subtree (possibly empty) takes the target's place, whether the slot
            // is the root or either child of the parent.
            let left = target.left.take();
            return std::mem::replace(slot, left).map(|node| node.value);
        }

        // The successor is the leftmost node of the right subtree.
        let mut successor_slot = &mut target.right;
        while successor_slot
            .as_deref()
            .map_or(false, |node| node.left.is_some())
        {
            if let Some(node) = successor_slot {
                successor_slot = &mut node.left;
            }
        }

        let mut successor = successor_slot.take()?;
        *successor_slot = successor.right.take();
        let removed = std::mem::replace(&mut target.value, successor.value);

        if cfg!(debug_assertions) {
            target.assert_local_order(order);
        }
        Some(removed)
    }

    /// Removes every element. Nodes are released with an explicit stack, so this never
    /// recurses no matter how tall the tree is.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.count = 0;
    }

    /// Visits the elements in ascending order: left subtree, node, right subtree. Each call
    /// starts a fresh traversal.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref(), self.count)
    }

    /// Visits each node before its subtrees, the left subtree first.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref(), self.count)
    }

    /// Visits each node after both of its subtrees, the left subtree first.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref(), self.count)
    }

    /// Same as [`in_order`][OrderedTree::in_order].
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }
}

impl<T> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
