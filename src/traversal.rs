//! Lazy, recursion-free traversals of an [`OrderedTree`][crate::OrderedTree].
//!
//! Each iterator keeps its own stack of node references, so its auxiliary space is bounded by
//! the height of the tree while the call stack stays flat however deep the tree gets. The
//! iterators borrow the tree, which rules out mutating it mid-traversal. Every call to
//! [`in_order`][crate::OrderedTree::in_order] and friends starts over from the root, and cloning
//! an iterator forks it at its current position.

use std::iter::FusedIterator;
use std::ptr;

use crate::tree::Node;

/// In-order (left, node, right) traversal. Yields elements in ascending order.
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been entered but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, count: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: count,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining = self.remaining.saturating_sub(1);
        self.push_left_spine(node.right.as_deref());

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Pre-order (node, left, right) traversal.
pub struct PreOrder<'a, T> {
    /// Subtree roots still to visit; the top is visited next.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, count: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: count,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining = self.remaining.saturating_sub(1);

        // Right goes in first so the whole left subtree comes out before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Post-order (left, right, node) traversal.
pub struct PostOrder<'a, T> {
    /// The path from the root down to the node being worked on.
    stack: Vec<&'a Node<T>>,
    /// The node yielded most recently. When it is the right child of the top of the stack, that
    /// right subtree is finished.
    last_visited: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, count: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            last_visited: None,
            remaining: count,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = *self.stack.last()?;
            match top.right.as_deref() {
                Some(right) if !self.last_visited.map_or(false, |last| ptr::eq(last, right)) => {
                    self.push_left_spine(Some(right));
                }
                _ => {
                    self.stack.pop();
                    self.last_visited = Some(top);
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(&top.value);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

macro_rules! impl_traversal_traits {
    ($($name:ident),*) => {$(
        impl<T> ExactSizeIterator for $name<'_, T> {
            fn len(&self) -> usize {
                self.remaining
            }
        }

        impl<T> FusedIterator for $name<'_, T> {}
    )*};
}

impl_traversal_traits!(InOrder, PreOrder, PostOrder);

/// Manual implementations of `Clone` so `T` doesn't have to be `Clone`. A clone picks up from
/// the same position as the original.
impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for PostOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            last_visited: self.last_visited,
            remaining: self.remaining,
        }
    }
}
