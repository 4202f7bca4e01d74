//! Errors reported by [`OrderedTree`][crate::OrderedTree] operations.

/// Errors triggered by ordered tree operations.
///
/// Every check happens before the tree is touched, so a returned error always leaves the tree
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// An operation that needs a real value was handed an absent one.
    #[error("`{name}` must not be absent")]
    InvalidArgument {
        /// The name of the offending argument.
        name: &'static str,
    },
    /// A tree was built without an ordering function and the element type offers no natural
    /// order.
    #[error("no usable order for this element type")]
    Configuration,
}
