//! Error types for selector building.

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur while building a selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton category (element, id, pseudo-element) was set twice.
    #[error(
        "duplicate {category}: element, id and pseudo-element may only appear once in a selector"
    )]
    DuplicateCategory {
        /// Category that already held a value.
        category: Category,
    },

    /// A category was targeted after a later category already received a value.
    #[error(
        "{category} cannot follow {later}: selector parts must be given in the order \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// Category the rejected call targeted.
        category: Category,
        /// Latest category already holding a value.
        later: Category,
    },
}

/// Result type for selector operations.
pub type SelectorResult<T> = std::result::Result<T, SelectorError>;
