//! Error types.

use thiserror::Error;

/// Errors reported when building a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// A controlled field has no callback to request changes through, so it
    /// could never change.
    #[error("`{field}` is controlled but no `{handler}` handler was given")]
    MissingHandler {
        /// The controlled field.
        field: &'static str,
        /// The callback it needs.
        handler: &'static str,
    },
}

/// Result alias for dropdown construction.
pub type Result<T> = std::result::Result<T, DropdownError>;
