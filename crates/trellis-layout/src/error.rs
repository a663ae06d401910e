//! Error types for trellis-layout.

use thiserror::Error;

/// Errors raised while resolving or arranging a stack.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A numeric field was negative or not finite.
    #[error("Invalid configuration: {field} must be a finite non-negative number (got {value})")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: f32,
    },

    /// Placement was given a different number of natural sizes than items.
    #[error("Item count mismatch: {items} item(s) but {sizes} natural size(s)")]
    ItemCountMismatch {
        /// Number of resolved items.
        items: usize,
        /// Number of natural sizes supplied.
        sizes: usize,
    },
}

impl LayoutError {
    /// Check whether this is an `InvalidConfiguration` error.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Reject negative and non-finite lengths.
pub(crate) fn check_length(field: &'static str, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidConfiguration { field, value })
    }
}

/// Same as [`check_length`] for optional fields; `None` passes through.
pub(crate) fn check_optional(
    field: &'static str,
    value: Option<f32>,
) -> Result<Option<f32>, LayoutError> {
    value.map(|v| check_length(field, v)).transpose()
}
