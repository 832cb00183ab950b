use crate::foundation::core::Canvas;

/// Convenience result type used across Flatlay.
pub type FlatlayResult<T> = Result<T, FlatlayError>;

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlatlayError {
    /// Invalid user-provided input, such as an empty layer stack or a malformed buffer.
    #[error("validation error: {0}")]
    Validation(String),

    /// A layer's dimensions differ from the base layer's.
    #[error(
        "dimension mismatch at layer {index}: got {}x{}, expected {}x{}",
        .found.width,
        .found.height,
        .expected.width,
        .expected.height
    )]
    DimensionMismatch {
        /// Zero-based index of the offending layer in the stack.
        index: usize,
        /// Dimensions of the base layer.
        expected: Canvas,
        /// Dimensions of the offending layer.
        found: Canvas,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlatlayError {
    /// Build a [`FlatlayError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlatlayError::DimensionMismatch`] value.
    pub fn dimension_mismatch(index: usize, expected: Canvas, found: Canvas) -> Self {
        Self::DimensionMismatch {
            index,
            expected,
            found,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
