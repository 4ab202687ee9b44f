/// Convenience result type used across the crate.
pub type BgraResult<T> = Result<T, BgraError>;

/// Error taxonomy for buffer construction and conversion.
///
/// Drawing never fails: out-of-range access and fully clipped draws are
/// defined no-ops. Only hand-built buffers can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BgraError {
    /// Inconsistent stride, arena length or bounds.
    #[error("validation error: {0}")]
    Validation(String),

    /// Dimensions that do not fit the crate's coordinate space.
    #[error("dimension error: {0}")]
    Dimensions(String),
}

impl BgraError {
    /// Build a [`BgraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BgraError::Dimensions`] value.
    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::Dimensions(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
