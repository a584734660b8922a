//! Error types for unique-along-axis operations
//!
//! Every failure is a caller input error detected before any slice is scanned,
//! so no partial result is ever produced.

use tenuniq_core::DType;
use thiserror::Error;

/// Error type for unique-along-axis operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UniqueError {
    /// Axis outside `[0, rank)`
    #[error("Invalid axis {axis}: must be < {rank} for a rank-{rank} tensor")]
    InvalidAxis { axis: usize, rank: usize },

    /// Element type without an equality rule for this operation
    #[error("{operation}: unsupported element type '{dtype}'")]
    UnsupportedElementType { dtype: DType, operation: String },

    /// Axis extent too large for int32 ordinals
    #[error("Axis extent {extent} exceeds the int32 index range")]
    IndexOverflow { extent: usize },

    /// Ordinal outside the distinct-slice range during reconstruction
    #[error("Index {index} out of range for {len} distinct slices")]
    InvalidIndex { index: i32, len: usize },

    /// Output tensor could not be materialized
    #[error("Failed to construct output: {0}")]
    Construction(String),
}

/// Result type for unique-along-axis operations
pub type UniqueResultT<T> = Result<T, UniqueError>;

impl UniqueError {
    /// Create an invalid axis error
    pub fn invalid_axis(axis: usize, rank: usize) -> Self {
        UniqueError::InvalidAxis { axis, rank }
    }

    /// Create an unsupported element type error
    pub fn unsupported_dtype(dtype: DType, operation: impl Into<String>) -> Self {
        UniqueError::UnsupportedElementType {
            dtype,
            operation: operation.into(),
        }
    }

    /// Create an index overflow error
    pub fn index_overflow(extent: usize) -> Self {
        UniqueError::IndexOverflow { extent }
    }

    /// Create an invalid index error
    pub fn invalid_index(index: i32, len: usize) -> Self {
        UniqueError::InvalidIndex { index, len }
    }
}

impl From<anyhow::Error> for UniqueError {
    fn from(err: anyhow::Error) -> Self {
        UniqueError::Construction(err.to_string())
    }
}

/// Validate `axis` against `rank`
pub(crate) fn check_axis(axis: usize, rank: usize) -> UniqueResultT<()> {
    if axis >= rank {
        return Err(UniqueError::invalid_axis(axis, rank));
    }
    Ok(())
}

/// Validate that every ordinal along an axis of `extent` fits in an `i32`
pub(crate) fn check_extent(extent: usize) -> UniqueResultT<()> {
    if extent > i32::MAX as usize {
        return Err(UniqueError::index_overflow(extent));
    }
    Ok(())
}
