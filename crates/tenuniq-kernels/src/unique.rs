//! Unique slices along an axis
//!
//! Given a tensor and an axis, returns the distinct slices along that axis in
//! first-occurrence order (`values`) and, for every axis position, the ordinal
//! of its distinct slice (`indices`).
//!
//! # Pipeline
//!
//! 1. validate the axis and the extent (fails before any slice is read)
//! 2. iterate slices along the axis ([`crate::slices`])
//! 3. compute one structural key per slice ([`crate::key`]), optionally in parallel
//! 4. assign ordinals in axis order ([`crate::dedup`])
//! 5. gather first-occurrence slices and wrap the ordinals ([`crate::assemble`])
//!
//! # Examples
//!
//! ```
//! use tenuniq_core::Tensor;
//! use tenuniq_kernels::unique;
//!
//! let x = Tensor::float32(vec![1.0, 1.0, 2.0, 4.0, 4.0, 4.0, 7.0, 8.0, 8.0], &[9]).unwrap();
//! let out = unique(&x, None).unwrap();
//!
//! assert_eq!(out.values.as_f32().unwrap().to_vec(), vec![1.0, 2.0, 4.0, 7.0, 8.0]);
//! assert_eq!(out.indices.to_vec(), vec![0, 0, 1, 2, 2, 2, 3, 4, 4]);
//! ```

use tenuniq_core::{DType, DenseND, Tensor};
use tracing::{debug, warn};

use crate::assemble::{assemble_indices, assemble_values};
use crate::config::UniqueConfig;
use crate::dedup::dedup_slices;
use crate::element::UniqueElement;
use crate::error::{check_axis, check_extent, UniqueError, UniqueResultT};
use crate::slices::axis_slices;

/// Typed result of [`unique_along`]
#[derive(Clone, Debug, PartialEq)]
pub struct UniqueOutput<T> {
    /// Distinct slices concatenated along the axis, in first-occurrence order
    pub values: DenseND<T>,
    /// Rank-1 ordinal of each input slice's distinct slice
    pub indices: DenseND<i32>,
    /// Input axis position of each distinct slice's first occurrence
    pub first_occurrence: Vec<usize>,
    counts: Vec<usize>,
}

impl<T> UniqueOutput<T> {
    /// Number of distinct slices
    pub fn num_unique(&self) -> usize {
        self.first_occurrence.len()
    }

    /// Occurrences of each distinct slice, in ordinal order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

/// Dynamically typed result of [`unique`]
#[derive(Clone, Debug)]
pub struct UniqueResult {
    /// Distinct slices, same element type as the input
    pub values: Tensor,
    /// Rank-1 `int32` ordinals, one per input axis position
    pub indices: DenseND<i32>,
    /// Input axis position of each distinct slice's first occurrence
    pub first_occurrence: Vec<usize>,
    counts: Vec<usize>,
}

impl UniqueResult {
    /// Number of distinct slices
    pub fn num_unique(&self) -> usize {
        self.first_occurrence.len()
    }

    /// Occurrences of each distinct slice, in ordinal order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Element type of `values`
    pub fn dtype(&self) -> DType {
        self.values.dtype()
    }
}

impl<T> From<UniqueOutput<T>> for UniqueResult
where
    Tensor: From<DenseND<T>>,
{
    fn from(output: UniqueOutput<T>) -> Self {
        UniqueResult {
            values: Tensor::from(output.values),
            indices: output.indices,
            first_occurrence: output.first_occurrence,
            counts: output.counts,
        }
    }
}

/// Distinct slices of a typed tensor along `axis`
///
/// # Errors
///
/// - [`UniqueError::InvalidAxis`] when `axis >= tensor.rank()` (including every rank-0 tensor)
/// - [`UniqueError::IndexOverflow`] when the axis has more than `i32::MAX` positions
///
/// # Examples
///
/// ```
/// use tenuniq_core::DenseND;
/// use tenuniq_kernels::unique_along;
///
/// // [[1, 0, 0, 1],
/// //  [1, 0, 0, 1],
/// //  [2, 0, 0, 2]]
/// let x = DenseND::from_vec(vec![1, 0, 0, 1, 1, 0, 0, 1, 2, 0, 0, 2], &[3, 4]).unwrap();
/// let out = unique_along(&x, 1).unwrap();
///
/// assert_eq!(out.values.shape(), &[3, 2]);
/// assert_eq!(out.values.to_vec(), vec![1, 0, 1, 0, 2, 0]);
/// assert_eq!(out.indices.to_vec(), vec![0, 1, 1, 0]);
/// assert_eq!(out.counts(), &[2, 2]);
/// ```
pub fn unique_along<T: UniqueElement>(
    tensor: &DenseND<T>,
    axis: usize,
) -> UniqueResultT<UniqueOutput<T>> {
    unique_along_with_config(tensor, &UniqueConfig::new().with_axis(axis))
}

/// [`unique_along`] with explicit configuration; the axis comes from `config`
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        dtype = %T::DTYPE,
        axis = config.axis(),
        rank = tensor.rank(),
        extent = tracing::field::Empty
    )
)]
pub fn unique_along_with_config<T: UniqueElement>(
    tensor: &DenseND<T>,
    config: &UniqueConfig,
) -> UniqueResultT<UniqueOutput<T>> {
    let axis = config.axis();
    check_axis(axis, tensor.rank())?;
    let extent = tensor.shape()[axis];
    check_extent(extent)?;
    tracing::Span::current().record("extent", extent);

    let parallel = config.use_parallel(extent);
    let index = dedup_slices(axis_slices(tensor, axis)?, parallel)?;
    debug!(
        num_unique = index.num_unique(),
        parallel, "deduplicated slices"
    );

    let values = assemble_values(tensor, axis, &index.first_occurrence)?;
    let indices = assemble_indices(index.indices)?;

    Ok(UniqueOutput {
        values,
        indices,
        first_occurrence: index.first_occurrence,
        counts: index.counts,
    })
}

/// Distinct slices of a dynamically typed tensor
///
/// `axis` defaults to 0. The element type of `values` always equals the
/// input's.
///
/// # Errors
///
/// - [`UniqueError::UnsupportedElementType`] for `complex64` input
/// - [`UniqueError::InvalidAxis`] when the axis is outside `[0, rank)`
/// - [`UniqueError::IndexOverflow`] when the axis has more than `i32::MAX` positions
pub fn unique(tensor: &Tensor, axis: Option<usize>) -> UniqueResultT<UniqueResult> {
    let mut config = UniqueConfig::new();
    config.axis = axis;
    unique_with_config(tensor, &config)
}

/// [`unique`] with explicit configuration
pub fn unique_with_config(tensor: &Tensor, config: &UniqueConfig) -> UniqueResultT<UniqueResult> {
    match tensor {
        Tensor::Float32(dense) => unique_along_with_config(dense, config).map(Into::into),
        Tensor::Float64(dense) => unique_along_with_config(dense, config).map(Into::into),
        Tensor::Int32(dense) => unique_along_with_config(dense, config).map(Into::into),
        Tensor::Bool(dense) => unique_along_with_config(dense, config).map(Into::into),
        Tensor::String(dense) => unique_along_with_config(dense, config).map(Into::into),
        Tensor::Complex64(_) => {
            warn!(dtype = %tensor.dtype(), "unique does not support this element type");
            Err(UniqueError::unsupported_dtype(tensor.dtype(), "unique"))
        }
    }
}

/// Method-call form of [`unique_along`]
///
/// # Examples
///
/// ```
/// use tenuniq_core::DenseND;
/// use tenuniq_kernels::UniqueAxisExt;
///
/// let flags = DenseND::from_vec(vec![true, true, false], &[3]).unwrap();
/// let out = flags.unique_axis(0).unwrap();
/// assert_eq!(out.values.to_vec(), vec![true, false]);
/// assert_eq!(out.indices.to_vec(), vec![0, 0, 1]);
/// ```
pub trait UniqueAxisExt<T> {
    /// Distinct slices along `axis`
    fn unique_axis(&self, axis: usize) -> UniqueResultT<UniqueOutput<T>>;
}

impl<T: UniqueElement> UniqueAxisExt<T> for DenseND<T> {
    fn unique_axis(&self, axis: usize) -> UniqueResultT<UniqueOutput<T>> {
        unique_along(self, axis)
    }
}
