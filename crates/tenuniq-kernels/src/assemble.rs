//! Output assembly
//!
//! Turns a [`DedupIndex`](crate::DedupIndex) into output tensors: the distinct
//! slices concatenated along the original axis in first-occurrence order, and
//! the rank-1 `int32` index vector. [`reconstruct`] is the inverse gather.

use scirs2_core::ndarray_ext::Axis;
use tenuniq_core::DenseND;

use crate::error::{check_axis, UniqueError, UniqueResultT};

/// Gather the slices at `positions` along `axis`, in the given order
///
/// The result has the source shape except `shape[axis] == positions.len()`.
/// Positions must be in range for the axis.
pub fn assemble_values<T: Clone>(
    source: &DenseND<T>,
    axis: usize,
    positions: &[usize],
) -> UniqueResultT<DenseND<T>> {
    check_axis(axis, source.rank())?;
    let extent = source.shape()[axis];
    if let Some(&bad) = positions.iter().find(|&&p| p >= extent) {
        return Err(UniqueError::Construction(format!(
            "Slice position {} out of bounds for axis {} with extent {}",
            bad, axis, extent
        )));
    }
    Ok(DenseND::from_array(
        source.as_array().select(Axis(axis), positions),
    ))
}

/// Wrap ordinals as a rank-1 `int32` tensor
pub fn assemble_indices(indices: Vec<i32>) -> UniqueResultT<DenseND<i32>> {
    let len = indices.len();
    Ok(DenseND::from_vec(indices, &[len])?)
}

/// Rebuild the source tensor from a unique result
///
/// Gathers `values` along `axis` at each ordinal in `indices`. For any output
/// of the unique operator, `reconstruct(values, indices, axis)` equals the
/// input tensor.
///
/// # Errors
///
/// - [`UniqueError::InvalidAxis`] when `axis >= values.rank()`
/// - [`UniqueError::Construction`] when `indices` is not rank 1
/// - [`UniqueError::InvalidIndex`] for an ordinal outside `[0, values.shape()[axis])`
///
/// # Examples
///
/// ```
/// use tenuniq_core::DenseND;
/// use tenuniq_kernels::{reconstruct, unique_along};
///
/// let x = DenseND::from_vec(vec![1, 0, 0, 1, 1, 0, 0, 1, 2, 0, 0, 2], &[3, 4]).unwrap();
/// let out = unique_along(&x, 1).unwrap();
/// let rebuilt = reconstruct(&out.values, &out.indices, 1).unwrap();
/// assert_eq!(rebuilt, x);
/// ```
pub fn reconstruct<T: Clone>(
    values: &DenseND<T>,
    indices: &DenseND<i32>,
    axis: usize,
) -> UniqueResultT<DenseND<T>> {
    check_axis(axis, values.rank())?;
    if indices.rank() != 1 {
        return Err(UniqueError::Construction(format!(
            "Indices must be rank 1, got rank {}",
            indices.rank()
        )));
    }

    let num_unique = values.shape()[axis];
    let positions = indices
        .iter()
        .map(|&index| match usize::try_from(index) {
            Ok(position) if position < num_unique => Ok(position),
            _ => Err(UniqueError::invalid_index(index, num_unique)),
        })
        .collect::<UniqueResultT<Vec<usize>>>()?;

    assemble_values(values, axis, &positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_rows_in_given_order() {
        let source = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[3, 2]).unwrap();
        let values = assemble_values(&source, 0, &[2, 0]).unwrap();
        assert_eq!(values.shape(), &[2, 2]);
        assert_eq!(values.to_vec(), vec![5, 6, 1, 2]);
    }

    #[test]
    fn test_assemble_last_axis_of_rank3() {
        // [[[1, 0, 1]], [[1, 0, 1]]] shape [2, 1, 3]
        let source = DenseND::from_vec(vec![1, 0, 1, 1, 0, 1], &[2, 1, 3]).unwrap();
        let values = assemble_values(&source, 2, &[0, 1]).unwrap();
        assert_eq!(values.shape(), &[2, 1, 2]);
        assert_eq!(values.to_vec(), vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_assemble_no_positions() {
        let source = DenseND::from_vec(vec![1.0f64, 2.0], &[1, 2]).unwrap();
        let values = assemble_values(&source, 0, &[]).unwrap();
        assert_eq!(values.shape(), &[0, 2]);
        assert!(values.is_empty());
    }

    #[test]
    fn test_assemble_rejects_out_of_range_position() {
        let source = DenseND::from_vec(vec![1, 2], &[2]).unwrap();
        let err = assemble_values(&source, 0, &[2]).unwrap_err();
        assert!(matches!(err, UniqueError::Construction(_)));
    }

    #[test]
    fn test_assemble_indices_shape() {
        let indices = assemble_indices(vec![0, 0, 1]).unwrap();
        assert_eq!(indices.shape(), &[3]);
        assert_eq!(indices.to_vec(), vec![0, 0, 1]);

        let empty = assemble_indices(vec![]).unwrap();
        assert_eq!(empty.shape(), &[0]);
    }

    #[test]
    fn test_reconstruct_repeats_slices() {
        let values = DenseND::from_vec(vec![true, false], &[2]).unwrap();
        let indices = DenseND::from_vec(vec![0, 0, 1, 0], &[4]).unwrap();
        let rebuilt = reconstruct(&values, &indices, 0).unwrap();
        assert_eq!(rebuilt.to_vec(), vec![true, true, false, true]);
    }

    #[test]
    fn test_reconstruct_rejects_bad_ordinals() {
        let values = DenseND::from_vec(vec![1, 2], &[2]).unwrap();

        let negative = DenseND::from_vec(vec![0, -1], &[2]).unwrap();
        assert_eq!(
            reconstruct(&values, &negative, 0).unwrap_err(),
            UniqueError::invalid_index(-1, 2)
        );

        let too_big = DenseND::from_vec(vec![2], &[1]).unwrap();
        assert_eq!(
            reconstruct(&values, &too_big, 0).unwrap_err(),
            UniqueError::invalid_index(2, 2)
        );
    }

    #[test]
    fn test_reconstruct_rejects_matrix_indices() {
        let values = DenseND::from_vec(vec![1, 2], &[2]).unwrap();
        let indices = DenseND::from_vec(vec![0, 1, 1, 0], &[2, 2]).unwrap();
        assert!(matches!(
            reconstruct(&values, &indices, 0),
            Err(UniqueError::Construction(_))
        ));
    }

    #[test]
    fn test_reconstruct_invalid_axis() {
        let values = DenseND::from_vec(vec![1, 2], &[2]).unwrap();
        let indices = DenseND::from_vec(vec![0], &[1]).unwrap();
        assert_eq!(
            reconstruct(&values, &indices, 1).unwrap_err(),
            UniqueError::invalid_axis(1, 1)
        );
    }
}
