//! Axis slice iteration
//!
//! A slice at position `i` along `axis` is the sub-array with that coordinate
//! fixed and every other coordinate ranging over its full extent. Elements of
//! a slice are visited in row-major order of the remaining axes.
//!
//! Slices are zero-copy views computed from the source strides, so iteration
//! works the same for any rank and allocates nothing per slice.
//!
//! # Examples
//!
//! ```
//! use tenuniq_core::DenseND;
//! use tenuniq_kernels::axis_slices;
//!
//! // [[1, 2, 3],
//! //  [4, 5, 6]]
//! let tensor = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
//!
//! let columns: Vec<Vec<i32>> = axis_slices(&tensor, 1)
//!     .unwrap()
//!     .map(|slice| slice.to_vec())
//!     .collect();
//! assert_eq!(columns, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
//! ```

use std::iter::FusedIterator;

use scirs2_core::ndarray_ext::{ArrayView, Axis, IxDyn};
use tenuniq_core::DenseND;

use crate::error::{check_axis, UniqueResultT};

/// Read-only view of one slice along an axis
#[derive(Clone, Debug)]
pub struct AxisSlice<'a, T> {
    position: usize,
    view: ArrayView<'a, T, IxDyn>,
}

impl<'a, T> AxisSlice<'a, T> {
    /// Position of this slice along the iterated axis
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of elements in the slice (product of the other extents)
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// True when some other axis has zero extent
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Shape of the slice (source shape without the iterated axis)
    pub fn shape(&self) -> &[usize] {
        self.view.shape()
    }

    /// Underlying strided view
    pub fn view(&self) -> &ArrayView<'a, T, IxDyn> {
        &self.view
    }

    /// Elements in row-major order of the remaining axes
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        self.view.clone().into_iter()
    }

    /// Copy the elements out in row-major order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.view.iter().cloned().collect()
    }
}

/// Iterator over the slices of a tensor along one axis
///
/// Finite (`extent[axis]` items), exact-size, and restartable by cloning.
#[derive(Clone, Debug)]
pub struct AxisSlices<'a, T> {
    source: ArrayView<'a, T, IxDyn>,
    axis: usize,
    front: usize,
    back: usize,
}

impl<'a, T> AxisSlices<'a, T> {
    /// Iterate `source` along `axis`
    ///
    /// # Errors
    ///
    /// [`UniqueError::InvalidAxis`](crate::UniqueError::InvalidAxis) when
    /// `axis >= source.ndim()`.
    pub fn new(source: ArrayView<'a, T, IxDyn>, axis: usize) -> UniqueResultT<Self> {
        check_axis(axis, source.ndim())?;
        let back = source.len_of(Axis(axis));
        Ok(Self {
            source,
            axis,
            front: 0,
            back,
        })
    }

    /// The axis being iterated
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Extent of the iterated axis (total number of slices)
    pub fn extent(&self) -> usize {
        self.source.len_of(Axis(self.axis))
    }

    /// Element count of every slice
    pub fn slice_len(&self) -> usize {
        self.source
            .shape()
            .iter()
            .enumerate()
            .filter(|&(dim, _)| dim != self.axis)
            .map(|(_, &extent)| extent)
            .product()
    }

    fn slice_at(&self, position: usize) -> AxisSlice<'a, T> {
        AxisSlice {
            position,
            view: self
                .source
                .clone()
                .index_axis_move(Axis(self.axis), position),
        }
    }
}

impl<'a, T> Iterator for AxisSlices<'a, T> {
    type Item = AxisSlice<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let slice = self.slice_at(self.front);
        self.front += 1;
        Some(slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for AxisSlices<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slice_at(self.back))
    }
}

impl<T> ExactSizeIterator for AxisSlices<'_, T> {}

impl<T> FusedIterator for AxisSlices<'_, T> {}

/// Iterate the slices of `tensor` along `axis`
///
/// # Errors
///
/// [`UniqueError::InvalidAxis`](crate::UniqueError::InvalidAxis) when
/// `axis >= tensor.rank()`.
pub fn axis_slices<T: Clone>(tensor: &DenseND<T>, axis: usize) -> UniqueResultT<AxisSlices<'_, T>> {
    AxisSlices::new(tensor.view(), axis)
}
