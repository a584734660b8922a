//! Dense tensor type definition and basic operations
//!
//! This module defines the core `DenseND<T>` type and provides basic creation
//! and accessor methods. Indexing lives in [`super::indexing`].

use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// Unlike numeric-only tensor types, the only element bound is `Clone`, so the
/// same storage carries floats, integers, booleans and text. Element type
/// semantics (equality, hashing) are layered on top by the kernels crate.
///
/// # Memory Layout
///
/// Tensors built through the constructors in this module use C-contiguous
/// (row-major) layout.
///
/// # Examples
///
/// ```
/// use tenuniq_core::dense::DenseND;
///
/// let tensor = DenseND::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3]);
/// assert_eq!(tensor.rank(), 2);
///
/// let words = DenseND::from_vec(vec!["a".to_string(), "b,c".to_string()], &[2]).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "crate::dense::serde_repr::DenseRepr<T>",
        try_from = "crate::dense::serde_repr::DenseRepr<T>",
        bound(serialize = "T: Clone + serde::Serialize"),
        bound(deserialize = "T: Clone + serde::Deserialize<'de>")
    )
)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone,
{
    /// Create a tensor from an existing ndarray
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{Array, IxDyn};
    /// use tenuniq_core::dense::DenseND;
    ///
    /// let arr = Array::from_elem(IxDyn(&[2, 3]), true);
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Returns
    ///
    /// A tensor with the specified shape, or an error if dimensions don't match
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    ///
    /// assert!(DenseND::from_vec(vec![1, 2, 3], &[2, 2]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3], false);
    /// assert_eq!(tensor[&[1, 2]], false);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a rank-0 tensor holding a single value
    pub fn scalar(value: T) -> Self {
        Self::from_elem(&[], value)
    }

    /// Get the rank (number of dimensions) of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3, 4], 0i32);
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3, 4], 0.0f32);
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the tensor is contiguous in memory.
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Get a copy of the shape as a vector.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the underlying ndarray
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Convert the tensor to a flat vector in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Consume the tensor and return its elements in row-major order
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_iter().collect()
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Check whether two tensors have identical shapes
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_row_major() {
        let tensor = DenseND::from_vec((0..6).collect::<Vec<i32>>(), &[2, 3]).unwrap();
        assert_eq!(tensor[&[0, 2]], 2);
        assert_eq!(tensor[&[1, 0]], 3);
        assert_eq!(tensor.to_vec(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = DenseND::from_vec(vec![true, false, true], &[2, 2]).unwrap_err();
        assert!(err.to_string().contains("requires 4 elements"));
    }

    #[test]
    fn test_text_elements() {
        let tensor =
            DenseND::from_vec(vec!["x".to_string(), "y".to_string()], &[1, 2]).unwrap();
        assert_eq!(tensor.shape(), &[1, 2]);
        assert_eq!(tensor[&[0, 1]], "y");
    }

    #[test]
    fn test_scalar_has_rank_zero() {
        let tensor = DenseND::scalar(7.5f64);
        assert_eq!(tensor.rank(), 0);
        assert_eq!(tensor.len(), 1);
        assert_eq!(tensor.shape(), &[] as &[usize]);
    }

    #[test]
    fn test_zero_extent_axis() {
        let tensor: DenseND<f32> = DenseND::from_vec(vec![], &[0, 3]).unwrap();
        assert!(tensor.is_empty());
        assert_eq!(tensor.shape(), &[0, 3]);
    }

    #[test]
    fn test_same_shape() {
        let a = DenseND::from_elem(&[2, 2], 1u8);
        let b = DenseND::from_elem(&[2, 2], 9u8);
        let c = DenseND::from_elem(&[4], 1u8);
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
