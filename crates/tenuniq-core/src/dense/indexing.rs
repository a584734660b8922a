//! Element access by multi-index
//!
//! Bounds-checked reads used by callers that cannot guarantee the index shape.

use super::types::DenseND;

impl<T> DenseND<T>
where
    T: Clone,
{
    /// Get an element by index without panicking
    ///
    /// # Returns
    ///
    /// Some reference to the element if the index is valid, None otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// assert_eq!(tensor.get(&[0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        self.data.get(index)
    }

    /// Get element with detailed error reporting on out-of-bounds access
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec!["a".to_string(), "b".to_string()], &[2]).unwrap();
    /// assert_eq!(tensor.get_checked(&[1]).unwrap(), "b");
    /// assert!(tensor.get_checked(&[2]).is_err());
    /// ```
    pub fn get_checked(&self, index: &[usize]) -> anyhow::Result<&T> {
        if index.len() != self.rank() {
            anyhow::bail!(
                "Index has {} dimensions but tensor has rank {}",
                index.len(),
                self.rank()
            );
        }

        for (i, (&idx, &dim)) in index.iter().zip(self.shape()).enumerate() {
            if idx >= dim {
                anyhow::bail!(
                    "Index {} is out of bounds for dimension {} with size {}",
                    idx,
                    i,
                    dim
                );
            }
        }

        self.data
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("Index {:?} not addressable", index))
    }

    /// Get the underlying data as a slice if the tensor is contiguous
    pub fn try_as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }
}
