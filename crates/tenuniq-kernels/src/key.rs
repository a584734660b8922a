//! Slice equality keys
//!
//! The key of a slice is the ordered sequence of its element keys. Two slices
//! have equal keys iff they have the same length and every corresponding pair
//! of elements is the same value under [`UniqueElement`]. Because the key is
//! structural there is no separator to collide with: `["b,c"]` and
//! `["b", "c"]` produce keys of different lengths.
//!
//! Key computation is pure and per-slice, so with the `parallel` feature it
//! can be fanned out across threads. Ordinal assignment stays sequential
//! (see [`crate::dedup`]).

use crate::element::UniqueElement;
use crate::slices::{AxisSlice, AxisSlices};

/// Hashable identity of one slice
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SliceKey<K>(Vec<K>);

impl<K> SliceKey<K> {
    /// Number of element keys (equals the slice length)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for slices of an axis whose complement has zero elements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element keys in row-major order
    pub fn as_slice(&self) -> &[K] {
        &self.0
    }
}

/// Compute the key of one slice
///
/// # Examples
///
/// ```
/// use tenuniq_core::DenseND;
/// use tenuniq_kernels::{axis_slices, slice_key};
///
/// let rows = DenseND::from_vec(vec![f32::NAN, 1.0, f32::NAN, 1.0], &[2, 2]).unwrap();
/// let keys: Vec<_> = axis_slices(&rows, 0).unwrap().map(|s| slice_key(&s)).collect();
/// assert_eq!(keys[0], keys[1]);
/// ```
pub fn slice_key<'a, T: UniqueElement>(slice: &AxisSlice<'a, T>) -> SliceKey<T::Key<'a>> {
    SliceKey(slice.iter().map(|element| element.key()).collect())
}

/// Compute the keys of every slice, in axis order
///
/// With `parallel` set (and the `parallel` feature enabled) keys are computed
/// on the thread pool; the returned order is the same either way.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn slice_keys<'a, T: UniqueElement>(
    slices: AxisSlices<'a, T>,
    parallel: bool,
) -> Vec<SliceKey<T::Key<'a>>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return slice_keys_parallel(slices);
    }

    slices.map(|slice| slice_key(&slice)).collect()
}

#[cfg(feature = "parallel")]
fn slice_keys_parallel<'a, T: UniqueElement>(
    slices: AxisSlices<'a, T>,
) -> Vec<SliceKey<T::Key<'a>>> {
    use scirs2_core::parallel_ops::*;

    let slices: Vec<AxisSlice<'a, T>> = slices.collect();
    slices
        .into_par_iter()
        .map(|slice| slice_key(&slice))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::axis_slices;
    use tenuniq_core::DenseND;

    fn strings(values: &[&str], shape: &[usize]) -> DenseND<String> {
        DenseND::from_vec(values.iter().map(|s| s.to_string()).collect(), shape).unwrap()
    }

    #[test]
    fn test_comma_inside_element_is_not_a_boundary() {
        let tensor = strings(&["a", "b,c", "d", "a", "b", "c,d"], &[2, 3]);
        let keys = slice_keys(axis_slices(&tensor, 0).unwrap(), false);
        assert_eq!(keys[0].as_slice(), &["a", "b,c", "d"]);
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn test_joined_text_collision_is_avoided() {
        let one = strings(&["b,c"], &[1, 1]);
        let two = strings(&["b", "c"], &[1, 2]);
        let k1 = slice_key(&axis_slices(&one, 0).unwrap().next().unwrap());
        let k2 = slice_key(&axis_slices(&two, 0).unwrap().next().unwrap());
        assert_eq!(k1.len(), 1);
        assert_eq!(k2.len(), 2);
        assert_ne!(k1.as_slice(), k2.as_slice());
    }

    #[test]
    fn test_nan_rows_share_key() {
        let tensor =
            DenseND::from_vec(vec![f64::NAN, 2.0, f64::NAN, 2.0, 2.0, f64::NAN], &[3, 2]).unwrap();
        let keys = slice_keys(axis_slices(&tensor, 0).unwrap(), false);
        assert_eq!(keys[0], keys[1]);
        assert_ne!(keys[0], keys[2]);
    }

    #[test]
    fn test_empty_slices_share_key() {
        let tensor: DenseND<i32> = DenseND::from_vec(vec![], &[2, 0]).unwrap();
        let keys = slice_keys(axis_slices(&tensor, 0).unwrap(), false);
        assert_eq!(keys.len(), 2);
        assert!(keys[0].is_empty());
        assert_eq!(keys[0], keys[1]);
    }

    #[test]
    fn test_parallel_keys_match_serial() {
        let data: Vec<i32> = (0..600).map(|x| x % 7).collect();
        let tensor = DenseND::from_vec(data, &[200, 3]).unwrap();

        let serial = slice_keys(axis_slices(&tensor, 0).unwrap(), false);
        let parallel = slice_keys(axis_slices(&tensor, 0).unwrap(), true);
        assert_eq!(serial, parallel);
    }
}
