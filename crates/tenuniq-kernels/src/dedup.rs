//! Dedup index builder
//!
//! Single forward pass over slice keys in axis order. The first time a key is
//! seen it receives the next ordinal (the current number of distinct slices)
//! and its axis position is recorded; later equal keys reuse that ordinal.
//! Ordinals are therefore assigned in first-occurrence order, which is what
//! makes the output deterministic.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::element::UniqueElement;
use crate::error::{UniqueError, UniqueResultT};
use crate::key::slice_keys;
use crate::slices::AxisSlices;

/// Result of the dedup pass, before any output tensor is built
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DedupIndex {
    /// Axis position of the first occurrence of each distinct slice
    pub first_occurrence: Vec<usize>,
    /// Ordinal of the distinct slice equal to the slice at each axis position
    pub indices: Vec<i32>,
    /// Number of axis positions mapped to each ordinal
    pub counts: Vec<usize>,
}

impl DedupIndex {
    /// Number of distinct slices
    pub fn num_unique(&self) -> usize {
        self.first_occurrence.len()
    }
}

/// Incremental first-occurrence ordinal assignment
///
/// # Examples
///
/// ```
/// use tenuniq_kernels::DedupIndexBuilder;
///
/// let mut builder = DedupIndexBuilder::new();
/// for key in ["x", "y", "x", "z", "y"] {
///     builder.push(key).unwrap();
/// }
/// let index = builder.finish();
/// assert_eq!(index.indices, vec![0, 1, 0, 2, 1]);
/// assert_eq!(index.first_occurrence, vec![0, 1, 3]);
/// assert_eq!(index.counts, vec![2, 2, 1]);
/// ```
#[derive(Debug)]
pub struct DedupIndexBuilder<K> {
    seen: HashMap<K, i32>,
    index: DedupIndex,
}

impl<K: Eq + Hash> Default for DedupIndexBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> DedupIndexBuilder<K> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
            index: DedupIndex::default(),
        }
    }

    /// Create a builder sized for `extent` axis positions
    pub fn with_capacity(extent: usize) -> Self {
        Self {
            seen: HashMap::with_capacity(extent),
            index: DedupIndex {
                first_occurrence: Vec::new(),
                indices: Vec::with_capacity(extent),
                counts: Vec::new(),
            },
        }
    }

    /// Record the key of the next axis position and return its ordinal
    ///
    /// # Errors
    ///
    /// [`UniqueError::IndexOverflow`] once more than `i32::MAX` positions
    /// have been pushed.
    pub fn push(&mut self, key: K) -> UniqueResultT<i32> {
        let position = self.index.indices.len();
        let ordinal = match self.seen.entry(key) {
            Entry::Occupied(entry) => {
                let ordinal = *entry.get();
                self.index.counts[ordinal as usize] += 1;
                ordinal
            }
            Entry::Vacant(entry) => {
                let ordinal = i32::try_from(self.index.first_occurrence.len())
                    .map_err(|_| UniqueError::index_overflow(position + 1))?;
                self.index.first_occurrence.push(position);
                self.index.counts.push(1);
                entry.insert(ordinal);
                ordinal
            }
        };
        self.index.indices.push(ordinal);
        Ok(ordinal)
    }

    /// Number of distinct keys seen so far
    pub fn num_unique(&self) -> usize {
        self.index.first_occurrence.len()
    }

    /// Number of keys pushed so far
    pub fn len(&self) -> usize {
        self.index.indices.len()
    }

    /// True before the first push
    pub fn is_empty(&self) -> bool {
        self.index.indices.is_empty()
    }

    /// Finish the pass
    pub fn finish(self) -> DedupIndex {
        self.index
    }
}

/// Run the dedup pass over every slice of an axis
///
/// Keys may be computed in parallel; ordinals are always assigned in axis order.
pub fn dedup_slices<T: UniqueElement>(
    slices: AxisSlices<'_, T>,
    parallel_keys: bool,
) -> UniqueResultT<DedupIndex> {
    let mut builder = DedupIndexBuilder::with_capacity(slices.len());
    for key in slice_keys(slices, parallel_keys) {
        builder.push(key)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::axis_slices;
    use tenuniq_core::DenseND;

    #[test]
    fn test_first_occurrence_ordinals() {
        let tensor = DenseND::from_vec(vec![1.0f32, 1.0, 2.0, 4.0, 4.0, 4.0, 7.0, 8.0, 8.0], &[9])
            .unwrap();
        let index = dedup_slices(axis_slices(&tensor, 0).unwrap(), false).unwrap();
        assert_eq!(index.indices, vec![0, 0, 1, 2, 2, 2, 3, 4, 4]);
        assert_eq!(index.first_occurrence, vec![0, 2, 3, 6, 7]);
        assert_eq!(index.counts, vec![2, 1, 3, 1, 2]);
        assert_eq!(index.num_unique(), 5);
    }

    #[test]
    fn test_ordinals_follow_first_appearance_not_value() {
        let tensor = DenseND::from_vec(vec![9, 3, 9, 1, 3], &[5]).unwrap();
        let index = dedup_slices(axis_slices(&tensor, 0).unwrap(), false).unwrap();
        assert_eq!(index.indices, vec![0, 1, 0, 2, 1]);
    }

    #[test]
    fn test_empty_axis() {
        let tensor: DenseND<bool> = DenseND::from_vec(vec![], &[0]).unwrap();
        let index = dedup_slices(axis_slices(&tensor, 0).unwrap(), false).unwrap();
        assert_eq!(index, DedupIndex::default());
    }

    #[test]
    fn test_builder_len_tracking() {
        let mut builder = DedupIndexBuilder::with_capacity(3);
        assert!(builder.is_empty());
        assert_eq!(builder.push(true).unwrap(), 0);
        assert_eq!(builder.push(true).unwrap(), 0);
        assert_eq!(builder.push(false).unwrap(), 1);
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.num_unique(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_keys_same_ordinals() {
        let data: Vec<i32> = (0..3000).map(|x| (x * 31) % 11).collect();
        let tensor = DenseND::from_vec(data, &[1000, 3]).unwrap();

        let serial = dedup_slices(axis_slices(&tensor, 0).unwrap(), false).unwrap();
        let parallel = dedup_slices(axis_slices(&tensor, 0).unwrap(), true).unwrap();
        assert_eq!(serial, parallel);
    }
}
