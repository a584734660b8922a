//! Serialized form of [`DenseND`]: shape plus row-major elements.
//!
//! Keeps the wire format independent of the array backend's own serde support.

use super::types::DenseND;

#[derive(serde::Serialize, serde::Deserialize)]
pub struct DenseRepr<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: Clone> From<DenseND<T>> for DenseRepr<T> {
    fn from(tensor: DenseND<T>) -> Self {
        let shape = tensor.shape_vec();
        Self {
            shape,
            data: tensor.into_vec(),
        }
    }
}

impl<T: Clone> TryFrom<DenseRepr<T>> for DenseND<T> {
    type Error = String;

    fn try_from(repr: DenseRepr<T>) -> Result<Self, Self::Error> {
        DenseND::from_vec(repr.data, &repr.shape).map_err(|e| e.to_string())
    }
}
