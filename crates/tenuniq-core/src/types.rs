//! Core type definitions for tenuniq tensors.
//!
//! This module defines the fundamental types used throughout the stack:
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - The element type tag ([`DType`])
//! - The dynamically typed tensor ([`Tensor`]) wrapping one [`DenseND`] per element type
//!
//! # Examples
//!
//! ```
//! use tenuniq_core::{DType, Tensor};
//!
//! let tensor = Tensor::string(vec!["a", "b", "b"], &[3]).unwrap();
//! assert_eq!(tensor.dtype(), DType::String);
//! assert_eq!(tensor.shape(), &[3]);
//! ```

use std::fmt;
use std::str::FromStr;

use scirs2_core::num_complex::Complex32;
use smallvec::SmallVec;

// Re-export the actual DenseND implementation
pub use crate::dense::DenseND;

/// Type alias for tensor axis index.
///
/// Zero-indexed (0 is the first axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 dimensions.
pub type Shape = SmallVec<[usize; 6]>;

/// Element type tag of a [`Tensor`].
///
/// The names returned by [`DType::name`] (and accepted by [`FromStr`]) are the
/// conventional lower-case dtype strings: `float32`, `float64`, `int32`,
/// `bool`, `string`, `complex64`.
///
/// # Examples
///
/// ```
/// use tenuniq_core::DType;
///
/// let dtype: DType = "bool".parse().unwrap();
/// assert_eq!(dtype, DType::Bool);
/// assert_eq!(DType::Float32.to_string(), "float32");
/// assert!("float16".parse::<DType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DType {
    /// 32-bit IEEE-754 float
    Float32,
    /// 64-bit IEEE-754 float
    Float64,
    /// 32-bit signed integer
    Int32,
    /// Boolean
    Bool,
    /// UTF-8 text
    String,
    /// Complex number with two 32-bit float components
    Complex64,
}

impl DType {
    /// All element types, in declaration order
    pub const ALL: [DType; 6] = [
        DType::Float32,
        DType::Float64,
        DType::Int32,
        DType::Bool,
        DType::String,
        DType::Complex64,
    ];

    /// Canonical lower-case name
    pub fn name(self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Int32 => "int32",
            DType::Bool => "bool",
            DType::String => "string",
            DType::Complex64 => "complex64",
        }
    }

    /// Whether values of this type are numbers (real or complex)
    pub fn is_numeric(self) -> bool {
        !matches!(self, DType::Bool | DType::String)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .into_iter()
            .find(|dtype| dtype.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown dtype '{}'", s))
    }
}

/// Dynamically typed tensor.
///
/// One variant per [`DType`]; each holds the dense storage for that element
/// type. Operations that are generic over the element type dispatch once on
/// the variant and then run monomorphized code.
///
/// # Examples
///
/// ```
/// use tenuniq_core::{DType, DenseND, Tensor};
///
/// let dense = DenseND::from_vec(vec![1.0f32, f32::NAN], &[2]).unwrap();
/// let tensor = Tensor::from(dense);
/// assert_eq!(tensor.dtype(), DType::Float32);
/// assert!(tensor.as_f32().is_some());
/// assert!(tensor.as_bool().is_none());
/// ```
#[derive(Clone, Debug)]
pub enum Tensor {
    Float32(DenseND<f32>),
    Float64(DenseND<f64>),
    Int32(DenseND<i32>),
    Bool(DenseND<bool>),
    String(DenseND<String>),
    Complex64(DenseND<Complex32>),
}

/// Apply an expression to the `DenseND` inside any `Tensor` variant.
macro_rules! with_dense {
    ($tensor:expr, $dense:ident => $body:expr) => {
        match $tensor {
            Tensor::Float32($dense) => $body,
            Tensor::Float64($dense) => $body,
            Tensor::Int32($dense) => $body,
            Tensor::Bool($dense) => $body,
            Tensor::String($dense) => $body,
            Tensor::Complex64($dense) => $body,
        }
    };
}

impl Tensor {
    /// Build a `float32` tensor from row-major data
    pub fn float32(data: Vec<f32>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Float32(DenseND::from_vec(data, shape)?))
    }

    /// Build a `float64` tensor from row-major data
    pub fn float64(data: Vec<f64>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Float64(DenseND::from_vec(data, shape)?))
    }

    /// Build an `int32` tensor from row-major data
    pub fn int32(data: Vec<i32>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Int32(DenseND::from_vec(data, shape)?))
    }

    /// Build a `bool` tensor from row-major data
    pub fn bool(data: Vec<bool>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Bool(DenseND::from_vec(data, shape)?))
    }

    /// Build a `string` tensor from row-major data
    ///
    /// # Examples
    ///
    /// ```
    /// use tenuniq_core::Tensor;
    ///
    /// let tensor = Tensor::string(vec!["a", "b,c", "d", "a", "b", "c,d"], &[2, 3]).unwrap();
    /// assert_eq!(tensor.len(), 6);
    /// ```
    pub fn string<S: Into<String>>(data: Vec<S>, shape: &[usize]) -> anyhow::Result<Self> {
        let data = data.into_iter().map(Into::into).collect();
        Ok(Tensor::String(DenseND::from_vec(data, shape)?))
    }

    /// Build a `complex64` tensor from row-major data
    pub fn complex64(data: Vec<Complex32>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Complex64(DenseND::from_vec(data, shape)?))
    }

    /// Element type tag
    pub fn dtype(&self) -> DType {
        match self {
            Tensor::Float32(_) => DType::Float32,
            Tensor::Float64(_) => DType::Float64,
            Tensor::Int32(_) => DType::Int32,
            Tensor::Bool(_) => DType::Bool,
            Tensor::String(_) => DType::String,
            Tensor::Complex64(_) => DType::Complex64,
        }
    }

    /// Per-axis extents
    pub fn shape(&self) -> &[usize] {
        with_dense!(self, d => d.shape())
    }

    /// Shape as a [`Shape`] small vector
    pub fn shape_small(&self) -> Shape {
        Shape::from_slice(self.shape())
    }

    /// Number of axes
    pub fn rank(&self) -> Rank {
        with_dense!(self, d => d.rank())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        with_dense!(self, d => d.len())
    }

    /// Check if the tensor has zero elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_f32(&self) -> Option<&DenseND<f32>> {
        match self {
            Tensor::Float32(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<&DenseND<f64>> {
        match self {
            Tensor::Float64(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<&DenseND<i32>> {
        match self {
            Tensor::Int32(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<&DenseND<bool>> {
        match self {
            Tensor::Bool(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&DenseND<String>> {
        match self {
            Tensor::String(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_complex64(&self) -> Option<&DenseND<Complex32>> {
        match self {
            Tensor::Complex64(d) => Some(d),
            _ => None,
        }
    }
}

macro_rules! impl_from_dense {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<DenseND<$ty>> for Tensor {
                fn from(dense: DenseND<$ty>) -> Self {
                    Tensor::$variant(dense)
                }
            }
        )*
    };
}

impl_from_dense! {
    f32 => Float32,
    f64 => Float64,
    i32 => Int32,
    bool => Bool,
    String => String,
    Complex32 => Complex64,
}
