//! # tenuniq-core
//!
//! Tensor data model for the tenuniq stack.
//!
//! This crate provides the storage the unique-along-axis kernels read from and
//! write to:
//!
//! - **Dense tensor representation** ([`DenseND`]) over scirs2-core's dynamic-rank arrays
//! - **Element type tag** ([`DType`]) covering floats, integers, booleans, text and complex
//! - **Dynamically typed tensor** ([`Tensor`]) holding one dense array per element type
//!
//! ## SciRS2 Integration
//!
//! Array storage goes through `scirs2_core::ndarray_ext`; this crate does not
//! depend on `ndarray` directly.
//!
//! ## Memory Layout
//!
//! Tensors are C-contiguous (row-major). A tensor's elements enumerate with the
//! last axis varying fastest.
//!
//! ## Quick Start
//!
//! ```
//! use tenuniq_core::{DType, DenseND, Tensor};
//!
//! // Typed storage
//! let dense = DenseND::from_vec(vec![1.0f32, 1.0, 2.0], &[3]).unwrap();
//! assert_eq!(dense.shape(), &[3]);
//!
//! // Dynamically typed tensor
//! let tensor = Tensor::bool(vec![true, true, false], &[3]).unwrap();
//! assert_eq!(tensor.dtype(), DType::Bool);
//! ```
//!
//! ## Error Handling
//!
//! Constructors return `anyhow::Result`:
//!
//! ```
//! use tenuniq_core::Tensor;
//!
//! // 3 elements cannot fill a 2x2 tensor
//! assert!(Tensor::float32(vec![1.0, 2.0, 3.0], &[2, 2]).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialization of [`DType`] and [`DenseND`] (shape plus row-major data)

#![deny(warnings)]

pub mod dense;
pub mod types;

pub use types::{Axis, DType, DenseND, Rank, Shape, Tensor};

/// Complex element type stored by [`Tensor::Complex64`]
pub use scirs2_core::num_complex::Complex32;
