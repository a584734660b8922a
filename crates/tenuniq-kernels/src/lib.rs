//! # tenuniq-kernels
//!
//! Unique-slices-along-axis kernel for tenuniq tensors.
//!
//! ## Overview
//!
//! Given a tensor and an axis, the kernel returns the distinct slices along that
//! axis in first-occurrence order together with an `int32` index vector mapping
//! every input slice to its distinct slice.
//!
//! **Key Features:**
//! - **Any rank, any axis** - slices are strided views, no per-rank code paths
//! - **Value-sameness equality** - every NaN groups with every NaN, `-0.0` with `0.0`
//! - **Structural text keys** - `["b,c"]` never collides with `["b", "c"]`
//! - **Deterministic ordinals** - assigned in a single forward pass along the axis
//! - **Parallel key computation** for long axes (feature-gated)
//! - **Round trip** - [`reconstruct`] rebuilds the input from `values` and `indices`
//!
//! ## Quick Start
//!
//! ```rust
//! use tenuniq_core::{DenseND, Tensor};
//! use tenuniq_kernels::{reconstruct, unique, unique_along};
//!
//! // Dynamically typed entry point, axis defaults to 0
//! let words = Tensor::string(vec!["a", "b", "b", "c", "c"], &[5]).unwrap();
//! let out = unique(&words, None).unwrap();
//! assert_eq!(out.indices.to_vec(), vec![0, 1, 1, 2, 2]);
//!
//! // Typed entry point over a rank-3 tensor
//! let x = DenseND::from_vec(vec![1, 0, 1, 1, 0, 1], &[2, 1, 3]).unwrap();
//! let out = unique_along(&x, 2).unwrap();
//! assert_eq!(out.values.shape(), &[2, 1, 2]);
//! assert_eq!(out.indices.to_vec(), vec![0, 1, 0]);
//! assert_eq!(reconstruct(&out.values, &out.indices, 2).unwrap(), x);
//! ```
//!
//! ## Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`slices`] | lazy, restartable iteration of slices along an axis |
//! | [`element`] | per-element identity keys ([`UniqueElement`]) |
//! | [`key`] | per-slice structural keys |
//! | [`dedup`] | first-occurrence ordinal assignment |
//! | [`assemble`] | output tensors and [`reconstruct`] |
//! | [`unique`](mod@unique) | entry points |
//!
//! ## Features
//!
//! - `parallel` (default) - compute slice keys on the scirs2-core thread pool
//!   once an axis reaches [`UniqueConfig::parallel_threshold`] slices
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and parallelism.
//! Direct use of `ndarray` or `rayon` is not permitted.

#![deny(warnings)]

pub mod assemble;
pub mod config;
pub mod dedup;
pub mod element;
pub mod error;
pub mod key;
pub mod slices;
pub mod unique;


// Re-exports
pub use assemble::{assemble_indices, assemble_values, reconstruct};
pub use config::{UniqueConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use dedup::{dedup_slices, DedupIndex, DedupIndexBuilder};
pub use element::UniqueElement;
pub use error::{UniqueError, UniqueResultT};
pub use key::{slice_key, slice_keys, SliceKey};
pub use slices::{axis_slices, AxisSlice, AxisSlices};
pub use unique::{
    unique, unique_along, unique_along_with_config, unique_with_config, UniqueAxisExt,
    UniqueOutput, UniqueResult,
};
