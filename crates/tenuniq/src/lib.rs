//! # tenuniq - unique slices along an axis of N-dimensional tensors
//!
//! This is the **meta crate** that re-exports the tenuniq components for
//! convenient access and owns logging setup.
//!
//! ## Quick Start
//!
//! ```
//! use tenuniq::prelude::*;
//!
//! // [[1, 0, 0],
//! //  [1, 0, 0],
//! //  [2, 0, 0]]
//! let x = Tensor::int32(vec![1, 0, 0, 1, 0, 0, 2, 0, 0], &[3, 3])?;
//! let out = unique(&x, Some(0))?;
//!
//! assert_eq!(out.values.shape(), &[2, 3]);
//! assert_eq!(out.indices.to_vec(), vec![0, 0, 1]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Tensor Data Model ([`core`])
//!
//! Dense storage over scirs2-core arrays, the [`DType`](core::DType) tag and
//! the dynamically typed [`Tensor`](core::Tensor).
//!
//! ```
//! use tenuniq::core::{DType, Tensor};
//!
//! let words = Tensor::string(vec!["a", "b,c"], &[2])?;
//! assert_eq!(words.dtype(), DType::String);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Unique Kernel ([`kernels`])
//!
//! Axis slice iteration, structural slice keys, first-occurrence dedup and
//! output assembly.
//!
//! ```
//! use tenuniq::core::DenseND;
//! use tenuniq::kernels::{reconstruct, UniqueAxisExt};
//!
//! let x = DenseND::from_vec(vec![f64::NAN, 1.0, f64::NAN], &[3])?;
//! let out = x.unique_axis(0)?;
//! assert_eq!(out.indices.to_vec(), vec![0, 1, 0]);
//! assert_eq!(reconstruct(&out.values, &out.indices, 0)?.shape(), &[3]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Logging ([`tracing_support`])
//!
//! `tracing-subscriber` setup driven by `RUST_LOG` and `TENUNIQ_LOG_FORMAT`.
//!
//! ## Features
//!
//! - `parallel` (default): compute slice keys in parallel for long axes
//! - `serde`: serialize [`DType`](core::DType) and [`DenseND`](core::DenseND)
//! - `subscriber`: install a `tracing-subscriber` in [`tracing_support::init_tracing`]
//!
//! ## Examples
//!
//! ```bash
//! cargo run -p tenuniq --example basic_unique --features subscriber
//! ```

#![deny(warnings)]

// Re-export all components
pub use tenuniq_core as core;
pub use tenuniq_kernels as kernels;

pub mod tracing_support;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenuniq::prelude::*;
    //!
    //! let flags = Tensor::bool(vec![true, true, false], &[3]).unwrap();
    //! assert_eq!(unique(&flags, None).unwrap().num_unique(), 2);
    //! ```

    // Core types
    pub use crate::core::{DType, DenseND, Tensor};

    // Unique kernel
    pub use crate::kernels::{
        reconstruct, unique, unique_along, unique_with_config, UniqueAxisExt, UniqueConfig,
        UniqueError, UniqueOutput, UniqueResult,
    };

    // Logging
    pub use crate::tracing_support::{init_tracing, TracingConfig, TracingFormat};
}
