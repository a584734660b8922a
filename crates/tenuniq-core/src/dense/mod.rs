//! Dense tensor implementation
//!
//! `DenseND<T>` is the storage type every tensor variant wraps. It covers
//! construction, shape queries and element access.

// Core type definition
pub mod types;

mod indexing;

// Supporting modules
pub mod densend_traits;
#[cfg(feature = "serde")]
pub(crate) mod serde_repr;

// Re-export the main type
pub use types::DenseND;
