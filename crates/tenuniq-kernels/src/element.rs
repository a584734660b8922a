//! Per-element equality keys
//!
//! Each supported element type maps its values to a hashable key whose `Eq`
//! is "value sameness" rather than numeric comparison:
//!
//! | Element | Key | Rule |
//! |---------|-----|------|
//! | `f32` | `u32` canonical bits | every NaN equals every NaN, `-0.0 == 0.0`, infinities are ordinary values |
//! | `f64` | `u64` canonical bits | same as `f32` |
//! | `i32` | `i32` | identity |
//! | `bool` | `bool` | identity |
//! | `String` | `&str` | exact byte sequence |
//!
//! Complex values have no key; the dynamic entry point rejects them.

use std::hash::Hash;

use tenuniq_core::DType;

/// Canonical bit pattern used for every `f32` NaN payload
pub const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

/// Canonical bit pattern used for every `f64` NaN payload
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Element type that can participate in slice deduplication.
///
/// The closed set of implementations mirrors the element types the operator
/// accepts. The key borrows from the element where that avoids a copy (text).
///
/// # Examples
///
/// ```
/// use tenuniq_kernels::UniqueElement;
///
/// assert_eq!(f32::NAN.key(), (-f32::NAN).key());
/// assert_eq!(0.0f32.key(), (-0.0f32).key());
/// assert_ne!(f32::INFINITY.key(), f32::NEG_INFINITY.key());
/// assert_ne!("b,c".to_string().key(), "b".to_string().key());
/// ```
pub trait UniqueElement: Clone + Send + Sync {
    /// Hashable identity of one element
    type Key<'a>: Eq + Hash + Send + Sync
    where
        Self: 'a;

    /// Element type tag of tensors holding this element
    const DTYPE: DType;

    /// Compute the element's identity key
    fn key(&self) -> Self::Key<'_>;
}

/// Map an `f32` to bits that are equal iff the values are the same value
///
/// # Examples
///
/// ```
/// use tenuniq_kernels::element::{canonical_f32_bits, CANONICAL_NAN_F32};
///
/// let quiet = f32::from_bits(0x7fc0_0001);
/// assert_eq!(canonical_f32_bits(quiet), CANONICAL_NAN_F32);
/// assert_eq!(canonical_f32_bits(-0.0), canonical_f32_bits(0.0));
/// ```
pub fn canonical_f32_bits(value: f32) -> u32 {
    if value.is_nan() {
        CANONICAL_NAN_F32
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// Map an `f64` to bits that are equal iff the values are the same value
pub fn canonical_f64_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_F64
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl UniqueElement for f32 {
    type Key<'a> = u32;
    const DTYPE: DType = DType::Float32;

    fn key(&self) -> u32 {
        canonical_f32_bits(*self)
    }
}

impl UniqueElement for f64 {
    type Key<'a> = u64;
    const DTYPE: DType = DType::Float64;

    fn key(&self) -> u64 {
        canonical_f64_bits(*self)
    }
}

impl UniqueElement for i32 {
    type Key<'a> = i32;
    const DTYPE: DType = DType::Int32;

    fn key(&self) -> i32 {
        *self
    }
}

impl UniqueElement for bool {
    type Key<'a> = bool;
    const DTYPE: DType = DType::Bool;

    fn key(&self) -> bool {
        *self
    }
}

impl UniqueElement for String {
    type Key<'a> = &'a str;
    const DTYPE: DType = DType::String;

    fn key(&self) -> &str {
        self.as_str()
    }
}
