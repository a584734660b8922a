//! Integration tests for tenuniq-core
//!
//! These tests verify end-to-end functionality and cross-module interactions.

use tenuniq_core::{Complex32, DType, DenseND, Shape, Tensor};

#[test]
fn test_tensor_creation_and_access() {
    let tensor = Tensor::float32((0..24).map(|x| x as f32).collect(), &[2, 3, 4]).unwrap();

    assert_eq!(tensor.dtype(), DType::Float32);
    assert_eq!(tensor.rank(), 3);
    assert_eq!(tensor.shape(), &[2, 3, 4]);
    assert_eq!(tensor.len(), 24);

    // Row-major: last axis varies fastest
    let dense = tensor.as_f32().unwrap();
    assert_eq!(dense[&[0, 0, 1]], 1.0);
    assert_eq!(dense[&[0, 1, 0]], 4.0);
    assert_eq!(dense[&[1, 0, 0]], 12.0);
    assert_eq!(dense.get(&[1, 2, 3]), Some(&23.0));
}

#[test]
fn test_size_mismatch_is_an_error() {
    assert!(Tensor::int32(vec![1, 2, 3], &[2, 2]).is_err());
    assert!(Tensor::string(vec!["a"; 5], &[2, 3]).is_err());
    assert!(DenseND::from_vec(vec![true; 4], &[4, 1]).is_ok());
}

#[test]
fn test_every_dtype_round_trips_through_tensor() {
    let tensors = vec![
        Tensor::float32(vec![1.0], &[1]).unwrap(),
        Tensor::float64(vec![1.0], &[1]).unwrap(),
        Tensor::int32(vec![1], &[1]).unwrap(),
        Tensor::bool(vec![true], &[1]).unwrap(),
        Tensor::string(vec!["x"], &[1]).unwrap(),
        Tensor::complex64(vec![Complex32::new(0.0, 1.0)], &[1]).unwrap(),
    ];

    let dtypes: Vec<DType> = tensors.iter().map(Tensor::dtype).collect();
    assert_eq!(dtypes, DType::ALL.to_vec());
    for dtype in DType::ALL {
        assert_eq!(dtype.to_string().parse::<DType>().unwrap(), dtype);
    }
}

#[test]
fn test_typed_accessors_reject_other_dtypes() {
    let tensor = Tensor::bool(vec![true, false], &[2]).unwrap();
    assert!(tensor.as_bool().is_some());
    assert!(tensor.as_f32().is_none());
    assert!(tensor.as_string().is_none());
    assert!(tensor.as_complex64().is_none());
}

#[test]
fn test_zero_extent_tensors() {
    let tensor = Tensor::float64(vec![], &[3, 0, 2]).unwrap();
    assert!(tensor.is_empty());
    assert_eq!(tensor.rank(), 3);

    let shape: Shape = tensor.shape_small();
    assert_eq!(shape.as_slice(), &[3, 0, 2]);
}

#[test]
fn test_scalar_tensor_has_rank_zero() {
    let scalar = DenseND::scalar("only".to_string());
    assert_eq!(scalar.rank(), 0);
    assert_eq!(scalar.len(), 1);
    assert_eq!(scalar.get(&[]), Some(&"only".to_string()));
}

#[test]
fn test_views_follow_the_array() {
    let tensor = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    let view = tensor.view();
    assert_eq!(view.shape(), &[2, 3]);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), tensor.to_vec());
}

#[test]
fn test_get_checked_messages() {
    let tensor = DenseND::from_vec(vec![0u8; 6], &[2, 3]).unwrap();

    let err = tensor.get_checked(&[0, 3]).unwrap_err().to_string();
    assert!(err.contains("out of bounds for dimension 1"));

    let err = tensor.get_checked(&[0]).unwrap_err().to_string();
    assert!(err.contains("rank 2"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_tensor_json() {
    let tensor = DenseND::from_vec(vec!["a".to_string(), "b,c".to_string()], &[2, 1]).unwrap();
    let json = serde_json::to_string(&tensor).unwrap();
    let back: DenseND<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tensor);

    let dtype: DType = serde_json::from_str("\"complex64\"").unwrap();
    assert_eq!(dtype, DType::Complex64);
}
