//! Unique slices along an axis, end to end.
//!
//! This example demonstrates:
//! - 1-D unique over numbers, text and booleans
//! - NaN grouping and comma-safe text rows
//! - Row, column and depth dedup of higher-rank tensors
//! - Counts, first occurrences and reconstruction
//!
//! Run with:
//! ```bash
//! RUST_LOG=tenuniq_kernels=debug cargo run -p tenuniq --example basic_unique --features subscriber
//! ```

use tenuniq::prelude::*;

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::from_env())?;
    tracing::info!("running unique examples");

    println!("=== tenuniq: Unique Along Axis Examples ===\n");

    // Example 1: flat inputs
    example_flat()?;

    // Example 2: value sameness
    example_sameness()?;

    // Example 3: higher rank
    example_higher_rank()?;

    // Example 4: round trip
    example_round_trip()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_flat() -> anyhow::Result<()> {
    println!("--- Example 1: Flat Inputs ---");

    let numbers = Tensor::int32(vec![1, 1, 2, 4, 4, 4, 7, 8, 8], &[9])?;
    let out = unique(&numbers, None)?;
    println!("int32 values:  {:?}", out.values.as_i32().map(DenseND::to_vec));
    println!("int32 indices: {:?}", out.indices.to_vec());

    let words = Tensor::string(vec!["a", "b", "b", "c", "c"], &[5])?;
    let out = unique(&words, None)?;
    println!("string values:  {:?}", out.values.as_string().map(DenseND::to_vec));
    println!("string indices: {:?}", out.indices.to_vec());

    let flags = Tensor::bool(vec![true, true, false], &[3])?;
    let out = unique(&flags, None)?;
    println!("bool values:  {:?}", out.values.as_bool().map(DenseND::to_vec));
    println!("bool indices: {:?}\n", out.indices.to_vec());
    Ok(())
}

fn example_sameness() -> anyhow::Result<()> {
    println!("--- Example 2: Value Sameness ---");

    let floats = Tensor::float32(vec![f32::NAN, f32::INFINITY, f32::NAN, f32::INFINITY], &[4])?;
    let out = unique(&floats, None)?;
    println!("NaN/Infinity values:  {:?}", out.values.as_f32().map(DenseND::to_vec));
    println!("NaN/Infinity indices: {:?}", out.indices.to_vec());

    let rows = Tensor::string(vec!["a", "b,c", "d", "a", "b", "c,d"], &[2, 3])?;
    let out = unique(&rows, Some(0))?;
    println!("comma rows kept apart: {} distinct of 2\n", out.num_unique());
    Ok(())
}

fn example_higher_rank() -> anyhow::Result<()> {
    println!("--- Example 3: Higher Rank ---");

    // [[1, 0, 0, 1],
    //  [1, 0, 0, 1],
    //  [2, 0, 0, 2]]
    let matrix = Tensor::int32(vec![1, 0, 0, 1, 1, 0, 0, 1, 2, 0, 0, 2], &[3, 4])?;
    let columns = unique(&matrix, Some(1))?;
    println!(
        "columns: shape {:?}, indices {:?}",
        columns.values.shape(),
        columns.indices.to_vec()
    );

    // [[[1, 0, 1]], [[1, 0, 1]]]
    let cube = Tensor::int32(vec![1, 0, 1, 1, 0, 1], &[2, 1, 3])?;
    let depth = unique(&cube, Some(2))?;
    println!(
        "depth slices: shape {:?}, indices {:?}\n",
        depth.values.shape(),
        depth.indices.to_vec()
    );
    Ok(())
}

fn example_round_trip() -> anyhow::Result<()> {
    println!("--- Example 4: Round Trip ---");

    let data: Vec<f64> = (0..24).map(|i| ((i / 4) % 3) as f64).collect();
    let x = DenseND::from_vec(data, &[6, 4])?;
    let out = x.unique_axis(0)?;
    println!("distinct rows:     {}", out.num_unique());
    println!("first occurrences: {:?}", out.first_occurrence);
    println!("counts:            {:?}", out.counts());

    let rebuilt = reconstruct(&out.values, &out.indices, 0)?;
    println!("reconstruction matches input: {}", rebuilt == x);

    match unique(&Tensor::from(x), Some(2)) {
        Err(UniqueError::InvalidAxis { axis, rank }) => {
            println!("axis {} rejected for rank {}", axis, rank)
        }
        other => println!("unexpected: {:?}", other.map(|r| r.num_unique())),
    }
    Ok(())
}
