//! Benchmark tests for critical operations
//!
//! Run with: cargo test --release -- --nocapture bench

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};

use movies_api::handler::{create_movie, list_movies};
use movies_api::store::{AppState, MovieStore};
use serde_json::{json, Value};

/// Benchmark helper to measure execution time
fn benchmark<F>(name: &str, iterations: usize, mut f: F)
where
    F: FnMut(),
{
    let start = Instant::now();

    for _ in 0..iterations {
        f();
    }

    let duration = start.elapsed();
    let avg_ms = duration.as_millis() as f64 / iterations as f64;
    let ops_per_sec = (iterations as f64 / duration.as_secs_f64()) as u64;

    println!("  {} ({} iterations)", name, iterations);
    println!("    Total time: {:?}", duration);
    println!("    Avg time: {:.3}ms", avg_ms);
    println!("    Throughput: {} ops/sec\n", ops_per_sec);
}

fn draft(i: usize) -> Value {
    let genre = if i % 2 == 0 {
        json!(["Action"])
    } else {
        json!(["Drama", "Sci-Fi"])
    };

    json!({
        "title": format!("Bench {}", i),
        "year": 2000 + (i % 25) as i64,
        "director": "Bench Director",
        "duration": 1 + (i % 10) as i64,
        "poster": "https://example.com/bench.jpg",
        "genre": genre
    })
}

#[tokio::test(flavor = "multi_thread")]
#[ignore] // Run explicitly with: cargo test bench --release -- --ignored --nocapture
async fn bench_create_movies() {
    println!("\n=== Benchmark: Create Movies ===\n");

    let state = AppState::new(MovieStore::default());

    let iterations = 1000;
    let mut i = 0;
    benchmark("Create", iterations, || {
        let state_clone = state.clone();
        let req = draft(i);
        i += 1;

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let _ = create_movie(State(state_clone), Ok(Json(req))).await;
            })
        });
    });
}

#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn bench_list_movies() {
    println!("\n=== Benchmark: List Movies ===\n");

    let state = AppState::new(MovieStore::default());

    println!("  Preparing: Creating 1000 movies...");
    for i in 0..1000 {
        let _ = create_movie(State(state.clone()), Ok(Json(draft(i)))).await;
    }
    println!("  Done!\n");

    let iterations = 1000;
    benchmark("List with genre filter", iterations, || {
        let state_clone = state.clone();
        let params = vec![("genre".to_string(), "sci-fi".to_string())];

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let _ = list_movies(State(state_clone), Ok(Query(params))).await;
            })
        });
    });

    benchmark("List without filter", iterations, || {
        let state_clone = state.clone();
        let params = Vec::new();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let _ = list_movies(State(state_clone), Ok(Query(params))).await;
            })
        });
    });
}

#[tokio::test]
#[ignore]
async fn bench_concurrent_operations() {
    println!("\n=== Benchmark: Concurrent Operations ===\n");

    let state = Arc::new(AppState::new(MovieStore::default()));

    let num_tasks = 100;
    let ops_per_task = 10;

    println!("  Running {} concurrent tasks with {} ops each...", num_tasks, ops_per_task);

    let start = Instant::now();

    let mut handles = vec![];

    for task_id in 0..num_tasks {
        let state_clone = state.clone();

        let handle = tokio::spawn(async move {
            for op_id in 0..ops_per_task {
                let req = draft(task_id * ops_per_task + op_id);
                let _ = create_movie(State(state_clone.as_ref().clone()), Ok(Json(req))).await;
                let params = vec![("genre".to_string(), "drama".to_string())];
                list_movies(State(state_clone.as_ref().clone()), Ok(Query(params))).await;
            }
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let duration = start.elapsed();
    let total_ops = num_tasks * ops_per_task * 2;
    let ops_per_sec = total_ops as f64 / duration.as_secs_f64();

    assert_eq!(state.movies.len().await, num_tasks * ops_per_task);

    println!("  Total operations: {}", total_ops);
    println!("  Total time: {:?}", duration);
    println!("  Throughput: {:.0} ops/sec\n", ops_per_sec);
}

#[test]
fn bench_summary() {
    println!("\n{}", "=".repeat(60));
    println!("Benchmark Test Suite");
    println!("{}", "=".repeat(60));
    println!("\nTo run benchmarks, use:");
    println!("  cargo test --release bench -- --ignored --nocapture");
    println!("\nAvailable benchmarks:");
    println!("  • bench_create_movies         - Validation + append performance");
    println!("  • bench_list_movies           - Listing with and without genre filter");
    println!("  • bench_concurrent_operations - Concurrent create/list access");
    println!("\n{}\n", "=".repeat(60));
}
