//! Step timing, serial vs. rayon-parallel

use std::time::Instant;
use life_stamp::Grid;
use rand::{SeedableRng, rngs::StdRng};

fn random_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    match Grid::random(size, size, 0.3, &mut rng) {
        Ok(grid) => grid,
        Err(err) => panic!("benchmark grid {size}x{size}: {err}"),
    }
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for &(size, iterations) in &[(100, 200), (500, 40), (1000, 10), (2000, 4)] {
        let serial = benchmark_serial(size, iterations);
        let parallel = benchmark_parallel(size, iterations);
        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial,
            parallel,
            serial / parallel
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_parallel(2000, 4);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
