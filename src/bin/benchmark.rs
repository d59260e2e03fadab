//! Generation timing: sparse candidate-set evaluation against the dense grid

use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng};
use toroidal_life::{
    Algorithm, CellCoord, GameOfLife, GridGeometry, LiveCells, application::NoopObserver,
    domain::DenseGrid,
};

const BLOCK: i32 = 10;

fn soup(cells: usize, density: f64, seed: u64) -> LiveCells {
    let geometry = GridGeometry::new(cells as i32 * BLOCK, cells as i32 * BLOCK, BLOCK);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut coords = Vec::new();
    for row in 0..cells {
        for col in 0..cells {
            if rng.random_bool(density) {
                coords.push(CellCoord::new(col as i32 * BLOCK, row as i32 * BLOCK));
            }
        }
    }
    LiveCells::from_coords(geometry, coords)
}

fn benchmark_sparse(live: &LiveCells, algorithm: Algorithm, iterations: u32) -> f64 {
    let mut game = GameOfLife::with_seed(live.geometry(), NoopObserver, 0);
    game.set_algorithm(algorithm);
    for coord in live.iter() {
        game.add_cell(coord);
    }

    let start = Instant::now();
    for _ in 0..iterations {
        game.advance_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_dense(live: &LiveCells, iterations: u32) -> f64 {
    let mut grid = DenseGrid::from_live_cells(live);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Generation Benchmark ===\n");

    let sizes = [100, 250, 500, 1000];
    let densities = [0.01, 0.1, 0.3];
    let iterations = 20;

    println!(
        "{:>10} {:>8} {:>12} {:>12} {:>12}",
        "Size", "Density", "Sparse", "Sparse+Par", "Dense+Par"
    );
    println!("{:-<60}", "");

    for size in sizes {
        for density in densities {
            let live = soup(size, density, 42);
            let sparse_ms = benchmark_sparse(&live, Algorithm::Sparse, iterations);
            let parallel_ms = benchmark_sparse(&live, Algorithm::SparseParallel, iterations);
            let dense_ms = benchmark_dense(&live, iterations);

            println!(
                "{:>10} {:>7.0}% {:>12.2} {:>12.2} {:>12.2}",
                format!("{}x{}", size, size),
                density * 100.0,
                sparse_ms,
                parallel_ms,
                dense_ms
            );
        }
    }
}
