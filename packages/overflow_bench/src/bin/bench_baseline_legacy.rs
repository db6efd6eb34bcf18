//! Measures `steps::baseline_step` over a fixed number of iterations and prints a single total.

use overflow_bench::{BenchConfig, main_fixed_iterations, steps};

fn main() {
    main_fixed_iterations(BenchConfig::DEFAULT, steps::baseline_step);
}
