//! Samples the cycles spent in `steps::add_step` for one second, one line per window.

use overflow_bench::{BenchConfig, main_fixed_duration, steps};

fn main() {
    main_fixed_duration(BenchConfig::DEFAULT, steps::add_step);
}
