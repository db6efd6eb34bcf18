//! Runs the benchmark executables end to end and checks their output format.

#![cfg(target_os = "linux")]

use std::process::{Command, Output};

fn run(executable: &str) -> Output {
    Command::new(executable)
        .output()
        .expect("benchmark executable must start")
}

fn samples(output: &Output) -> Vec<u64> {
    assert!(
        output.status.success(),
        "benchmark failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout.clone())
        .expect("samples are ASCII")
        .lines()
        .map(|line| line.parse().expect("every line is one unsigned decimal sample"))
        .collect()
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot start child processes.
fn fixed_duration_emits_one_sample_per_window() {
    let output = run(env!("CARGO_BIN_EXE_bench_baseline"));

    let samples = samples(&output);

    assert!(!samples.is_empty());
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot start child processes.
fn fixed_iterations_emits_single_total() {
    let output = run(env!("CARGO_BIN_EXE_bench_baseline_legacy"));

    assert_eq!(samples(&output).len(), 1);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot start child processes.
fn arithmetic_executables_emit_samples() {
    for executable in [
        env!("CARGO_BIN_EXE_bench_add"),
        env!("CARGO_BIN_EXE_bench_sub"),
        env!("CARGO_BIN_EXE_bench_mul"),
    ] {
        assert!(!samples(&run(executable)).is_empty(), "{executable}");
    }
}
