//! Command implementations

pub mod benchmark;
pub mod hint;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_targets};
pub use hint::{HintConfig, HintResult, run_hint};
pub use solve::{solve_word, solve_words};
