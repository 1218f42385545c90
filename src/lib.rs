pub mod benchmark;
pub mod engine;
pub mod native;
pub mod perf_counter;

// Re-export main types
pub use benchmark::{Benchmark, Measurement, PERFT_DEPTH, RUN_COUNT};
pub use engine::{Engine, EngineError};
pub use native::NativeEngine;
pub use perf_counter::PerfCounter;
