use crate::engine::{Engine, EngineError};
use crate::perf_counter::PerfCounter;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

// Fixed benchmark protocol: one perft call at depth 8. The reported time
// is the cost of a single invocation, never an amortized average.
pub const PERFT_DEPTH: u32 = 8;
pub const RUN_COUNT: usize = 1;

pub struct Benchmark<E> {
    engine: E,
}

pub struct Measurement {
    pub elapsed: Duration,
    pub cycles: Option<u64>,
    pub nodes: u64,
}

impl<E: Engine> Benchmark<E> {
    pub fn new(engine: E) -> Self {
        Benchmark { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn run(&mut self) -> Result<Measurement, EngineError> {
        // One-time engine setup stays outside the timed region; only the
        // perft call itself is measured.
        self.engine.init()?;

        let mut perf_counter = PerfCounter::new();

        // Start both timing methods
        perf_counter.start();
        let start = Instant::now();

        let mut nodes = 0;
        for _ in 0..RUN_COUNT {
            nodes = self.engine.perft(PERFT_DEPTH)?;
        }

        // Stop timing and read the counter
        let elapsed = start.elapsed();
        let cycles = perf_counter.finish();

        debug!(nodes, ?cycles, "perft finished");

        Ok(Measurement {
            elapsed,
            cycles,
            nodes,
        })
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time taken: {:.4}s", self.elapsed.as_secs_f64())
    }
}
