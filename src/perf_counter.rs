use perf_event::events::Hardware;
use perf_event::{Builder, Counter};
use tracing::warn;

// CPU-cycle counter wrapped around the measured region, next to the wall
// clock. Opening the perf API can fail (permissions, kernels without
// perf_event), so the counter degrades to a no-op and the harness keeps
// the wall-clock measurement.
pub struct PerfCounter {
    counter: Option<Counter>,
}

impl PerfCounter {
    pub fn new() -> Self {
        let counter = match Builder::new().kind(Hardware::CPU_CYCLES).build() {
            Ok(counter) => Some(counter),
            Err(error) => {
                warn!("cycle counter unavailable ({error}), wall clock only");
                None
            }
        };
        PerfCounter { counter }
    }

    pub fn start(&mut self) {
        if let Some(counter) = self.counter.as_mut() {
            let _ = counter.reset();
            let _ = counter.enable();
        }
    }

    pub fn finish(&mut self) -> Option<u64> {
        let counter = self.counter.as_mut()?;
        let _ = counter.disable();
        match counter.read() {
            Ok(cycles) => Some(cycles),
            Err(error) => {
                warn!("failed to read cycle counter: {error}");
                None
            }
        }
    }
}
