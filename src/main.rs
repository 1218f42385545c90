use anyhow::Context;
use perft::{Benchmark, NativeEngine};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but the timing line.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = NativeEngine::load().context("failed to load the tictactoe engine")?;
    debug!(path = %engine.path().display(), "engine loaded");

    let mut bench = Benchmark::new(engine);
    let measurement = bench.run().context("benchmark run failed")?;

    println!("{measurement}");
    Ok(())
}
