use thiserror::Error;

// The tictactoe engine is an external collaborator behind exactly two
// operations: one-time setup, then the performance-test routine. Stubs
// stand in for the real dynamic library in tests.
pub trait Engine {
    fn init(&mut self) -> Result<(), EngineError>;

    // Exhaustive game-tree walk to the given depth. The returned node count
    // is never validated or printed by the harness.
    fn perft(&mut self, depth: u32) -> Result<u64, EngineError>;
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine library \"{0}\" not found in any search location")]
    NotFound(String),

    #[error("failed to load engine library: {0}")]
    Load(#[from] libloading::Error),

    #[error("engine init failed with status {0}")]
    Init(i32),

    #[error("perft failed with status {0}")]
    Perft(i64),
}
