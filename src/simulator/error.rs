use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulationError>;
