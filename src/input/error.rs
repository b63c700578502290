use thiserror::Error;

use crate::simulator::SimulationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid reference string")]
    EmptyReferenceString,

    #[error("Invalid reference string: token {position} ('{token}') is not a page number")]
    MalformedToken { position: usize, token: String },

    #[error("Number of frames must be between {min} and {max}, got {value}")]
    FrameCountOutOfRange { value: usize, min: usize, max: usize },

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

/// Result type for input validation
pub type Result<T> = std::result::Result<T, InputError>;
