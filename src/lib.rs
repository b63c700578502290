// Page Replacement Simulator
//
// FIFO, LRU and Optimal replacement over a reference string, with the
// input validation, statistics and step navigation used by the CLI.

pub mod common;
pub mod simulator;
pub mod input;
pub mod stats;
pub mod session;
pub mod render;

// Re-export key items for convenient access
pub use common::types::{Page, FrameId};
pub use simulator::{simulate, Policy, SimulationError, SimulationResult, StepRecord, FrameSet};
pub use input::{InputConfig, InputError, SimulationRequest};
pub use stats::{Statistics, Comparison};
pub use session::{SimulationSession, SessionError};
