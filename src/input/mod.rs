pub mod config;
pub mod error;
pub mod parser;

pub use config::InputConfig;
pub use error::InputError;
pub use parser::{clamp_frame_count, parse_reference_string, validate_frame_count};

use crate::common::types::Page;
use crate::simulator::{simulate, Policy, SimulationResult};

/// Validated arguments for one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    pub policy: Policy,
    pub reference: Vec<Page>,
    pub frame_count: usize,
}

impl SimulationRequest {
    pub fn new(policy: Policy, reference: Vec<Page>, frame_count: usize) -> Self {
        Self {
            policy,
            reference,
            frame_count,
        }
    }

    /// Parse raw user input into a request
    pub fn parse(text: &str, frame_count: usize, policy: Policy, config: &InputConfig) -> error::Result<Self> {
        let reference = parse_reference_string(text, config)?;
        let frame_count = validate_frame_count(frame_count, config)?;
        Ok(Self::new(policy, reference, frame_count))
    }

    /// Same request under a different policy
    pub fn with_policy(&self, policy: Policy) -> Self {
        Self {
            policy,
            ..self.clone()
        }
    }

    pub fn run(&self) -> error::Result<SimulationResult> {
        Ok(simulate(self.policy, &self.reference, self.frame_count)?)
    }
}
