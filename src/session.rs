// Simulation Session
//
// Owns the result of the current run together with the step cursor used
// for navigation. Starting a new run replaces both.

use thiserror::Error;

use crate::input::{InputError, SimulationRequest};
use crate::simulator::{SimulationResult, StepRecord};
use crate::stats::Statistics;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Step {index} is out of range (run has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Input(#[from] InputError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// A finished run and the step currently on display
#[derive(Debug, Clone)]
pub struct SimulationSession {
    request: SimulationRequest,
    result: SimulationResult,
    index: usize,
}

impl SimulationSession {
    /// Run `request` and position the cursor on the first step
    pub fn start(request: SimulationRequest) -> Result<Self> {
        let result = request.run()?;
        Ok(Self {
            request,
            result,
            index: 0,
        })
    }

    /// Discard the current run and start `request` from step 0
    pub fn rerun(&mut self, request: SimulationRequest) -> Result<()> {
        *self = Self::start(request)?;
        Ok(())
    }

    pub fn request(&self) -> &SimulationRequest {
        &self.request
    }

    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_result(&self.result)
    }

    /// Step under the cursor; `None` only for an empty run
    pub fn current(&self) -> Option<&StepRecord> {
        self.result.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len()
    }

    /// Advance one step; returns false when already on the last step
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one step; returns false when already on the first step
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.len().saturating_sub(1);
    }

    pub fn goto(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(SessionError::StepOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.index = index;
        Ok(())
    }
}
