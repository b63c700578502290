use serde::{Deserialize, Serialize};

use crate::common::types::{FrameId, Page};
use crate::simulator::frame_set::FrameSet;
use crate::simulator::policy::Policy;

/// Snapshot of one request after the policy has handled it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Page requested at this step
    pub page: Page,

    /// True when the page was not resident before the request
    pub fault: bool,

    /// Frame layout after the request
    pub frames: FrameSet,

    /// Slot written on a fault
    pub slot: Option<FrameId>,

    /// Page displaced from `slot`, if it was occupied
    pub evicted: Option<Page>,
}

impl StepRecord {
    pub fn hit(page: Page, frames: &FrameSet) -> Self {
        Self {
            page,
            fault: false,
            frames: frames.clone(),
            slot: None,
            evicted: None,
        }
    }

    pub fn fault(page: Page, frames: &FrameSet, slot: FrameId, evicted: Option<Page>) -> Self {
        Self {
            page,
            fault: true,
            frames: frames.clone(),
            slot: Some(slot),
            evicted,
        }
    }

    pub fn is_hit(&self) -> bool {
        !self.fault
    }
}

/// Ordered step records of one run, one per reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub policy: Policy,
    pub frame_count: usize,
    pub steps: Vec<StepRecord>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }

    pub fn fault_count(&self) -> usize {
        self.steps.iter().filter(|step| step.fault).count()
    }

    pub fn hit_count(&self) -> usize {
        self.len() - self.fault_count()
    }

    /// Zero-based positions of the faulting requests
    pub fn fault_positions(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.fault)
            .map(|(i, _)| i)
            .collect()
    }

    /// Frame layout after the last request
    pub fn final_frames(&self) -> Option<&FrameSet> {
        self.steps.last().map(|step| &step.frames)
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
