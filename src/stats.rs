// Simulation Statistics
//
// Aggregates step records into the counts, ratios and per-step summary
// rows shown after a run.

use std::fmt;
use serde::Serialize;

use crate::common::types::Page;
use crate::simulator::{simulate, FrameSet, Policy, SimulationError, SimulationResult};

/// Request, fault and hit counts of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Statistics {
    pub total_requests: usize,
    pub page_faults: usize,
    pub hits: usize,
}

impl Statistics {
    pub fn from_result(result: &SimulationResult) -> Self {
        let page_faults = result.fault_count();
        Self {
            total_requests: result.len(),
            page_faults,
            hits: result.len() - page_faults,
        }
    }

    /// Hits as a percentage of requests; 0.0 for an empty run
    pub fn hit_ratio(&self) -> f64 {
        Self::percent(self.hits, self.total_requests)
    }

    /// Faults as a percentage of requests; 0.0 for an empty run
    pub fn fault_ratio(&self) -> f64 {
        Self::percent(self.page_faults, self.total_requests)
    }

    fn percent(part: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        part as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requests, {} faults, {:.2}%",
            self.total_requests,
            self.page_faults,
            self.hit_ratio()
        )
    }
}

/// One line of the per-step summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// 1-based request number
    pub request: usize,
    pub page: Page,
    pub frames: FrameSet,
    pub fault: bool,
}

pub fn summary_rows(result: &SimulationResult) -> Vec<SummaryRow> {
    result
        .iter()
        .enumerate()
        .map(|(i, step)| SummaryRow {
            request: i + 1,
            page: step.page,
            frames: step.frames.clone(),
            fault: step.fault,
        })
        .collect()
}

/// Statistics for every policy over the same input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub frame_count: usize,
    pub entries: Vec<(Policy, Statistics)>,
}

impl Comparison {
    pub fn run(reference: &[Page], frame_count: usize) -> Result<Self, SimulationError> {
        let entries = Policy::ALL
            .iter()
            .map(|&policy| {
                simulate(policy, reference, frame_count)
                    .map(|result| (policy, Statistics::from_result(&result)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            frame_count,
            entries,
        })
    }

    pub fn get(&self, policy: Policy) -> Option<&Statistics> {
        self.entries
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, stats)| stats)
    }

    /// Policy with the fewest faults; earlier policies win ties
    pub fn best(&self) -> Option<(Policy, &Statistics)> {
        self.entries
            .iter()
            .fold(None, |best: Option<(Policy, &Statistics)>, (policy, stats)| match best {
                Some((_, b)) if b.page_faults <= stats.page_faults => best,
                _ => Some((*policy, stats)),
            })
    }
}
