// Replacement Simulator
//
// Runs one replacement policy over a reference string and records the
// frame layout after every request.

pub mod error;
pub mod frame_set;
pub mod policy;
pub mod replacer;
pub mod step;

pub use error::SimulationError;
pub use frame_set::FrameSet;
pub use policy::{Policy, UnknownPolicy};
pub use replacer::Replacer;
pub use step::{SimulationResult, StepRecord};

use log::{debug, info};

use crate::common::types::Page;

/// Simulate `policy` over `reference` with `frame_count` frames.
///
/// An empty reference string yields an empty result. The only rejected
/// input is a frame count of zero.
pub fn simulate(policy: Policy, reference: &[Page], frame_count: usize) -> error::Result<SimulationResult> {
    if frame_count == 0 {
        return Err(SimulationError::InvalidFrameCount(frame_count));
    }

    let mut frames = FrameSet::new(frame_count);
    let mut replacer = policy.replacer(frame_count);
    let mut steps = Vec::with_capacity(reference.len());

    for (i, &page) in reference.iter().enumerate() {
        let step = if frames.contains(page) {
            replacer.record_hit(page);
            StepRecord::hit(page, &frames)
        } else {
            let upcoming = &reference[i + 1..];
            let before = frames.clone();
            let slot = replacer.handle_fault(&mut frames, page, upcoming);
            StepRecord::fault(page, &frames, slot, before.get(slot))
        };

        debug!(
            "{} step {}: page {} {} -> {}",
            policy,
            i,
            page,
            if step.fault { "fault" } else { "hit" },
            step.frames
        );
        steps.push(step);
    }

    let result = SimulationResult {
        policy,
        frame_count,
        steps,
    };

    info!(
        "{} over {} requests with {} frames: {} faults",
        policy,
        result.len(),
        frame_count,
        result.fault_count()
    );

    Ok(result)
}
