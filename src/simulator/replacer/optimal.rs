use log::trace;

use crate::common::types::{FrameId, Page};
use crate::simulator::frame_set::FrameSet;
use super::Replacer;

/// Belady's optimal replacement.
///
/// Stateless: every eviction rescans the upcoming requests, which is
/// quadratic in the worst case. Reference strings are short enough that
/// this is not worth indexing.
#[derive(Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        Self
    }

    /// Distance to the next request for `page`, `None` if it never recurs
    fn next_use(page: Page, upcoming: &[Page]) -> Option<usize> {
        upcoming.iter().position(|&p| p == page)
    }

    /// Slot whose page is needed furthest in the future; lowest slot wins ties
    fn victim(frames: &FrameSet, upcoming: &[Page]) -> FrameId {
        let mut victim: Option<(FrameId, usize)> = None;

        for (slot, resident) in frames.resident() {
            let distance = Self::next_use(resident, upcoming).unwrap_or(usize::MAX);
            if victim.map_or(true, |(_, furthest)| distance > furthest) {
                victim = Some((slot, distance));
            }
        }

        victim.map_or(0, |(slot, _)| slot)
    }
}

impl Replacer for OptimalReplacer {
    fn handle_fault(&mut self, frames: &mut FrameSet, page: Page, upcoming: &[Page]) -> FrameId {
        let slot = match frames.first_empty() {
            Some(slot) => slot,
            None => {
                let slot = Self::victim(frames, upcoming);
                trace!("Optimal evicting frame {} for page {}", slot, page);
                slot
            }
        };

        frames.replace(slot, page);
        slot
    }
}
