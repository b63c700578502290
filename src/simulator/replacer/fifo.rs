use crate::common::types::{FrameId, Page};
use crate::simulator::frame_set::FrameSet;
use super::Replacer;

/// FIFO replacement using a circular write cursor.
///
/// The cursor advances on every fault, including while slots are still
/// empty, so warm-up fills follow arrival order.
pub struct FifoReplacer {
    next: FrameId,
    frame_count: usize,
}

impl FifoReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            next: 0,
            frame_count,
        }
    }
}

impl Replacer for FifoReplacer {
    fn handle_fault(&mut self, frames: &mut FrameSet, page: Page, _upcoming: &[Page]) -> FrameId {
        let slot = self.next;
        frames.replace(slot, page);
        self.next = (self.next + 1) % self.frame_count;
        slot
    }
}
