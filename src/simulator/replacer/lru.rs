use linked_hash_map::LinkedHashMap;
use log::trace;

use crate::common::types::{FrameId, Page};
use crate::simulator::frame_set::FrameSet;
use super::Replacer;

/// Simple LRU (Least Recently Used) page replacement policy
///
/// The usage list maps each resident page to its slot, ordered from least
/// to most recently used. It always holds exactly the resident pages.
pub struct LruReplacer {
    usage: LinkedHashMap<Page, FrameId>,
    frame_count: usize,
}

impl LruReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            usage: LinkedHashMap::with_capacity(frame_count),
            frame_count,
        }
    }

    /// Victim selection: remove the least recently used page and its slot
    fn victim(&mut self) -> Option<(Page, FrameId)> {
        self.usage.pop_front()
    }

    /// Resident pages from least to most recently used
    pub fn usage_order(&self) -> Vec<Page> {
        self.usage.keys().copied().collect()
    }
}

impl Replacer for LruReplacer {
    fn record_hit(&mut self, page: Page) {
        // Move to the tail (most recently used)
        self.usage.get_refresh(&page);
    }

    fn handle_fault(&mut self, frames: &mut FrameSet, page: Page, _upcoming: &[Page]) -> FrameId {
        let slot = if self.usage.len() < self.frame_count {
            frames.first_empty()
        } else {
            self.victim().map(|(victim, slot)| {
                trace!("LRU evicting page {} from frame {}", victim, slot);
                slot
            })
        };
        let slot = slot.expect("usage list tracks every resident page");

        frames.replace(slot, page);
        self.usage.insert(page, slot);
        slot
    }
}
