use std::fmt;
use serde::{Deserialize, Serialize};

use crate::common::types::{FrameId, Page};

/// Fixed-size set of frame slots, each either holding a page or empty.
///
/// The number of slots is fixed at construction; replacers only ever
/// overwrite slots in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSet {
    slots: Vec<Option<Page>>,
}

impl FrameSet {
    /// Create a frame set with `frame_count` empty slots
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `page` currently occupies any slot
    pub fn contains(&self, page: Page) -> bool {
        self.position_of(page).is_some()
    }

    /// Slot index holding `page`, if resident
    pub fn position_of(&self, page: Page) -> Option<FrameId> {
        self.slots.iter().position(|slot| *slot == Some(page))
    }

    /// Lowest-indexed empty slot
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    pub fn get(&self, frame_id: FrameId) -> Option<Page> {
        self.slots.get(frame_id).copied().flatten()
    }

    /// Write `page` into `frame_id`, returning the page it displaced.
    ///
    /// Panics if `frame_id` is out of range; replacers only pass indices
    /// obtained from this frame set.
    pub fn replace(&mut self, frame_id: FrameId, page: Page) -> Option<Page> {
        self.slots[frame_id].replace(page)
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn slots(&self) -> &[Option<Page>] {
        &self.slots
    }

    /// Resident pages paired with their slot, in slot order
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, Page)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(frame_id, slot)| slot.map(|page| (frame_id, page)))
    }
}

impl fmt::Display for FrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
