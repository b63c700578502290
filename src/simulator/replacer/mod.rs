mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::types::{FrameId, Page};
use crate::simulator::frame_set::FrameSet;

/// Per-run replacement state driven by `simulate`.
///
/// The driver decides hit or fault by membership in the frame set and
/// then hands the request to the replacer.
pub trait Replacer {
    /// Record a request for a page that is already resident
    fn record_hit(&mut self, _page: Page) {}

    /// Place a non-resident `page` into `frames` and return the slot written.
    ///
    /// `upcoming` is the part of the reference string after the current
    /// request; only the optimal policy looks at it.
    fn handle_fault(&mut self, frames: &mut FrameSet, page: Page, upcoming: &[Page]) -> FrameId;
}
