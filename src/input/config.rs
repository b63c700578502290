use crate::common::types::MAX_FRAME_COUNT;

/// Configuration for reading user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Smallest accepted frame count
    pub min_frames: usize,

    /// Largest accepted frame count
    pub max_frames: usize,

    /// Character separating pages in a reference string
    pub separator: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_frames: 1,
            max_frames: MAX_FRAME_COUNT,
            separator: ',',
        }
    }
}
