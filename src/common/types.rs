/// Page identifier as it appears in a reference string
pub type Page = i64;

/// Index of a slot in the frame set
pub type FrameId = usize;

/// Default number of frames offered by the CLI
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Upper bound on frames accepted from user input
pub const MAX_FRAME_COUNT: usize = 10;
