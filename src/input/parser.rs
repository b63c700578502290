// Reference String Parser
//
// Turns user-entered text such as "7, 0, 1, 2" into pages and checks
// frame counts before anything reaches the simulator.

use log::warn;

use crate::common::types::Page;
use super::config::InputConfig;
use super::error::{InputError, Result};

/// Parse a separator-delimited list of page numbers.
///
/// Tokens are trimmed; an empty token between two separators is malformed.
pub fn parse_reference_string(text: &str, config: &InputConfig) -> Result<Vec<Page>> {
    if text.trim().is_empty() {
        warn!("Rejected empty reference string");
        return Err(InputError::EmptyReferenceString);
    }

    text.split(config.separator)
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            token.parse::<Page>().map_err(|_| {
                warn!("Rejected reference string token {:?}", token);
                InputError::MalformedToken {
                    position: i + 1,
                    token: token.to_string(),
                }
            })
        })
        .collect()
}

/// Check that `frames` lies within the configured range
pub fn validate_frame_count(frames: usize, config: &InputConfig) -> Result<usize> {
    if frames < config.min_frames || frames > config.max_frames {
        warn!("Rejected frame count {}", frames);
        return Err(InputError::FrameCountOutOfRange {
            value: frames,
            min: config.min_frames,
            max: config.max_frames,
        });
    }
    Ok(frames)
}

/// Pull `frames` into the configured range
pub fn clamp_frame_count(frames: usize, config: &InputConfig) -> usize {
    frames.clamp(config.min_frames, config.max_frames)
}
