use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simulator::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// Page replacement policies supported by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown policy '{0}' (expected fifo, lru or optimal)")]
pub struct UnknownPolicy(pub String);

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Build the per-run replacer state for this policy
    pub fn replacer(self, frame_count: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new(frame_count)),
            Policy::Lru => Box::new(LruReplacer::new(frame_count)),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Lru => "lru",
            Policy::Optimal => "optimal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Policy::Fifo => "First-In, First-Out (FIFO)",
            Policy::Lru => "Least Recently Used (LRU)",
            Policy::Optimal => "Optimal Algorithm",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Policy::Fifo => {
                "FIFO is the simplest page replacement algorithm. When a page needs to be \
                 replaced, the oldest page in memory (the one that was loaded first) is \
                 selected for replacement."
            }
            Policy::Lru => {
                "LRU replaces the page that has not been used for the longest period of time, \
                 assuming that pages used heavily in the recent past will be used again soon."
            }
            Policy::Optimal => {
                "The Optimal algorithm (Belady's algorithm) replaces the page that will not be \
                 used for the longest time in the future. It gives the lowest possible fault \
                 count but needs knowledge of future requests."
            }
        }
    }

    pub fn steps(self) -> &'static [&'static str] {
        match self {
            Policy::Fifo => &[
                "Keep a pointer to the slot that was filled longest ago.",
                "On a hit, nothing changes.",
                "On a fault, write the new page into the pointed-to slot.",
                "Advance the pointer to the next slot, wrapping around.",
            ],
            Policy::Lru => &[
                "Track resident pages from least to most recently used.",
                "On a hit, mark the page as most recently used.",
                "On a fault with a free slot, load the page into the first free slot.",
                "On a fault with no free slot, evict the least recently used page.",
            ],
            Policy::Optimal => &[
                "On a fault with a free slot, load the page into the first free slot.",
                "Otherwise, look ahead for the next use of every resident page.",
                "Evict the page whose next use is furthest away, or never comes.",
                "Ties go to the lowest-numbered slot.",
            ],
        }
    }

    pub fn advantages(self) -> &'static [&'static str] {
        match self {
            Policy::Fifo => &[
                "Trivial to implement",
                "Constant bookkeeping per request",
            ],
            Policy::Lru => &[
                "Exploits temporal locality",
                "Does not suffer from Belady's anomaly",
            ],
            Policy::Optimal => &[
                "Lowest achievable number of page faults",
                "Benchmark for judging other policies",
            ],
        }
    }

    pub fn disadvantages(self) -> &'static [&'static str] {
        match self {
            Policy::Fifo => &[
                "Ignores how often or how recently a page is used",
                "Suffers from Belady's anomaly",
            ],
            Policy::Lru => &[
                "Needs usage tracking on every request",
                "Expensive to implement exactly in hardware",
            ],
            Policy::Optimal => &[
                "Requires knowledge of future requests",
                "Cannot be implemented online",
            ],
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
            Policy::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
