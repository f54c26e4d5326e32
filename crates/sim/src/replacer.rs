mod fifo_replacer;
mod lru_replacer;
mod opt_replacer;

pub use fifo_replacer::FifoReplacer;
pub use lru_replacer::LruReplacer;
pub use opt_replacer::OptReplacer;

use crate::typedef::{FrameId, PageId};
use crate::Result;
use memsim_error::errconfig;
use std::str::FromStr;

/// Chooses which physical frame holds each newly faulted page.
pub trait Replacer {
    /// Allocates a frame for `page`, evicting a resident page when every
    /// frame is occupied. Returns the frame that now holds `page`; the
    /// caller loads the page data into it.
    fn on_fault(&mut self, page: PageId) -> FrameId;

    /// Records a read of a resident frame. Called on every translation that
    /// touches a frame outside of fault allocation, so recency-based
    /// policies see TLB hits and page-table hits, not just faults.
    fn on_access(&mut self, frame: FrameId);
}

/// The replacement algorithm selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Fifo,
    Lru,
    Opt,
}

impl Algorithm {
    /// Builds the selected policy. OPT needs the full reference trace up
    /// front; the other two ignore it.
    pub fn build(self, frame_count: usize, trace: &[u32]) -> Box<dyn Replacer> {
        match self {
            Algorithm::Fifo => Box::new(FifoReplacer::new(frame_count)),
            Algorithm::Lru => Box::new(LruReplacer::new(frame_count)),
            Algorithm::Opt => Box::new(OptReplacer::new(frame_count, trace)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = memsim_error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FIFO" => Ok(Algorithm::Fifo),
            "LRU" => Ok(Algorithm::Lru),
            "OPT" => Ok(Algorithm::Opt),
            _ => errconfig!("unknown replacement algorithm: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("FIFO".parse::<Algorithm>().unwrap(), Algorithm::Fifo);
        assert_eq!("LRU".parse::<Algorithm>().unwrap(), Algorithm::Lru);
        assert_eq!("OPT".parse::<Algorithm>().unwrap(), Algorithm::Opt);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!("MRU".parse::<Algorithm>().is_err());
        assert!("fifo".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }
}
