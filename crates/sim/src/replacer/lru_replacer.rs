use crate::typedef::{FrameId, PageId};
use std::collections::VecDeque;

use super::Replacer;

/// Least-recently-used replacement. Keeps a recency queue of resident frame
/// ids with the most recently used at the tail; every translation that
/// touches a frame moves it to the tail, so eviction order reflects all
/// accesses, not just faults.
pub struct LruReplacer {
    frame_count: usize,
    filled: usize,
    recency: VecDeque<FrameId>,
}

impl LruReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            filled: 0,
            recency: VecDeque::with_capacity(frame_count),
        }
    }
}

impl Replacer for LruReplacer {
    fn on_fault(&mut self, _page: PageId) -> FrameId {
        let frame = if self.filled < self.frame_count {
            let frame = self.filled;
            self.filled += 1;
            frame
        } else {
            // The head of the queue is the least recently used frame.
            self.recency.pop_front().expect("recency queue empty with a full pool")
        };
        self.recency.push_back(frame);
        frame
    }

    fn on_access(&mut self, frame: FrameId) {
        if let Some(pos) = self.recency.iter().position(|&f| f == frame) {
            self.recency.remove(pos);
        }
        self.recency.push_back(frame);
    }
}
