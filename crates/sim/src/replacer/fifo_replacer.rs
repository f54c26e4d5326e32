use crate::typedef::{FrameId, PageId};

use super::Replacer;

/// Round-robin replacement. Frames are filled in order and then reused in
/// the same order, regardless of how recently any of them was accessed.
pub struct FifoReplacer {
    frame_count: usize,
    next: FrameId,
}

impl FifoReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            next: 0,
        }
    }
}

impl Replacer for FifoReplacer {
    fn on_fault(&mut self, _page: PageId) -> FrameId {
        // While frames are still being filled the cursor coincides with the
        // next free slot, so one rotation rule covers both phases.
        let frame = self.next;
        self.next = (self.next + 1) % self.frame_count;
        frame
    }

    fn on_access(&mut self, _frame: FrameId) {
        // FIFO ignores access recency entirely.
    }
}
