use crate::typedef::{FrameId, PageId, PAGE_TABLE_SIZE};
use crate::Result;
use memsim_error::errrange;

const INVALID_FRAME_ID: FrameId = FrameId::MAX;

/// One page table slot. Entries start invalid with a sentinel frame id;
/// `invalidate` only clears the valid bit, so the frame id can go stale and
/// must never be read while the entry is invalid.
#[derive(Clone, Copy, Debug)]
pub struct PageTableEntry {
    valid: bool,
    frame: FrameId,
}

impl PageTableEntry {
    fn new() -> Self {
        Self {
            valid: false,
            frame: INVALID_FRAME_ID,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }
}

/// Fixed table of one entry per page number. The translator keeps the
/// invariant that at most one entry is valid for any occupied frame index:
/// whenever the replacement policy reuses a frame, the previous owner's
/// entry is invalidated before the new mapping is written.
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            entries: vec![PageTableEntry::new(); PAGE_TABLE_SIZE],
        }
    }

    pub fn entry(&self, page: PageId) -> Result<&PageTableEntry> {
        if page >= PAGE_TABLE_SIZE {
            return errrange!("page number {} outside the page table", page);
        }
        Ok(&self.entries[page])
    }

    /// Maps `page` to `frame` and marks it valid. Out-of-range pages are
    /// silently ignored.
    pub fn set_mapping(&mut self, page: PageId, frame: FrameId) {
        if let Some(entry) = self.entries.get_mut(page) {
            entry.valid = true;
            entry.frame = frame;
        }
    }

    /// Clears the valid bit, leaving the frame id stale until the page is
    /// mapped again. Out-of-range pages are silently ignored.
    pub fn invalidate(&mut self, page: PageId) {
        if let Some(entry) = self.entries.get_mut(page) {
            entry.valid = false;
        }
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
