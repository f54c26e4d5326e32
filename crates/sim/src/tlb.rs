use crate::typedef::{FrameId, PageId, TLB_SIZE};

struct TlbEntry {
    page: PageId,
    frame: FrameId,
}

/// A bounded cache of page-to-frame mappings, kept in insertion order and
/// consulted before the page table. Capacity evictions are strict FIFO;
/// lookups never reorder entries (access recency is the replacement
/// policy's concern, not the TLB's).
pub struct Tlb {
    entries: Vec<TlbEntry>,
}

impl Tlb {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(TLB_SIZE),
        }
    }

    /// Linear scan by page number. No reordering on a hit.
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .map(|entry| entry.frame)
    }

    /// Inserts or refreshes a mapping, returning the page number the caller
    /// must invalidate in the page table, if any.
    ///
    /// One ordered scan with two match keys, first hit wins:
    /// - same page: refresh the frame in place, nothing to invalidate;
    /// - same frame: the replacement policy just gave this frame to a new
    ///   page, so rewrite the stale entry's page in place (its list position
    ///   is kept) and hand back the old page. Invalidating that page in the
    ///   page table is what restores the one-valid-owner-per-frame invariant
    ///   after a frame is reused.
    ///
    /// With no match, a full cache evicts the entry at position 0 and the
    /// new mapping is appended. A plain capacity eviction signals nothing:
    /// the evicted page is still resident, only no longer cached here.
    pub fn insert(&mut self, page: PageId, frame: FrameId) -> Option<PageId> {
        for entry in self.entries.iter_mut() {
            if entry.page == page {
                entry.frame = frame;
                return None;
            }
            if entry.frame == frame {
                let previous = entry.page;
                entry.page = page;
                return Some(previous);
            }
        }

        if self.entries.len() == TLB_SIZE {
            self.entries.remove(0);
        }
        self.entries.push(TlbEntry { page, frame });
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn pages(&self) -> Vec<PageId> {
        self.entries.iter().map(|entry| entry.page).collect()
    }
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}
