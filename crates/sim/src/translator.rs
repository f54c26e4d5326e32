use crate::address::VirtualAddress;
use crate::backing_store::BackingStore;
use crate::frame::FrameStore;
use crate::page_table::PageTable;
use crate::replacer::Replacer;
use crate::stats::Stats;
use crate::tlb::Tlb;
use crate::typedef::{FrameId, PageId};
use crate::Result;
use bytes::Bytes;
use log::{debug, trace};
use std::fmt;

/// The outcome of translating one logical address: the signed byte read, the
/// frame it was read from, and a copy of that frame's full contents taken
/// before any later eviction can overwrite the slot.
pub struct Translation {
    pub address: u32,
    pub value: i8,
    pub frame: FrameId,
    pub frame_data: Bytes,
}

impl fmt::Display for Translation {
    /// One output line per trace entry: address, signed byte, frame, then
    /// the frame as uppercase hex, two digits per byte, no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, ", self.address, self.value, self.frame)?;
        for byte in &self.frame_data {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Drives one translation at a time through the TLB, the page table, and on
/// a fault the backing store plus the replacement policy. Owns all of the
/// run's mutable state; the trace is processed strictly in order and that
/// order is load-bearing for every policy's bookkeeping.
pub struct Translator {
    tlb: Tlb,
    page_table: PageTable,
    frames: FrameStore,
    replacer: Box<dyn Replacer>,
    backing_store: BackingStore,
    stats: Stats,
}

impl Translator {
    pub fn new(
        frame_count: usize,
        replacer: Box<dyn Replacer>,
        backing_store: BackingStore,
    ) -> Self {
        Self {
            tlb: Tlb::new(),
            page_table: PageTable::new(),
            frames: FrameStore::new(frame_count),
            replacer,
            backing_store,
            stats: Stats::default(),
        }
    }

    pub fn translate(&mut self, address: u32) -> Result<Translation> {
        let va = VirtualAddress::from_raw(address);

        let frame = if let Some(frame) = self.tlb.find(va.page) {
            self.stats.tlb_hits += 1;
            trace!("tlb hit: page {} -> frame {}", va.page, frame);
            self.replacer.on_access(frame);
            frame
        } else {
            self.stats.tlb_misses += 1;
            let entry = *self.page_table.entry(va.page)?;
            if entry.is_valid() {
                let frame = entry.frame();
                trace!("page table hit: page {} -> frame {}", va.page, frame);
                self.replacer.on_access(frame);
                // A mapping the page table just confirmed valid cannot alias
                // a stale frame binding, so the invalidation signal is moot.
                let _ = self.tlb.insert(va.page, frame);
                frame
            } else {
                self.resolve_fault(va.page)?
            }
        };

        self.stats.translations += 1;

        let frame_data = self.frames.snapshot(frame);
        let value = frame_data[va.offset] as i8;
        Ok(Translation {
            address,
            value,
            frame,
            frame_data,
        })
    }

    /// Loads the faulted page from the backing store into whichever frame
    /// the policy picks, then brings the TLB and page table back in step.
    fn resolve_fault(&mut self, page: PageId) -> Result<FrameId> {
        self.stats.page_faults += 1;

        let block = self.backing_store.page_block(page)?;
        let frame = self.replacer.on_fault(page);
        self.frames.load(frame, &block);
        debug!("page fault: page {} loaded into frame {}", page, frame);

        // If the policy reused a frame, the TLB hands back the evicted
        // owner's page so its now-stale mapping can be invalidated before
        // the new one is written.
        if let Some(previous) = self.tlb.insert(page, frame) {
            debug!("invalidating page {} (frame {} reassigned)", previous, frame);
            self.page_table.invalidate(previous);
        }
        self.page_table.set_mapping(page, frame);

        Ok(frame)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
