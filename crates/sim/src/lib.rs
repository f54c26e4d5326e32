mod address;
mod backing_store;
mod frame;
mod page_table;
mod replacer;
mod stats;
mod tlb;
mod trace;
mod translator;
mod typedef;

pub use address::VirtualAddress;
pub use backing_store::BackingStore;
pub use frame::FrameStore;
pub use page_table::{PageTable, PageTableEntry};
pub use replacer::{Algorithm, FifoReplacer, LruReplacer, OptReplacer, Replacer};
pub use stats::Stats;
pub use tlb::Tlb;
pub use trace::{parse_reference_trace, read_reference_trace};
pub use translator::{Translation, Translator};
pub use typedef::{FrameId, PageId, PAGE_SIZE, PAGE_TABLE_SIZE, TLB_SIZE};

pub type Result<T> = std::result::Result<T, memsim_error::Error>;
