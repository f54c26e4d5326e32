pub type PageId = usize;
pub type FrameId = usize;

/// Bytes per page, and per frame. Pages and frames are the same size.
pub const PAGE_SIZE: usize = 256;

/// Number of entries in the page table; logical addresses are 16 bits, so
/// the page number occupies the high 8 bits.
pub const PAGE_TABLE_SIZE: usize = 256;

/// Number of entries the TLB can hold at once.
pub const TLB_SIZE: usize = 5;
