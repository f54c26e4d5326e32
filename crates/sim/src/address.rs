use crate::typedef::{PageId, PAGE_SIZE};

/// A decoded logical address: the high bits select a page, the low 8 bits
/// an offset into it. Decoding never range-checks the page number; the page
/// table rejects pages outside its bounds when the address is translated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VirtualAddress {
    pub raw: u32,
    pub page: PageId,
    pub offset: usize,
}

impl VirtualAddress {
    pub fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            page: raw as usize / PAGE_SIZE,
            offset: raw as usize % PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let va = VirtualAddress::from_raw(0);
        assert_eq!((va.page, va.offset), (0, 0));

        let va = VirtualAddress::from_raw(256);
        assert_eq!((va.page, va.offset), (1, 0));

        let va = VirtualAddress::from_raw(16916);
        assert_eq!((va.page, va.offset), (66, 20));

        let va = VirtualAddress::from_raw(65535);
        assert_eq!((va.page, va.offset), (255, 255));
    }

    #[test]
    fn test_decode_does_not_bound_page() {
        // Addresses beyond 16 bits decode to pages >= 256; rejecting them is
        // the page table's job, not the decoder's.
        let va = VirtualAddress::from_raw(65536);
        assert_eq!((va.page, va.offset), (256, 0));
    }

    #[test]
    fn test_offset_always_within_page() {
        for raw in [0u32, 1, 255, 256, 511, 70000] {
            assert!(VirtualAddress::from_raw(raw).offset < PAGE_SIZE);
        }
    }
}
