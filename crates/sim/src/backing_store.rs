use crate::typedef::{PageId, PAGE_SIZE};
use crate::Result;
use bytes::Bytes;
use memsim_error::{errrange, Error};
use std::path::Path;

/// Read-only access to the backing store, the on-disk image of every page of
/// the logical address space. The whole resource is read into memory once at
/// startup and never written back; page blocks are handed out as zero-copy
/// slices.
pub struct BackingStore {
    data: Bytes,
}

impl BackingStore {
    /// Loads the backing store from `path`. A read failure is fatal; the run
    /// does not start with a partially loaded store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| Error::ResourceLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self { data: Bytes::from(data) })
    }

    /// Wraps an in-memory image, primarily for tests.
    pub fn from_bytes(data: Bytes) -> Self {
        Self { data }
    }

    /// Returns the `PAGE_SIZE`-byte block backing `page`, or an error when
    /// the block lies outside the resource.
    pub fn page_block(&self, page: PageId) -> Result<Bytes> {
        let start = page * PAGE_SIZE;
        let end = start + PAGE_SIZE;
        if end > self.data.len() {
            return errrange!("page {} beyond the backing store", page);
        }
        Ok(self.data.slice(start..end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_pages(pages: usize) -> BackingStore {
        let mut data = vec![0u8; pages * PAGE_SIZE];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = (i / PAGE_SIZE) as u8;
        }
        BackingStore::from_bytes(Bytes::from(data))
    }

    #[test]
    fn test_page_block_contents() {
        let store = store_with_pages(4);
        let block = store.page_block(2).unwrap();
        assert_eq!(block.len(), PAGE_SIZE);
        assert!(block.iter().all(|&b| b == 2));
    }

    #[test]
    fn test_page_block_out_of_range() {
        let store = store_with_pages(4);
        assert!(store.page_block(4).is_err());
        assert!(store.page_block(1000).is_err());
    }

    #[test]
    fn test_short_resource_rejects_partial_block() {
        // One and a half pages: the second block would run past the end.
        let store = BackingStore::from_bytes(Bytes::from(vec![0u8; PAGE_SIZE * 3 / 2]));
        assert!(store.page_block(0).is_ok());
        assert!(store.page_block(1).is_err());
    }
}
