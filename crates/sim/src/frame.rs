use crate::typedef::{FrameId, PAGE_SIZE};
use bytes::Bytes;

/// A single frame of physical memory, exactly one page wide.
struct Frame {
    data: [u8; PAGE_SIZE],
}

impl Frame {
    fn new() -> Self {
        Self {
            data: [0; PAGE_SIZE],
        }
    }
}

/// Owns the physical memory arena: a fixed-length array of frames addressed
/// only by `FrameId`. Nothing else ever holds a reference to a frame, so
/// reuse by the replacement policy cannot alias.
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl FrameStore {
    pub fn new(frame_count: usize) -> Self {
        let mut frames = Vec::with_capacity(frame_count);
        frames.resize_with(frame_count, Frame::new);
        Self { frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Copies a page block into the given frame, overwriting its contents.
    pub fn load(&mut self, frame: FrameId, block: &[u8]) {
        if block.len() > PAGE_SIZE {
            panic!("page block does not fit in a frame");
        }
        self.frames[frame].data[..block.len()].copy_from_slice(block);
    }

    pub fn frame_data(&self, frame: FrameId) -> &[u8] {
        &self.frames[frame].data
    }

    /// Copies a frame's contents out, for recording in a translation result
    /// that outlives later overwrites of the slot.
    pub fn snapshot(&self, frame: FrameId) -> Bytes {
        Bytes::copy_from_slice(&self.frames[frame].data)
    }
}
