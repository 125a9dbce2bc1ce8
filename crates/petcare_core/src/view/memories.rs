//! Memories grid with a fixed number of slots.

use crate::model::memory::Memory;

pub const MEMORY_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorySlot<'a> {
    Filled(&'a Memory),
    /// First empty slot, carrying the upload button.
    Upload { enabled: bool },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoriesGrid<'a> {
    pub slots: [MemorySlot<'a>; MEMORY_SLOTS],
    /// "Upload disabled" callout, shown while there is nothing to display.
    pub show_upload_callout: bool,
}

impl<'a> MemoriesGrid<'a> {
    /// Fills slots in order; the first slot hosts the upload button when no
    /// memory occupies it.
    pub fn build(memories: &'a [Memory], upload_enabled: bool) -> Self {
        let slots = std::array::from_fn(|index| match memories.get(index) {
            Some(memory) => MemorySlot::Filled(memory),
            None if index == 0 => MemorySlot::Upload {
                enabled: upload_enabled,
            },
            None => MemorySlot::Empty,
        });
        Self {
            slots,
            show_upload_callout: memories.is_empty() && !upload_enabled,
        }
    }
}
