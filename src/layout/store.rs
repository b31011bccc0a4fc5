// Wed Feb 4 2026 - Alex

use crate::layout::block::MemoryBlock;

// Ordered backing store for a layout's blocks. Handles are plain positions,
// valid until the next structural mutation; every consumer is a single
// forward pass, so positional handles are enough and no node links exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStore {
    items: Vec<MemoryBlock>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_list(items: Vec<MemoryBlock>) -> Self {
        Self { items }
    }

    pub fn head(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn tail(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn next(&self, handle: usize) -> Option<usize> {
        if handle + 1 < self.items.len() {
            Some(handle + 1)
        } else {
            None
        }
    }

    pub fn prev(&self, handle: usize) -> Option<usize> {
        if handle == 0 || handle > self.items.len() {
            None
        } else {
            Some(handle - 1)
        }
    }

    pub fn get(&self, handle: usize) -> Option<&MemoryBlock> {
        self.items.get(handle)
    }

    pub fn append(&mut self, block: MemoryBlock) -> usize {
        self.items.push(block);
        self.items.len() - 1
    }

    pub fn insert_before(&mut self, handle: usize, block: MemoryBlock) -> usize {
        let at = handle.min(self.items.len());
        self.items.insert(at, block);
        at
    }

    pub fn insert_after(&mut self, handle: usize, block: MemoryBlock) -> usize {
        let at = (handle + 1).min(self.items.len());
        self.items.insert(at, block);
        at
    }

    pub fn remove(&mut self, handle: usize) -> Option<MemoryBlock> {
        if handle < self.items.len() {
            Some(self.items.remove(handle))
        } else {
            None
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemoryBlock> {
        self.items.iter()
    }

    pub fn to_list(&self) -> Vec<MemoryBlock> {
        self.items.clone()
    }
}
