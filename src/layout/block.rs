// Wed Feb 4 2026 - Alex

use crate::layout::error::LayoutError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoryBlock {
    begin_address: u64,
    size: u64,
    end_address: u64,
    identifier: String,
    unused: bool,
}

impl MemoryBlock {
    pub fn new(
        begin_address: u64,
        size: u64,
        identifier: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        Self::build(begin_address, size, identifier.into(), false)
    }

    pub fn unused_block(begin_address: u64, size: u64) -> Result<Self, LayoutError> {
        Self::build(begin_address, size, String::new(), true)
    }

    pub fn with_unused(
        begin_address: u64,
        size: u64,
        identifier: impl Into<String>,
        unused: bool,
    ) -> Result<Self, LayoutError> {
        Self::build(begin_address, size, identifier.into(), unused)
    }

    fn build(
        begin_address: u64,
        size: u64,
        identifier: String,
        unused: bool,
    ) -> Result<Self, LayoutError> {
        if size == 0 {
            return Err(LayoutError::InvalidRange {
                begin: begin_address,
                size,
            });
        }
        let end_address = begin_address
            .checked_add(size - 1)
            .ok_or(LayoutError::InvalidRange {
                begin: begin_address,
                size,
            })?;
        Ok(Self {
            begin_address,
            size,
            end_address,
            identifier,
            unused,
        })
    }

    pub fn begin_address(&self) -> u64 {
        self.begin_address
    }

    pub fn end_address(&self) -> u64 {
        self.end_address
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_unused(&self) -> bool {
        self.unused
    }

    pub fn contains(&self, address: u64) -> bool {
        self.begin_address <= address && address <= self.end_address
    }

    pub fn contains_region(&self, other: &MemoryBlock) -> bool {
        other.begin_address >= self.begin_address && other.end_address <= self.end_address
    }

    pub fn overlaps(&self, other: &MemoryBlock) -> bool {
        self.begin_address <= other.end_address && other.begin_address <= self.end_address
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(0x{:X}-0x{:X})",
            self.identifier, self.begin_address, self.end_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_construction() {
        let block = MemoryBlock::new(0x10, 0x20, "DR1").unwrap();
        assert_eq!(block.begin_address(), 0x10);
        assert_eq!(block.size(), 0x20);
        assert_eq!(block.end_address(), 0x2F);
        assert_eq!(block.identifier(), "DR1");
        assert!(!block.is_unused());
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = MemoryBlock::new(0, 0, "A").unwrap_err();
        assert_eq!(err, LayoutError::InvalidRange { begin: 0, size: 0 });
    }

    #[test]
    fn test_end_overflow_rejected() {
        assert!(MemoryBlock::new(u64::MAX, 2, "A").is_err());
        assert!(MemoryBlock::new(u64::MAX, 1, "A").is_ok());
    }

    #[test]
    fn test_contains() {
        let block = MemoryBlock::new(4, 4, "A").unwrap();
        assert!(!block.contains(3));
        assert!(block.contains(4));
        assert!(block.contains(7));
        assert!(!block.contains(8));
    }

    #[test]
    fn test_contains_region() {
        let outer = MemoryBlock::new(0, 0x10, "O").unwrap();
        let inner = MemoryBlock::new(4, 4, "I").unwrap();
        let straddling = MemoryBlock::new(0xC, 8, "S").unwrap();
        assert!(outer.contains_region(&inner));
        assert!(!outer.contains_region(&straddling));
        assert!(!inner.contains_region(&outer));
        assert!(outer.contains_region(&outer));
    }

    #[test]
    fn test_equality_includes_unused_flag() {
        let used = MemoryBlock::with_unused(0, 8, "", false).unwrap();
        let unused = MemoryBlock::with_unused(0, 8, "", true).unwrap();
        assert_ne!(used, unused);
        assert_eq!(used, used.clone());
    }

    #[test]
    fn test_display() {
        let block = MemoryBlock::new(0, 0x12, "DR1").unwrap();
        assert_eq!(block.to_string(), "DR1(0x0-0x11)");
    }
}
