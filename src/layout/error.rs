// Wed Feb 4 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid block range: begin 0x{begin:X}, size {size}")]
    InvalidRange { begin: u64, size: u64 },
    #[error("Block [0x{block_begin:X}-0x{block_end:X}] is out of range [0x{layout_begin:X}-0x{layout_end:X}]")]
    OutOfBounds {
        block_begin: u64,
        block_end: u64,
        layout_begin: u64,
        layout_end: u64,
    },
    #[error("Block [0x{begin:X}-0x{end:X}] could not be appended to layout [0x{layout_begin:X}-0x{layout_end:X}]")]
    Overlap {
        begin: u64,
        end: u64,
        layout_begin: u64,
        layout_end: u64,
    },
    #[error("Cannot build a layout from an empty block list")]
    EmptyBlockList,
}
