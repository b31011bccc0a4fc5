// Wed Feb 4 2026 - Alex

pub mod block;
pub mod error;
pub mod memory_layout;
pub mod store;

pub use block::MemoryBlock;
pub use error::LayoutError;
pub use memory_layout::MemoryLayout;
pub use store::BlockStore;
