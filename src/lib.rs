// Tue Feb 3 2026 - Alex

#![allow(dead_code)]

pub mod config;
pub mod layout;
pub mod render;
pub mod utils;

pub use config::{BlockEntry, LayoutDocument, LayoutEntry};
pub use layout::{BlockStore, LayoutError, MemoryBlock, MemoryLayout};
pub use render::{AddressBase, BracketStyle, LayoutPrinter, RenderConfig, TableChars};
