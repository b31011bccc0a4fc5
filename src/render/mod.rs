// Thu Feb 5 2026 - Alex

pub mod cell;
pub mod config;
pub mod printer;

pub use config::{AddressBase, BracketStyle, RenderConfig, TableChars};
pub use printer::LayoutPrinter;
