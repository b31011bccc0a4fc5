// Fri Feb 6 2026 - Alex

use crate::layout::{LayoutError, MemoryBlock, MemoryLayout};
use serde::{Deserialize, Serialize};

// JSON description of one or more layouts, as consumed by the CLI:
//
// {
//   "layouts": [
//     { "name": "Reference", "begin_address": 0, "size": 32,
//       "blocks": [ { "begin_address": 0, "size": 18, "identifier": "DR1" } ] }
//   ]
// }
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub layouts: Vec<LayoutEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub name: String,
    pub begin_address: u64,
    pub size: u64,
    #[serde(default)]
    pub blocks: Vec<BlockEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockEntry {
    pub begin_address: u64,
    pub size: u64,
    #[serde(default)]
    pub identifier: String,
}

impl LayoutEntry {
    pub fn build(&self) -> Result<MemoryLayout, LayoutError> {
        let mut layout = MemoryLayout::new(self.begin_address, self.size)?;
        for block in &self.blocks {
            layout.append_block(MemoryBlock::new(
                block.begin_address,
                block.size,
                block.identifier.clone(),
            )?)?;
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build() {
        let json = r#"{
            "layouts": [
                { "name": "Reference", "begin_address": 0, "size": 32,
                  "blocks": [ { "begin_address": 0, "size": 18, "identifier": "DR1" } ] },
                { "name": "Empty", "begin_address": 0, "size": 16 }
            ]
        }"#;
        let doc: LayoutDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.layouts.len(), 2);

        let layout = doc.layouts[0].build().unwrap();
        assert_eq!(layout.begin_address(), 0);
        assert_eq!(layout.end_address(), 31);
        assert_eq!(layout.block_count(), 1);
        assert_eq!(layout.to_list()[0].identifier(), "DR1");

        let empty = doc.layouts[1].build().unwrap();
        assert_eq!(empty.block_count(), 0);
    }

    #[test]
    fn test_build_rejects_bad_blocks() {
        let entry = LayoutEntry {
            name: "Bad".to_string(),
            begin_address: 0,
            size: 16,
            blocks: vec![BlockEntry {
                begin_address: 8,
                size: 16,
                identifier: "OOB".to_string(),
            }],
        };
        assert!(matches!(
            entry.build(),
            Err(LayoutError::OutOfBounds { .. })
        ));
    }
}
