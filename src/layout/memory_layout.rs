// Wed Feb 4 2026 - Alex

use crate::layout::block::MemoryBlock;
use crate::layout::error::LayoutError;
use crate::layout::store::BlockStore;
use std::fmt;

// Bounded address range owning a sorted, non-overlapping block sequence.
// Bounds are fixed at construction; append all real blocks first, then
// fill_gaps and optionally merge_unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLayout {
    begin_address: u64,
    size: u64,
    end_address: u64,
    regions: BlockStore,
}

impl MemoryLayout {
    pub fn new(begin_address: u64, size: u64) -> Result<Self, LayoutError> {
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
            regions: BlockStore::new(),
        })
    }

    // Minimal bounding range over the input blocks. An empty input is an
    // error rather than a zero-sized layout.
    pub fn from_mem_blocks(blocks: Vec<MemoryBlock>) -> Result<Self, LayoutError> {
        if blocks.is_empty() {
            return Err(LayoutError::EmptyBlockList);
        }
        let min_begin = blocks
            .iter()
            .map(|b| b.begin_address())
            .min()
            .unwrap_or(0);
        let max_end = blocks.iter().map(|b| b.end_address()).max().unwrap_or(0);
        // A span of the whole u64 range has no representable size.
        let size = max_end
            .checked_sub(min_begin)
            .and_then(|span| span.checked_add(1))
            .ok_or(LayoutError::InvalidRange {
                begin: min_begin,
                size: u64::MAX,
            })?;
        let mut layout = Self::new(min_begin, size)?;
        for block in blocks {
            layout.append_block(block)?;
        }
        Ok(layout)
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

    pub fn contains(&self, address: u64) -> bool {
        self.begin_address <= address && address <= self.end_address
    }

    pub fn blocks(&self) -> impl Iterator<Item = &MemoryBlock> {
        self.regions.iter()
    }

    pub fn block_count(&self) -> usize {
        self.regions.count()
    }

    pub fn to_list(&self) -> Vec<MemoryBlock> {
        self.regions.to_list()
    }

    // Sorted insert. Strict policy: a block that fits no gap is rejected
    // with Overlap and the store is left untouched.
    pub fn append_block(&mut self, block: MemoryBlock) -> Result<(), LayoutError> {
        if block.begin_address() < self.begin_address || block.end_address() > self.end_address {
            return Err(LayoutError::OutOfBounds {
                block_begin: block.begin_address(),
                block_end: block.end_address(),
                layout_begin: self.begin_address,
                layout_end: self.end_address,
            });
        }

        let first = match self.regions.head() {
            Some(handle) => handle,
            None => {
                self.regions.append(block);
                return Ok(());
            }
        };

        let first_begin = match self.regions.get(first) {
            Some(b) => b.begin_address(),
            None => 0,
        };
        if block.end_address() < first_begin {
            self.regions.insert_before(first, block);
            return Ok(());
        }

        if let Some(tail) = self.regions.tail() {
            let tail_end = match self.regions.get(tail) {
                Some(b) => b.end_address(),
                None => 0,
            };
            if block.begin_address() > tail_end {
                self.regions.insert_after(tail, block);
                return Ok(());
            }
        }

        let overlap = LayoutError::Overlap {
            begin: block.begin_address(),
            end: block.end_address(),
            layout_begin: self.begin_address,
            layout_end: self.end_address,
        };

        if self.regions.count() == 1 {
            return Err(overlap);
        }

        let mut low = first;
        while let Some(high) = self.regions.next(low) {
            let low_end = match self.regions.get(low) {
                Some(b) => b.end_address(),
                None => break,
            };
            let high_begin = match self.regions.get(high) {
                Some(b) => b.begin_address(),
                None => break,
            };
            if block.begin_address() > low_end && block.end_address() < high_begin {
                self.regions.insert_after(low, block);
                return Ok(());
            }
            low = high;
        }

        Err(overlap)
    }

    // Synthesizes an unused block for every uncovered sub-range. Gaps are
    // recomputed from actual coverage, so a second call finds none and
    // leaves the layout unchanged.
    pub fn fill_gaps(&mut self) -> Result<(), LayoutError> {
        let mut gaps: Vec<(u64, u64)> = Vec::new();
        let mut free_address = self.begin_address;
        let mut covered_to_end = false;

        for block in self.regions.iter() {
            if block.begin_address() > free_address {
                gaps.push((free_address, block.begin_address() - free_address));
            }
            if block.end_address() >= self.end_address {
                covered_to_end = true;
                break;
            }
            free_address = block.end_address() + 1;
        }

        if !covered_to_end {
            gaps.push((free_address, self.end_address - free_address + 1));
        }

        for (begin, size) in gaps {
            self.append_block(MemoryBlock::unused_block(begin, size)?)?;
        }
        Ok(())
    }

    // Coalesces every run of consecutive unused blocks into one block
    // spanning the run, keeping the leftmost identifier. The scan resumes
    // at the merged block, so runs of arbitrary length collapse in one
    // O(n) pass.
    pub fn merge_unused(&mut self) -> Result<(), LayoutError> {
        let mut region = self.regions.head();
        let mut merge_base: Option<usize> = None;

        while let Some(handle) = region {
            let is_unused = match self.regions.get(handle) {
                Some(b) => b.is_unused(),
                None => break,
            };
            if !is_unused {
                merge_base = None;
                region = self.regions.next(handle);
                continue;
            }

            match merge_base {
                None => {
                    merge_base = Some(handle);
                    region = self.regions.next(handle);
                }
                Some(base) => {
                    let (base_begin, base_identifier) = match self.regions.get(base) {
                        Some(b) => (b.begin_address(), b.identifier().to_string()),
                        None => break,
                    };
                    let run_end = match self.regions.get(handle) {
                        Some(b) => b.end_address(),
                        None => break,
                    };
                    let merged = MemoryBlock::with_unused(
                        base_begin,
                        run_end - base_begin + 1,
                        base_identifier,
                        true,
                    )?;
                    self.regions.remove(handle);
                    self.regions.remove(base);
                    let merged_at = self.regions.insert_before(base, merged);
                    merge_base = None;
                    region = Some(merged_at);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for MemoryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MemoryLayout[0x{:X}-0x{:X}] ({} blocks)",
            self.begin_address,
            self.end_address,
            self.regions.count()
        )
    }
}
