// Thu Feb 5 2026 - Alex

use crate::layout::{MemoryBlock, MemoryLayout};
use crate::render::cell::{build_cell, merge_cell_line};
use crate::render::config::{AddressBase, RenderConfig, TableChars};
use crate::utils::{MathUtils, StringUtils};
use itertools::Itertools;

#[derive(Debug, Clone)]
struct Column {
    layout: Option<MemoryLayout>,
    header: String,
}

// Renders N layouts side by side, one column per layout, one pair of rows
// per distinct block start address. Absent layouts render as blank columns
// under their header.
#[derive(Debug, Clone)]
pub struct LayoutPrinter {
    columns: Vec<Column>,
    config: RenderConfig,
    chars: TableChars,
}

impl LayoutPrinter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            columns: Vec::new(),
            config,
            chars: TableChars::ascii(),
        }
    }

    pub fn with_chars(mut self, chars: TableChars) -> Self {
        self.chars = chars;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn add_layout(&mut self, layout: Option<MemoryLayout>, header: impl Into<String>) {
        self.columns.push(Column {
            layout,
            header: header.into(),
        });
    }

    // Inserts at an explicit column position; positions beyond the current
    // count are padded with blank columns first.
    pub fn insert_layout(
        &mut self,
        position: usize,
        layout: Option<MemoryLayout>,
        header: impl Into<String>,
    ) {
        while self.columns.len() < position {
            self.columns.push(Column {
                layout: None,
                header: String::new(),
            });
        }
        self.columns.insert(
            position.min(self.columns.len()),
            Column {
                layout,
                header: header.into(),
            },
        );
    }

    pub fn to_text(&self) -> String {
        // Row breakpoints: sorted union of block start addresses over all
        // present layouts.
        let breakpoints: Vec<u64> = self
            .columns
            .iter()
            .filter_map(|c| c.layout.as_ref())
            .flat_map(|l| l.blocks().map(|b| b.begin_address()))
            .sorted()
            .dedup()
            .collect();
        if breakpoints.is_empty() {
            return String::new();
        }
        let max_breakpoint = breakpoints.last().copied().unwrap_or(0);

        // All derived sizing is call-scoped; nothing is written back to the
        // configuration between invocations.
        let digits = if self.config.max_address_digits == 0 {
            MathUtils::hex_digits(max_breakpoint)
        } else {
            self.config.max_address_digits
        };

        let data_max = self
            .columns
            .iter()
            .filter_map(|c| c.layout.as_ref())
            .flat_map(|l| l.blocks())
            .map(|b| self.format_label(b, digits).chars().count())
            .max()
            .unwrap_or(0);
        let header_max = StringUtils::max_len(self.columns.iter().map(|c| c.header.as_str()));
        let content_width = data_max.max(header_max).max(self.config.cell_min_length);
        let mut inner_width = content_width + 2 * self.chars.text_padding;
        if self.config.cell_max_length > 0 {
            inner_width = inner_width.min(self.config.cell_max_length);
        }
        let filler_width = inner_width.saturating_sub(2 * self.chars.text_padding);
        let unused_text = self.chars.filler.to_string().repeat(filler_width);

        let region_lists: Vec<Vec<MemoryBlock>> = self
            .columns
            .iter()
            .map(|c| c.layout.as_ref().map(|l| l.to_list()).unwrap_or_default())
            .collect();
        let mut cursors = vec![0usize; self.columns.len()];

        let mut lines: Vec<String> = Vec::new();

        if !self.config.no_headers {
            let mut border = String::new();
            let mut body = String::new();
            for col in &self.columns {
                let cell = build_cell(&col.header, inner_width, true, true, &self.chars);
                merge_cell_line(&mut border, &cell.border, &self.chars);
                merge_cell_line(&mut body, &cell.body, &self.chars);
            }
            lines.push(border);
            lines.push(body);
        }

        let mut closing = String::new();

        for (index, &address) in breakpoints.iter().enumerate() {
            let is_first = index == 0;
            let is_last = index + 1 == breakpoints.len();
            let mut border = String::new();
            let mut body = String::new();

            for (col_index, col) in self.columns.iter().enumerate() {
                let regs = &region_lists[col_index];
                let cursor = cursors[col_index];
                let (in_range, just_finished, finished) = match &col.layout {
                    Some(layout) => (
                        layout.contains(address),
                        cursor == regs.len(),
                        cursor >= regs.len(),
                    ),
                    None => (false, false, false),
                };

                if !in_range || regs.is_empty() {
                    // Blank cell; a fresh top border closes the column's box
                    // when its blocks just ran out, and opens it on the
                    // first row.
                    let start = just_finished || is_first;
                    let cell = build_cell("", inner_width, start, false, &self.chars);
                    merge_cell_line(&mut border, &cell.border, &self.chars);
                    merge_cell_line(&mut body, &cell.body, &self.chars);

                    if is_last {
                        let close = build_cell("", inner_width, false, false, &self.chars);
                        merge_cell_line(&mut closing, &close.border, &self.chars);
                    }
                    if finished {
                        cursors[col_index] += 1;
                    }
                } else {
                    // An exhausted cursor keeps the last block as the data
                    // source until the layout range truly ends.
                    let item = if finished {
                        &regs[regs.len() - 1]
                    } else {
                        &regs[cursor]
                    };
                    let is_start = address == item.begin_address();
                    let text = if is_start {
                        cursors[col_index] += 1;
                        if item.is_unused() {
                            unused_text.clone()
                        } else {
                            self.format_label(item, digits)
                        }
                    } else {
                        // Continuation cells mirror the previous block. A
                        // breakpoint below the first block's start can only
                        // occur before fill_gaps; rendering such a layout is
                        // undefined and simply clamps to the first block.
                        let prev = &regs[cursor.saturating_sub(1).min(regs.len() - 1)];
                        if prev.is_unused() {
                            unused_text.clone()
                        } else {
                            String::new()
                        }
                    };

                    let cell = build_cell(&text, inner_width, is_start, true, &self.chars);
                    merge_cell_line(&mut border, &cell.border, &self.chars);
                    merge_cell_line(&mut body, &cell.body, &self.chars);

                    if is_last {
                        let close = build_cell("", inner_width, true, false, &self.chars);
                        merge_cell_line(&mut closing, &close.border, &self.chars);
                    }
                }
            }

            lines.push(border);
            lines.push(body);
        }

        lines.push(closing);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn format_label(&self, block: &MemoryBlock, digits: usize) -> String {
        let begin = block.begin_address();
        let end = block.end_address();
        let format_address = |address: u64| match self.config.address_base {
            AddressBase::Hex => format!("0x{:0width$X}", address, width = digits),
            AddressBase::Dec => format!("{}", address),
        };

        let range = if begin == end {
            format_address(begin)
        } else if self.config.range_starts_from_higher_address {
            format!(
                "{}{}{}",
                format_address(end),
                self.config.range_separator,
                format_address(begin)
            )
        } else {
            format!(
                "{}{}{}",
                format_address(begin),
                self.config.range_separator,
                format_address(end)
            )
        };

        if self.config.show_identifier {
            if self.config.show_address_range {
                format!(
                    "{}{}{}{}",
                    block.identifier(),
                    self.config.brackets.open(),
                    range,
                    self.config.brackets.close()
                )
            } else {
                block.identifier().to_string()
            }
        } else if self.config.show_address_range {
            range
        } else {
            String::new()
        }
    }
}

impl Default for LayoutPrinter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MemoryLayout;

    fn layout(begin: u64, size: u64, blocks: &[(u64, u64, &str)]) -> MemoryLayout {
        let mut ml = MemoryLayout::new(begin, size).unwrap();
        for &(b, s, id) in blocks {
            ml.append_block(MemoryBlock::new(b, s, id).unwrap()).unwrap();
        }
        ml.fill_gaps().unwrap();
        ml
    }

    #[test]
    fn test_empty_printer_renders_empty_string() {
        let printer = LayoutPrinter::new(RenderConfig::bytes());
        assert_eq!(printer.to_text(), "");

        let mut printer = LayoutPrinter::new(RenderConfig::bytes());
        printer.add_layout(None, "Only a header");
        assert_eq!(printer.to_text(), "");
    }

    #[test]
    fn test_single_layout_table() {
        let mut printer = LayoutPrinter::new(RenderConfig::bytes().with_min_length(12));
        printer.add_layout(Some(layout(0, 0x10, &[(0, 0x10, "A")])), "H");

        let expected = [
            "+--------------+",
            "|      H       |",
            "+--------------+",
            "|  A(0x0-0xF)  |",
            "+--------------+",
        ]
        .join("\n")
            + "\n";
        assert_eq!(printer.to_text(), expected);
    }

    #[test]
    fn test_two_layouts_of_different_sizes() {
        let reference = layout(0, 0x20, &[(0, 0x12, "DR1")]);
        let comp = layout(0, 0x10, &[(0, 0x10, "DR1")]);

        let mut printer = LayoutPrinter::new(RenderConfig::bytes().with_min_length(4));
        printer.add_layout(Some(reference), "Reference");
        printer.add_layout(Some(comp), "Comp");

        let blank = " ".repeat(17);
        let expected = [
            "+----------------+----------------+".to_string(),
            "|   Reference    |      Comp      |".to_string(),
            "+----------------+----------------+".to_string(),
            "| DR1(0x00-0x11) | DR1(0x00-0x0F) |".to_string(),
            "+----------------+----------------+".to_string(),
            format!("| XXXXXXXXXXXXXX |{}", blank),
            format!("+----------------+{}", blank),
        ]
        .join("\n")
            + "\n";
        assert_eq!(printer.to_text(), expected);
    }

    #[test]
    fn test_bits_preset_labels() {
        let mut printer = LayoutPrinter::new(RenderConfig::bits().with_min_length(4));
        printer.add_layout(Some(layout(0, 8, &[(0, 8, "FLAGS")])), "Reg");

        let expected = [
            "+------------+",
            "|    Reg     |",
            "+------------+",
            "| FLAGS[7:0] |",
            "+------------+",
        ]
        .join("\n")
            + "\n";
        assert_eq!(printer.to_text(), expected);
    }

    #[test]
    fn test_absent_layout_column() {
        let mut printer = LayoutPrinter::new(RenderConfig::bytes().with_min_length(4));
        printer.add_layout(Some(layout(0, 0x10, &[(0, 0x10, "A")])), "Col");
        printer.add_layout(None, "Missing");

        let blank = " ".repeat(13);
        let expected = [
            "+------------+------------+".to_string(),
            "|    Col     |  Missing   |".to_string(),
            "+------------+------------+".to_string(),
            format!("| A(0x0-0xF) |{}", blank),
            format!("+------------+{}", blank),
        ]
        .join("\n")
            + "\n";
        assert_eq!(printer.to_text(), expected);
    }

    #[test]
    fn test_insert_layout_pads_with_blank_columns() {
        let mut printer = LayoutPrinter::new(RenderConfig::bytes());
        printer.insert_layout(2, Some(layout(0, 0x10, &[(0, 0x10, "A")])), "Third");
        assert_eq!(printer.column_count(), 3);

        let text = printer.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        // Header border spans all three columns.
        assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
        // Data row: blank cells for the two padded columns, label in the third.
        assert!(lines[3].starts_with(' '));
        assert!(lines[3].contains("A("));
        // Closing border only under the real column.
        assert!(lines[4].starts_with(' ') && lines[4].ends_with('+'));
    }

    #[test]
    fn test_single_address_block_prints_one_address() {
        let mut printer = LayoutPrinter::new(RenderConfig::bytes().with_min_length(4));
        printer.add_layout(Some(layout(0, 1, &[(0, 1, "B")])), "H");

        let text = printer.to_text();
        assert!(text.contains("B(0x0)"));
        assert!(!text.contains("0x0-0x0"));
    }

    #[test]
    fn test_unused_rows_use_filler() {
        let mut printer = LayoutPrinter::new(RenderConfig::bytes().with_min_length(4));
        printer.add_layout(Some(layout(0, 0x20, &[(0, 0x10, "A")])), "H");

        let text = printer.to_text();
        assert!(text.contains('X'));
        // The gap block still draws its own top border.
        assert_eq!(text.lines().filter(|l| l.starts_with('+')).count(), 4);
    }

    #[test]
    fn test_cell_max_length_truncates() {
        let config = RenderConfig::bytes().with_min_length(4).with_max_length(10);
        let mut printer = LayoutPrinter::new(config);
        printer.add_layout(Some(layout(0, 0x20, &[(0, 0x12, "DR1")])), "H");

        let text = printer.to_text();
        assert!(text.contains("DR1(0x0..."));
        for line in text.lines() {
            assert!(line.chars().count() <= 12);
        }
    }

    #[test]
    fn test_no_headers() {
        let mut printer =
            LayoutPrinter::new(RenderConfig::bytes().with_min_length(4).with_no_headers(true));
        printer.add_layout(Some(layout(0, 0x10, &[(0, 0x10, "A")])), "H");

        let text = printer.to_text();
        // One breakpoint: border + body + closing border.
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains('H'));
    }

    #[test]
    fn test_fixed_address_digits() {
        let config = RenderConfig::bytes().with_min_length(4).with_address_digits(4);
        let mut printer = LayoutPrinter::new(config);
        printer.add_layout(Some(layout(0, 0x10, &[(0, 0x10, "A")])), "H");

        assert!(printer.to_text().contains("A(0x0000-0x000F)"));
    }

    #[test]
    fn test_to_text_is_repeatable() {
        // Derived widths must not leak between calls.
        let mut printer = LayoutPrinter::new(RenderConfig::bytes().with_min_length(4));
        printer.add_layout(Some(layout(0, 0x10, &[(0, 0x10, "A")])), "H");

        let first = printer.to_text();
        let second = printer.to_text();
        assert_eq!(first, second);
    }
}
