// Thu Feb 5 2026 - Alex

use crate::render::config::TableChars;
use crate::utils::StringUtils;

// One table cell as a (border line, body line) pair. For continuation
// cells the border line repeats the body so the column reads as one tall
// box between block boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub border: String,
    pub body: String,
}

pub fn build_cell(
    text: &str,
    inner_width: usize,
    is_block_start: bool,
    is_data: bool,
    chars: &TableChars,
) -> Cell {
    let sep = if is_data { chars.vertical } else { ' ' };
    let truncated = StringUtils::truncate(text, inner_width);
    let body = format!(
        "{}{}{}",
        sep,
        StringUtils::center(&truncated, inner_width, ' '),
        sep
    );
    let border = if is_block_start {
        format!(
            "{}{}{}",
            chars.cross,
            chars.horizontal.to_string().repeat(inner_width),
            chars.cross
        )
    } else {
        body.clone()
    };
    Cell { border, body }
}

// Joins a cell piece onto an accumulated line. Adjacent cells share one
// border character: equal boundary characters collapse, a trailing space
// yields to whatever follows, and a trailing vertical yields to a cross.
// The elision is by character identity, not cell structure.
pub fn merge_cell_line(line: &mut String, piece: &str, chars: &TableChars) {
    if piece.is_empty() {
        return;
    }
    if line.is_empty() {
        line.push_str(piece);
        return;
    }
    let last = match line.chars().last() {
        Some(c) => c,
        None => return,
    };
    let mut piece_chars = piece.chars();
    let first = match piece_chars.next() {
        Some(c) => c,
        None => return,
    };
    let rest = piece_chars.as_str();

    if last == first {
        line.push_str(rest);
    } else if last == ' ' || (last == chars.vertical && first == chars.cross) {
        line.pop();
        line.push_str(piece);
    } else {
        line.push_str(rest);
    }
}
