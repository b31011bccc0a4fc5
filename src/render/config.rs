// Thu Feb 5 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressBase {
    Hex,
    Dec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketStyle {
    Parentheses,
    Square,
}

impl BracketStyle {
    pub fn open(&self) -> char {
        match self {
            BracketStyle::Parentheses => '(',
            BracketStyle::Square => '[',
        }
    }

    pub fn close(&self) -> char {
        match self {
            BracketStyle::Parentheses => ')',
            BracketStyle::Square => ']',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub show_identifier: bool,
    pub show_address_range: bool,
    pub range_starts_from_higher_address: bool,
    pub address_base: AddressBase,
    // 0 means auto-compute from the largest breakpoint address.
    pub max_address_digits: usize,
    pub range_separator: char,
    pub brackets: BracketStyle,
    pub no_headers: bool,
    pub cell_min_length: usize,
    // 0 means unlimited; otherwise the inner cell width is clamped and
    // overflowing text truncated.
    pub cell_max_length: usize,
}

impl RenderConfig {
    // Byte-address preset: hex addresses, low-to-high ranges in parentheses.
    pub fn bytes() -> Self {
        Self {
            show_identifier: true,
            show_address_range: true,
            range_starts_from_higher_address: false,
            address_base: AddressBase::Hex,
            max_address_digits: 0,
            range_separator: '-',
            brackets: BracketStyle::Parentheses,
            no_headers: false,
            cell_min_length: 20,
            cell_max_length: 45,
        }
    }

    // Bit-field preset: decimal positions, high-to-low ranges in square
    // brackets, as register diagrams are usually drawn.
    pub fn bits() -> Self {
        Self {
            show_identifier: true,
            show_address_range: true,
            range_starts_from_higher_address: true,
            address_base: AddressBase::Dec,
            max_address_digits: 3,
            range_separator: ':',
            brackets: BracketStyle::Square,
            no_headers: false,
            cell_min_length: 20,
            cell_max_length: 45,
        }
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.cell_min_length = min;
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.cell_max_length = max;
        self
    }

    pub fn with_no_headers(mut self, no_headers: bool) -> Self {
        self.no_headers = no_headers;
        self
    }

    pub fn with_address_digits(mut self, digits: usize) -> Self {
        self.max_address_digits = digits;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::bytes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableChars {
    pub horizontal: char,
    pub vertical: char,
    pub cross: char,
    pub filler: char,
    pub text_padding: usize,
}

impl TableChars {
    pub fn ascii() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            cross: '+',
            filler: 'X',
            text_padding: 1,
        }
    }
}

impl Default for TableChars {
    fn default() -> Self {
        Self::ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let bytes = RenderConfig::bytes();
        assert_eq!(bytes.address_base, AddressBase::Hex);
        assert_eq!(bytes.brackets, BracketStyle::Parentheses);
        assert_eq!(bytes.range_separator, '-');
        assert!(!bytes.range_starts_from_higher_address);
        assert_eq!(bytes.max_address_digits, 0);

        let bits = RenderConfig::bits();
        assert_eq!(bits.address_base, AddressBase::Dec);
        assert_eq!(bits.brackets, BracketStyle::Square);
        assert_eq!(bits.range_separator, ':');
        assert!(bits.range_starts_from_higher_address);
        assert_eq!(bits.max_address_digits, 3);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = RenderConfig::bits().with_min_length(8);
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
