// Tue Feb 3 2026 - Alex

pub struct MathUtils;

impl MathUtils {
    pub fn hex_digits(value: u64) -> usize {
        if value == 0 {
            return 1;
        }
        let bits = 64 - value.leading_zeros() as usize;
        (bits + 3) / 4
    }

    pub fn dec_digits(value: u64) -> usize {
        if value == 0 {
            return 1;
        }
        let mut digits = 0;
        let mut v = value;
        while v > 0 {
            v /= 10;
            digits += 1;
        }
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digits() {
        assert_eq!(MathUtils::hex_digits(0), 1);
        assert_eq!(MathUtils::hex_digits(0xF), 1);
        assert_eq!(MathUtils::hex_digits(0x10), 2);
        assert_eq!(MathUtils::hex_digits(255), 2);
        assert_eq!(MathUtils::hex_digits(256), 3);
        assert_eq!(MathUtils::hex_digits(u64::MAX), 16);
    }

    #[test]
    fn test_dec_digits() {
        assert_eq!(MathUtils::dec_digits(0), 1);
        assert_eq!(MathUtils::dec_digits(9), 1);
        assert_eq!(MathUtils::dec_digits(10), 2);
        assert_eq!(MathUtils::dec_digits(999), 3);
        assert_eq!(MathUtils::dec_digits(1000), 4);
    }
}
