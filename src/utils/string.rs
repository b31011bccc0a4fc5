// Tue Feb 3 2026 - Alex

use std::borrow::Cow;

pub struct StringUtils;

impl StringUtils {
    pub fn truncate(s: &str, max_len: usize) -> Cow<'_, str> {
        if s.chars().count() <= max_len {
            Cow::Borrowed(s)
        } else if max_len >= 3 {
            let cut: String = s.chars().take(max_len - 3).collect();
            Cow::Owned(format!("{}...", cut))
        } else {
            Cow::Owned(s.chars().take(max_len).collect())
        }
    }

    pub fn center(s: &str, width: usize, pad_char: char) -> String {
        let len = s.chars().count();
        if len >= width {
            s.to_string()
        } else {
            let total_padding = width - len;
            let left_padding = total_padding / 2;
            let right_padding = total_padding - left_padding;
            let left = pad_char.to_string().repeat(left_padding);
            let right = pad_char.to_string().repeat(right_padding);
            format!("{}{}{}", left, s, right)
        }
    }

    pub fn max_len<'a, I>(items: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        items
            .into_iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(StringUtils::truncate("hello", 10), "hello");
        assert_eq!(StringUtils::truncate("hello world", 8), "hello...");
        assert_eq!(StringUtils::truncate("hello", 2), "he");
    }

    #[test]
    fn test_center() {
        assert_eq!(StringUtils::center("ab", 6, ' '), "  ab  ");
        assert_eq!(StringUtils::center("abc", 6, ' '), " abc  ");
        assert_eq!(StringUtils::center("abcdef", 4, ' '), "abcdef");
    }

    #[test]
    fn test_max_len() {
        assert_eq!(StringUtils::max_len(["a", "abc", "ab"]), 3);
        assert_eq!(StringUtils::max_len([] as [&str; 0]), 0);
    }
}
