//! Full-width to half-width folding for numeric input.

/// Folds a full-width digit (U+FF10..=U+FF19) to its ASCII counterpart.
pub fn fold_digit(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => {
            char::from_u32(c as u32 - 0xFF10 + u32::from(b'0')).unwrap_or(c)
        }
        _ => c,
    }
}

/// Folds full-width digits and the full-width sign, point and separator
/// characters that appear in numbers typed with an IME.
pub fn fold_numeric(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\u{FF0B}' => '+',
            '\u{FF0D}' | '\u{2212}' => '-',
            '\u{FF0E}' => '.',
            '\u{FF0C}' => ',',
            '\u{3000}' => ' ',
            other => fold_digit(other),
        })
        .collect()
}

/// ASCII digits of `value` after folding, every other character dropped.
pub fn ascii_digits(value: &str) -> String {
    value
        .chars()
        .map(fold_digit)
        .filter(char::is_ascii_digit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_full_width_digits() {
        assert_eq!(fold_digit('０'), '0');
        assert_eq!(fold_digit('９'), '9');
        assert_eq!(fold_digit('a'), 'a');
    }

    #[test]
    fn folds_numeric_punctuation() {
        assert_eq!(fold_numeric("－１２．５"), "-12.5");
        assert_eq!(fold_numeric("\u{3000}３"), " 3");
    }

    #[test]
    fn keeps_only_ascii_digits() {
        assert_eq!(ascii_digits("２０２５年07月１５日"), "20250715");
        assert_eq!(ascii_digits("no digits"), "");
    }
}
