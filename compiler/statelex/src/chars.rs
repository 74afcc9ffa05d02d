//! Character classes shared by grammars.

/// `\r` or `\n`.
#[inline]
pub fn is_end_of_line(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Letter, digit, or underscore.
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_numeric()
}

/// Unicode whitespace, including line breaks.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || is_end_of_line(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_line() {
        assert!(is_end_of_line('\n'));
        assert!(is_end_of_line('\r'));
        assert!(!is_end_of_line(' '));
    }

    #[test]
    fn alphanumeric_includes_underscore_and_unicode() {
        assert!(is_alphanumeric('_'));
        assert!(is_alphanumeric('a'));
        assert!(is_alphanumeric('7'));
        assert!(is_alphanumeric('é'));
        assert!(!is_alphanumeric('-'));
        assert!(!is_alphanumeric('['));
    }

    #[test]
    fn whitespace_covers_layout() {
        for c in [' ', '\t', '\n', '\r', '\u{a0}'] {
            assert!(is_whitespace(c), "{c:?}");
        }
        assert!(!is_whitespace('x'));
    }
}
