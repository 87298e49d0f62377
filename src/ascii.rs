//! ASCII character classification.
//!
//! Every predicate is total over `u8`; bytes above 127 never match.

/// Reports whether the byte is a digit `[0-9]`.
pub const fn is_digit(c: u8) -> bool {
    c >= b'0' && c <= b'9'
}

/// Reports whether the byte is a lowercase letter `[a-z]`.
pub const fn is_lowercase(c: u8) -> bool {
    c >= b'a' && c <= b'z'
}

/// Reports whether the byte is an uppercase letter `[A-Z]`.
pub const fn is_uppercase(c: u8) -> bool {
    c >= b'A' && c <= b'Z'
}

/// Reports whether the byte is a letter `[a-zA-Z]`.
pub const fn is_alphabetic(c: u8) -> bool {
    is_lowercase(c) || is_uppercase(c)
}

/// Reports whether the byte is a letter or digit `[a-zA-Z0-9]`.
pub const fn is_alphanumeric(c: u8) -> bool {
    is_alphabetic(c) || is_digit(c)
}

/// Reports whether the byte is a hexadecimal digit `[0-9a-fA-F]`.
pub const fn is_hexadecimal(c: u8) -> bool {
    is_digit(c) || (c >= b'a' && c <= b'f') || (c >= b'A' && c <= b'F')
}

/// Reports whether the byte is a control character (0-31 and DEL).
pub const fn is_control(c: u8) -> bool {
    c <= 31 || c == 127
}

/// Reports whether the byte is printable, space included.
pub const fn is_printable(c: u8) -> bool {
    c >= 32 && c <= 126
}

/// Reports whether the byte is printable and not a space.
pub const fn is_graphical(c: u8) -> bool {
    is_printable(c) && c != b' '
}

/// Reports whether the byte is punctuation: graphical but not alphanumeric.
pub const fn is_punctuation(c: u8) -> bool {
    is_graphical(c) && !is_alphanumeric(c)
}

/// Reports whether the byte is a space or horizontal tab.
pub const fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Reports whether the byte is whitespace: space, tab, LF, VT, FF or CR.
pub const fn is_space(c: u8) -> bool {
    (c >= 9 && c <= 13) || c == b' '
}

/// Converts `[A-Z]` to lowercase, leaving every other byte unchanged.
pub const fn to_lowercase(c: u8) -> u8 {
    if is_uppercase(c) {
        c + 32
    } else {
        c
    }
}

/// Converts `[a-z]` to uppercase, leaving every other byte unchanged.
pub const fn to_uppercase(c: u8) -> u8 {
    if is_lowercase(c) {
        c - 32
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric(b'a'));
        assert!(is_alphanumeric(b'Z'));
        assert!(is_alphanumeric(b'0'));
        assert!(is_alphanumeric(b'9'));

        assert!(!is_alphanumeric(b'-'));
        assert!(!is_alphanumeric(b'@'));
        assert!(!is_alphanumeric(b'['));
        assert!(!is_alphanumeric(b'`'));
        assert!(!is_alphanumeric(b'{'));
    }

    #[test]
    fn test_hexadecimal() {
        assert!(is_hexadecimal(b'0'));
        assert!(is_hexadecimal(b'f'));
        assert!(is_hexadecimal(b'F'));

        assert!(!is_hexadecimal(b'g'));
        assert!(!is_hexadecimal(b'G'));
    }

    #[test]
    fn test_control_and_printable() {
        assert!(is_control(0));
        assert!(is_control(b'\t'));
        assert!(is_control(31));
        assert!(is_control(127));
        assert!(!is_control(b' '));

        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(!is_printable(127));
        assert!(!is_graphical(b' '));
        assert!(is_graphical(b'!'));
    }

    #[test]
    fn test_punctuation() {
        assert!(is_punctuation(b'!'));
        assert!(is_punctuation(b'+'));
        assert!(is_punctuation(b'~'));
        assert!(!is_punctuation(b'a'));
        assert!(!is_punctuation(b' '));
    }

    #[test]
    fn test_space() {
        assert!(is_space(b' '));
        assert!(is_space(b'\n'));
        assert!(is_space(b'\r'));
        assert!(is_blank(b'\t'));
        assert!(!is_blank(b'\n'));
        assert!(!is_space(b'a'));
    }

    #[test]
    fn test_high_bytes_never_match() {
        for c in 128..=255u8 {
            assert!(!is_alphanumeric(c));
            assert!(!is_hexadecimal(c));
            assert!(!is_control(c));
            assert!(!is_printable(c));
            assert!(!is_punctuation(c));
            assert!(!is_space(c));
            assert_eq!(to_lowercase(c), c);
        }
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_lowercase(b'A'), b'a');
        assert_eq!(to_lowercase(b'Z'), b'z');
        assert_eq!(to_lowercase(b'a'), b'a');
        assert_eq!(to_lowercase(b'+'), b'+');
        assert_eq!(to_uppercase(b'q'), b'Q');
        assert_eq!(to_uppercase(b'@'), b'@');
    }
}
