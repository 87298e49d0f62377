//! Grammar validation helpers for media type tokens.
//!
//! Based on the RFC 6838 section 4.2 ABNF:
//!
//! ```text
//! restricted-name = restricted-name-first *126restricted-name-chars
//! restricted-name-first  = ALPHA / DIGIT
//! restricted-name-chars  = ALPHA / DIGIT / "!" / "#" /
//!                          "$" / "&" / "-" / "^" / "_"
//! restricted-name-chars =/ "." ; Characters before first dot always
//!                              ; specify a facet name
//! restricted-name-chars =/ "+" ; Characters after last plus always
//!                              ; specify a structured syntax suffix
//! ```
//!
//! The checks are `const fn` so that literal media types can be validated at
//! compile time with exactly the rules used at runtime.

use crate::ascii;
use crate::error::{ParsingError, Rule, Segment};

/// Maximum length of any single token.
pub const MAX_LENGTH: usize = 127;

/// Reports whether the byte is allowed in a 'restricted-name'.
///
/// restricted-name-chars := ALPHA / DIGIT / "!" / "#" / "$" / "&" / "-" / "^" / "_" / "." / "+"
pub const fn is_restricted_name_char(c: u8) -> bool {
    is_modified_restricted_name_char(c) || c == b'.' || c == b'+'
}

/// Reports whether the byte is allowed in a restricted name that may not carry
/// facet or suffix delimiters, i.e. 'restricted-name-chars' without `.` and `+`.
pub const fn is_modified_restricted_name_char(c: u8) -> bool {
    ascii::is_alphanumeric(c) || matches!(c, b'!' | b'#' | b'$' | b'&' | b'-' | b'^' | b'_')
}

/// Reports whether every byte is a 'restricted-name' character.
pub const fn is_restricted_name(s: &[u8]) -> bool {
    let mut i = 0;
    while i < s.len() {
        if !is_restricted_name_char(s[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Reports whether every byte is a modified 'restricted-name' character.
pub const fn is_modified_restricted_name(s: &[u8]) -> bool {
    let mut i = 0;
    while i < s.len() {
        if !is_modified_restricted_name_char(s[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Checks a 1..=127 byte restricted name: alphanumeric first, restricted-name
/// characters throughout.
const fn check_restricted_name(s: &[u8], segment: Segment) -> Result<(), ParsingError> {
    if s.is_empty() || s.len() > MAX_LENGTH {
        return Err(ParsingError::new(segment, Rule::Length { min: 1, max: MAX_LENGTH }));
    }
    if !ascii::is_alphanumeric(s[0]) {
        return Err(ParsingError::new(segment, Rule::FirstCharacter));
    }
    if !is_restricted_name(s) {
        return Err(ParsingError::new(segment, Rule::InvalidCharacters));
    }
    Ok(())
}

pub(crate) const fn check_type(s: &[u8]) -> Result<(), ParsingError> {
    check_restricted_name(s, Segment::Type)
}

pub(crate) const fn check_subtype(s: &[u8]) -> Result<(), ParsingError> {
    check_restricted_name(s, Segment::Subtype)
}

pub(crate) const fn check_parameter_name(s: &[u8]) -> Result<(), ParsingError> {
    check_restricted_name(s, Segment::ParameterName)
}

/// Empty is the standard tree; otherwise 2..=127 bytes ending in a single `.`.
pub(crate) const fn check_tree(s: &[u8]) -> Result<(), ParsingError> {
    const SEGMENT: Segment = Segment::Tree;

    if s.is_empty() {
        return Ok(());
    }
    if s.len() < 2 || s.len() > MAX_LENGTH {
        return Err(ParsingError::new(SEGMENT, Rule::Length { min: 2, max: MAX_LENGTH }));
    }
    if !ascii::is_alphanumeric(s[0]) {
        return Err(ParsingError::new(SEGMENT, Rule::FirstCharacter));
    }
    let (facet, last) = s.split_at(s.len() - 1);
    if last[0] != b'.' {
        return Err(ParsingError::new(SEGMENT, Rule::TrailingDot));
    }
    if !is_modified_restricted_name(facet) {
        return Err(ParsingError::new(SEGMENT, Rule::InvalidCharacters));
    }
    Ok(())
}

/// 2..=127 bytes: a structural `+`, then a modified restricted name.
pub(crate) const fn check_suffix(s: &[u8]) -> Result<(), ParsingError> {
    const SEGMENT: Segment = Segment::Suffix;

    if s.len() < 2 || s.len() > MAX_LENGTH {
        return Err(ParsingError::new(SEGMENT, Rule::Length { min: 2, max: MAX_LENGTH }));
    }
    if s[0] != b'+' {
        return Err(ParsingError::new(SEGMENT, Rule::LeadingPlus));
    }
    let name = s.split_at(1).1;
    if !ascii::is_alphanumeric(name[0]) {
        return Err(ParsingError::new(SEGMENT, Rule::SecondCharacter));
    }
    if !is_modified_restricted_name(name) {
        return Err(ParsingError::new(SEGMENT, Rule::InvalidCharacters));
    }
    Ok(())
}

/// 1..=127 bytes: either `"` 1*(any byte but `"`) `"`, or restricted-name
/// characters only.
pub(crate) const fn check_parameter_value(s: &[u8]) -> Result<(), ParsingError> {
    const SEGMENT: Segment = Segment::ParameterValue;

    if s.is_empty() || s.len() > MAX_LENGTH {
        return Err(ParsingError::new(SEGMENT, Rule::Length { min: 1, max: MAX_LENGTH }));
    }
    if s[0] != b'"' {
        if !is_restricted_name(s) {
            return Err(ParsingError::new(SEGMENT, Rule::InvalidCharacters));
        }
        return Ok(());
    }
    if s.len() == 1 || s[s.len() - 1] != b'"' {
        return Err(ParsingError::new(SEGMENT, Rule::MissingTrailingQuote));
    }
    if s.len() == 2 {
        return Err(ParsingError::new(SEGMENT, Rule::EmptyQuotedValue));
    }
    let mut i = 1;
    while i < s.len() - 1 {
        if s[i] == b'"' {
            return Err(ParsingError::new(SEGMENT, Rule::QuoteInQuotedValue));
        }
        i += 1;
    }
    Ok(())
}

/// Position of the first `needle` in `s`.
pub(crate) const fn find(s: &[u8], needle: u8) -> Option<usize> {
    let mut i = 0;
    while i < s.len() {
        if s[i] == needle {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Position of the last `needle` in `s`.
pub(crate) const fn rfind(s: &[u8], needle: u8) -> Option<usize> {
    let mut i = s.len();
    while i > 0 {
        i -= 1;
        if s[i] == needle {
            return Some(i);
        }
    }
    None
}

/// Lowercases an already validated, all-ASCII token.
pub(crate) fn fold_case(s: &[u8]) -> String {
    s.iter().map(|&c| char::from(ascii::to_lowercase(c))).collect()
}
