//! Error types for media type parsing.

use std::fmt;
use thiserror::Error;

/// The grammar element, or parsing stage, that rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Top-level type, e.g. `application`.
    Type,
    /// Registration tree, e.g. `vnd.`.
    Tree,
    /// Subtype, e.g. `json`.
    Subtype,
    /// Structured syntax suffix, e.g. `+xml`.
    Suffix,
    /// Parameter name, e.g. `charset`.
    ParameterName,
    /// Parameter value, e.g. `utf-8` or `"utf-8"`.
    ParameterValue,
    /// Splitting a full media type into its segments.
    Parsing,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Type => "top-level type",
            Segment::Tree => "tree",
            Segment::Subtype => "subtype",
            Segment::Suffix => "suffix",
            Segment::ParameterName => "parameter name",
            Segment::ParameterValue => "parameter value",
            Segment::Parsing => "parsing",
        })
    }
}

/// The grammar rule that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Empty or too long.
    Length { min: usize, max: usize },
    /// First character is not alphanumeric.
    FirstCharacter,
    /// First character of a suffix is not `+`.
    LeadingPlus,
    /// Character following the suffix `+` is not alphanumeric.
    SecondCharacter,
    /// Non-standard tree does not end in `.`.
    TrailingDot,
    /// Contains characters outside the allowed set.
    InvalidCharacters,
    /// A required delimiter is absent.
    MissingDelimiter(char),
    /// Nothing between `/` and `.`.
    MissingTree,
    /// Quoted string without its closing `"`.
    MissingTrailingQuote,
    /// Quoted string with nothing between the quotes.
    EmptyQuotedValue,
    /// Quoted string with a `"` between the quotes.
    QuoteInQuotedValue,
    /// Subtype with a `.` under the standard tree, which would read back as a tree.
    DotWithoutTree,
    /// Subtype with a `+` but no suffix, which would read back as a suffix.
    PlusWithoutSuffix,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Length { min, max } => {
                write!(f, "length required to be [{}..{}] characters", min, max)
            }
            Rule::FirstCharacter => f.write_str("first character required to be alphanumeric"),
            Rule::LeadingPlus => f.write_str("first character required to be '+'"),
            Rule::SecondCharacter => f.write_str("second character required to be alphanumeric"),
            Rule::TrailingDot => f.write_str("last character required to be '.'"),
            Rule::InvalidCharacters => f.write_str("containing non-valid characters"),
            Rule::MissingDelimiter('/') => f.write_str("missing delimiter '/' after type"),
            Rule::MissingDelimiter(c) => write!(f, "missing delimiter '{}'", c),
            Rule::MissingTree => f.write_str("missing tree between '/' and '.'"),
            Rule::MissingTrailingQuote => f.write_str("quoted string missing trailing '\"'"),
            Rule::EmptyQuotedValue => f.write_str("quoted string empty"),
            Rule::QuoteInQuotedValue => f.write_str("quoted string containing '\"'"),
            Rule::DotWithoutTree => f.write_str("'.' not allowed in standard tree"),
            Rule::PlusWithoutSuffix => f.write_str("'+' not allowed without suffix"),
        }
    }
}

/// Error returned when a media type, or one of its tokens, fails validation.
///
/// Carries which segment failed and which rule it broke. It is `Copy` and
/// never allocates, so rejecting untrusted input stays cheap.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("media type: {segment}: {rule}")]
pub struct ParsingError {
    segment: Segment,
    rule: Rule,
}

impl ParsingError {
    pub(crate) const fn new(segment: Segment, rule: Rule) -> Self {
        Self { segment, rule }
    }

    /// The segment that failed.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// The rule that was violated.
    pub fn rule(&self) -> Rule {
        self.rule
    }
}

/// Specialized Result type for media type operations.
pub type Result<T> = std::result::Result<T, ParsingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParsingError::new(Segment::Type, Rule::Length { min: 1, max: 127 });
        assert_eq!(
            err.to_string(),
            "media type: top-level type: length required to be [1..127] characters"
        );

        let err = ParsingError::new(Segment::Parsing, Rule::MissingDelimiter('/'));
        assert_eq!(err.to_string(), "media type: parsing: missing delimiter '/' after type");

        let err = ParsingError::new(Segment::ParameterName, Rule::MissingDelimiter('='));
        assert_eq!(err.to_string(), "media type: parameter name: missing delimiter '='");

        let err = ParsingError::new(Segment::Parsing, Rule::MissingTree);
        assert_eq!(err.to_string(), "media type: parsing: missing tree between '/' and '.'");

        let err = ParsingError::new(Segment::Subtype, Rule::DotWithoutTree);
        assert_eq!(err.to_string(), "media type: subtype: '.' not allowed in standard tree");

        let err = ParsingError::new(Segment::ParameterValue, Rule::EmptyQuotedValue);
        assert_eq!(err.to_string(), "media type: parameter value: quoted string empty");
    }

    #[test]
    fn test_error_accessors() {
        let err = ParsingError::new(Segment::Suffix, Rule::LeadingPlus);
        assert_eq!(err.segment(), Segment::Suffix);
        assert_eq!(err.rule(), Rule::LeadingPlus);
    }

    #[test]
    fn test_error_debug() {
        let err = ParsingError::new(Segment::Tree, Rule::TrailingDot);
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Tree"));
        assert!(debug_str.contains("TrailingDot"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(ParsingError::new(Segment::Subtype, Rule::FirstCharacter));
        assert!(err_result.is_err());
    }
}
