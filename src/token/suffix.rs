use crate::error::Result;
use crate::grammar::{check_suffix, fold_case};

use super::impl_token;

/// Structured syntax suffix, e.g. `+json` or `+xml`.
///
/// The leading `+` is part of the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suffix(String);

impl Suffix {
    /// Validates a suffix, including its leading `+`.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_ascii(s.as_bytes())
    }

    pub(crate) fn from_ascii(s: &[u8]) -> Result<Self> {
        check_suffix(s)?;
        Ok(Suffix(fold_case(s)))
    }

    /// Folds case without checking; `s` must already have passed the checks.
    pub(crate) fn from_validated(s: &[u8]) -> Self {
        Suffix(fold_case(s))
    }

    /// The suffix name without its leading `+`.
    pub fn name(&self) -> &str {
        &self.0[1..]
    }
}

impl_token!(Suffix);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Rule, Segment};

    #[test]
    fn test_suffix_valid() {
        let suffix = Suffix::parse("+JSON").unwrap();
        assert_eq!(suffix.as_str(), "+json");
        assert_eq!(suffix.name(), "json");
        assert_eq!(Suffix::parse("+x").unwrap().as_str(), "+x");
    }

    #[test]
    fn test_suffix_invalid() {
        let err = Suffix::parse("+").unwrap_err();
        assert_eq!(err.segment(), Segment::Suffix);
        assert_eq!(err.rule(), Rule::Length { min: 2, max: 127 });

        assert_eq!(Suffix::parse("xml").unwrap_err().rule(), Rule::LeadingPlus);
        assert_eq!(Suffix::parse("+_xml").unwrap_err().rule(), Rule::SecondCharacter);
        assert_eq!(Suffix::parse("+x.ml").unwrap_err().rule(), Rule::InvalidCharacters);

        let long = format!("+{}", "a".repeat(127));
        assert_eq!(Suffix::parse(&long).unwrap_err().rule(), Rule::Length { min: 2, max: 127 });
        assert!(Suffix::parse(&long[..127]).is_ok());
    }
}
