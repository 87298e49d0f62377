//! Top-level type.

use crate::error::Result;
use crate::grammar::{check_type, fold_case};

use super::impl_token;

/// Media type top-level type, e.g. `application` or `text`.
///
/// 1 to 127 restricted-name characters starting with an alphanumeric,
/// stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type(String);

impl Type {
    /// Validates a top-level type.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc6838::Type;
    ///
    /// let t = Type::parse("Application").unwrap();
    /// assert_eq!(t.as_str(), "application");
    /// assert!(Type::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_ascii(s.as_bytes())
    }

    pub(crate) fn from_ascii(s: &[u8]) -> Result<Self> {
        check_type(s)?;
        Ok(Type(fold_case(s)))
    }

    /// Folds case without checking; `s` must already have passed the checks.
    pub(crate) fn from_validated(s: &[u8]) -> Self {
        Type(fold_case(s))
    }
}

impl_token!(Type);
