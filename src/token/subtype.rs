use crate::error::Result;
use crate::grammar::{check_subtype, fold_case};

use super::impl_token;

/// Media type subtype, e.g. `json` or `api+json`.
///
/// Same grammar as [`Type`](crate::Type). A subtype may itself contain `.`
/// and `+`; the parser only treats the last `+` as the suffix boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subtype(String);

impl Subtype {
    /// Validates a subtype.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_ascii(s.as_bytes())
    }

    pub(crate) fn from_ascii(s: &[u8]) -> Result<Self> {
        check_subtype(s)?;
        Ok(Subtype(fold_case(s)))
    }

    /// Folds case without checking; `s` must already have passed the checks.
    pub(crate) fn from_validated(s: &[u8]) -> Self {
        Subtype(fold_case(s))
    }
}

impl_token!(Subtype);
