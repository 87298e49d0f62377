use crate::error::Result;
use crate::grammar::{check_tree, fold_case};

use super::impl_token;

/// Media type registration tree, e.g. `vnd.` or `prs.`.
///
/// The standard tree is the empty string. Any other tree is a modified
/// restricted name followed by exactly one `.`, 2 to 127 bytes in total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tree(String);

impl Tree {
    /// Validates a registration tree. The empty string is the standard tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc6838::Tree;
    ///
    /// assert!(Tree::parse("").unwrap().is_standard());
    /// assert_eq!(Tree::parse("VND.").unwrap().as_str(), "vnd.");
    /// assert!(Tree::parse("vnd").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_ascii(s.as_bytes())
    }

    pub(crate) fn from_ascii(s: &[u8]) -> Result<Self> {
        check_tree(s)?;
        Ok(Tree(fold_case(s)))
    }

    /// Folds case without checking; `s` must already have passed the checks.
    pub(crate) fn from_validated(s: &[u8]) -> Self {
        Tree(fold_case(s))
    }

    /// The IANA standard tree.
    pub const fn standard() -> Self {
        Tree(String::new())
    }

    /// Reports whether this is the standard tree.
    pub fn is_standard(&self) -> bool {
        self.0.is_empty()
    }
}

impl_token!(Tree);
