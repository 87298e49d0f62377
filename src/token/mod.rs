//! Validated media type tokens.
//!
//! Each token is an immutable, case-folded string that can only be obtained
//! through validation.

/// Conversions shared by every token wrapping a single `String`.
///
/// The token must provide `fn parse(&str) -> Result<Self>`.
macro_rules! impl_token {
    ($name:ident) => {
        impl $name {
            /// Returns the token as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the token, returning the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ParsingError;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = crate::error::ParsingError;

            fn try_from(s: &str) -> crate::error::Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::error::ParsingError;

            fn try_from(s: String) -> crate::error::Result<Self> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> String {
                token.0
            }
        }
    };
}

pub(crate) use impl_token;

mod parameter;
mod subtype;
mod suffix;
mod top_level;
mod tree;

pub use parameter::{ParameterName, ParameterValue};
pub use subtype::Subtype;
pub use suffix::Suffix;
pub use top_level::Type;
pub use tree::Tree;
