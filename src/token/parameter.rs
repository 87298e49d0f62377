//! Parameter names and values (RFC 2045 section 5.1, RFC 7231 section 3.1.1.1).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ParsingError, Result};
use crate::grammar::{check_parameter_name, check_parameter_value, fold_case};

use super::impl_token;

/// Parameter name, e.g. `charset`.
///
/// Same grammar as [`Type`](crate::Type), stored in lowercase. Names are
/// totally ordered so they can key an ordered map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterName(String);

impl ParameterName {
    /// Validates a parameter name.
    pub fn parse(s: &str) -> Result<Self> {
        check_parameter_name(s.as_bytes())?;
        Ok(ParameterName(fold_case(s.as_bytes())))
    }
}

impl_token!(ParameterName);

/// Parameter value, either a token (`utf-8`) or a quoted string (`"utf-8"`).
///
/// The raw form is kept as given, quotes and case included. Equality and
/// hashing use the logical value, so `utf-8` equals `"utf-8"`.
#[derive(Debug, Clone)]
pub struct ParameterValue(String);

impl ParameterValue {
    /// Validates a parameter value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc6838::ParameterValue;
    ///
    /// let quoted = ParameterValue::parse("\"utf-8\"").unwrap();
    /// assert_eq!(quoted.as_str(), "\"utf-8\"");
    /// assert_eq!(quoted.value(), "utf-8");
    /// assert_eq!(quoted, ParameterValue::parse("utf-8").unwrap());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        check_parameter_value(s.as_bytes())?;
        Ok(ParameterValue(s.to_string()))
    }

    /// Reports whether the raw form is a quoted string.
    pub fn is_quoted(&self) -> bool {
        self.0.starts_with('"')
    }

    /// The raw form, quotes included when quoted.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The logical value, without surrounding quotes.
    pub fn value(&self) -> &str {
        if self.is_quoted() {
            &self.0[1..self.0.len() - 1]
        } else {
            &self.0
        }
    }

    /// Consumes the value, returning the logical value.
    pub fn into_value(self) -> String {
        if self.is_quoted() {
            self.value().to_string()
        } else {
            self.0
        }
    }

    /// Consumes the value, returning the raw form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl PartialEq for ParameterValue {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for ParameterValue {}

impl Hash for ParameterValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParameterValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ParameterValue {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParameterValue {
    type Error = ParsingError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ParameterValue {
    type Error = ParsingError;

    fn try_from(s: String) -> Result<Self> {
        check_parameter_value(s.as_bytes())?;
        Ok(ParameterValue(s))
    }
}
