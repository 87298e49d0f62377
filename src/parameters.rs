//! Media type parameters.
//!
//! Parses the `; name=value` list that may follow a media type
//! (RFC 7231 section 3.1.1.1):
//!
//! ```text
//! parameter = token "=" ( token / quoted-string )
//! ```
//!
//! Names and values go through [`ParameterName`] and [`ParameterValue`].

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::ascii;
use crate::error::{ParsingError, Result, Rule, Segment};
use crate::token::{ParameterName, ParameterValue};

/// Ordered mapping from parameter names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<ParameterName, ParameterValue>);

impl Parameters {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `;` separated parameter list, e.g. `; charset=utf-8; q=1`.
    ///
    /// Whitespace around each parameter and empty entries are skipped. A `;`
    /// inside a quoted value does not end the parameter. A repeated name
    /// replaces the earlier value.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parameters = Self::new();

        for parameter in split_unquoted(s) {
            let parameter = parameter.trim_matches(|c: char| c.is_ascii() && ascii::is_blank(c as u8));
            if parameter.is_empty() {
                continue;
            }

            let (name, value) = parameter.split_once('=').ok_or(ParsingError::new(
                Segment::ParameterName,
                Rule::MissingDelimiter('='),
            ))?;
            parameters.insert(ParameterName::parse(name)?, ParameterValue::parse(value)?);
        }

        Ok(parameters)
    }

    /// Looks up a value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        let name = ParameterName::parse(name).ok()?;
        self.0.get(&name)
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(&mut self, name: ParameterName, value: ParameterValue) -> Option<ParameterValue> {
        self.0.insert(name, value)
    }

    /// Removes a parameter by name, case-insensitively.
    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        let name = ParameterName::parse(name).ok()?;
        self.0.remove(&name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reports whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, ParameterName, ParameterValue> {
        self.0.iter()
    }
}

/// Splits at each `;` that is not between a pair of `"`.
fn split_unquoted(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut quoted = false;
    let mut start = 0;

    for (i, c) in s.bytes().enumerate() {
        match c {
            b'"' => quoted = !quoted,
            b';' if !quoted => {
                pieces.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&s[start..]);
    pieces
}

/// Writes `; name=value` for each parameter, values in their raw form.
impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.0 {
            write!(f, "; {}={}", name, value)?;
        }
        Ok(())
    }
}

impl FromIterator<(ParameterName, ParameterValue)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (ParameterName, ParameterValue)>>(iter: I) -> Self {
        Parameters(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a ParameterName, &'a ParameterValue);
    type IntoIter = btree_map::Iter<'a, ParameterName, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = (ParameterName, ParameterValue);
    type IntoIter = btree_map::IntoIter<ParameterName, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaType;

    #[test]
    fn test_parse_parameters() {
        let params = Parameters::parse("; charset=UTF-8; boundary=\"simple boundary\"").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("charset").unwrap().value(), "UTF-8");
        assert_eq!(params.get("BOUNDARY").unwrap().value(), "simple boundary");
        assert!(params.get("q").is_none());
        assert!(params.get("not a name").is_none());
    }

    #[test]
    fn test_parse_parameters_empty() {
        assert!(Parameters::parse("").unwrap().is_empty());
        assert!(Parameters::parse(";;  ;\t").unwrap().is_empty());
    }

    #[test]
    fn test_parse_parameters_quoted_semicolon() {
        let params = Parameters::parse("; title=\"a;b\"; charset=utf-8").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("title").unwrap().value(), "a;b");
        assert_eq!(params.get("charset").unwrap().value(), "utf-8");

        // Without the closing quote the rest of the input stays in the value.
        let err = Parameters::parse("; title=\"a;b; charset=utf-8").unwrap_err();
        assert_eq!(err.segment(), Segment::ParameterValue);
        assert_eq!(err.rule(), Rule::MissingTrailingQuote);
    }

    #[test]
    fn test_quoted_semicolon_round_trip() {
        let media_type = MediaType::parse("text/plain").unwrap();
        let mut params = Parameters::new();
        params.insert(ParameterName::parse("title").unwrap(), ParameterValue::parse("\"a;b\"").unwrap());

        let formatted = media_type.format_with_parameters(&params);
        assert_eq!(formatted, "text/plain; title=\"a;b\"");
        assert_eq!(MediaType::parse_with_parameters(&formatted).unwrap(), (media_type, params));
    }

    #[test]
    fn test_collect_and_into_iter() {
        let params: Parameters = [("q", "0.5"), ("Charset", "\"utf-8\"")]
            .into_iter()
            .map(|(n, v)| (ParameterName::parse(n).unwrap(), ParameterValue::parse(v).unwrap()))
            .collect();
        assert_eq!(params.to_string(), "; charset=\"utf-8\"; q=0.5");

        let mut borrowed = Vec::new();
        for (name, value) in &params {
            borrowed.push((name.as_str(), value.value()));
        }
        assert_eq!(borrowed, [("charset", "utf-8"), ("q", "0.5")]);

        let owned: Vec<(String, String)> =
            params.into_iter().map(|(n, v)| (n.into_string(), v.into_value())).collect();
        assert_eq!(owned, [("charset".to_string(), "utf-8".to_string()), ("q".to_string(), "0.5".to_string())]);
    }

    #[test]
    fn test_parse_parameters_duplicate_replaces() {
        let params = Parameters::parse("charset=utf-1;charset=utf-2;Charset=utf-3").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("charset").unwrap().value(), "utf-3");
    }

    #[test]
    fn test_parse_parameters_errors() {
        let err = Parameters::parse("; charset").unwrap_err();
        assert_eq!(err.segment(), Segment::ParameterName);
        assert_eq!(err.rule(), Rule::MissingDelimiter('='));

        let err = Parameters::parse("; charset = utf-8").unwrap_err();
        assert_eq!(err.segment(), Segment::ParameterName);
        assert_eq!(err.rule(), Rule::InvalidCharacters);

        let err = Parameters::parse("; charset=").unwrap_err();
        assert_eq!(err.segment(), Segment::ParameterValue);

        let err = Parameters::parse("; title=\"\"").unwrap_err();
        assert_eq!(err.rule(), Rule::EmptyQuotedValue);
    }

    #[test]
    fn test_display_sorted() {
        let params = Parameters::parse("q=0.5; charset=utf-8").unwrap();
        assert_eq!(params.to_string(), "; charset=utf-8; q=0.5");
        assert_eq!(Parameters::new().to_string(), "");
    }

    #[test]
    fn test_insert_remove_iter() {
        let mut params = Parameters::new();
        let name = ParameterName::parse("Format").unwrap();
        assert!(params.insert(name, ParameterValue::parse("flowed").unwrap()).is_none());
        assert!(params
            .insert(ParameterName::parse("format").unwrap(), ParameterValue::parse("fixed").unwrap())
            .is_some());

        let names: Vec<&str> = params.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["format"]);
        assert_eq!(params.remove("FORMAT").unwrap().value(), "fixed");
        assert!(params.is_empty());
    }

    #[test]
    fn test_media_type_with_parameters() {
        let input = "multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxkTrZu0gW";
        let (media_type, params) = MediaType::parse_with_parameters(input).unwrap();
        assert_eq!(media_type.to_string(), "multipart/form-data");
        assert_eq!(params.get("boundary").unwrap().value(), "----WebKitFormBoundary7MA4YWxkTrZu0gW");

        let formatted = media_type.format_with_parameters(&params);
        assert_eq!(formatted, input);
        assert_eq!(MediaType::parse_with_parameters(&formatted).unwrap(), (media_type, params));
    }

    #[test]
    fn test_media_type_with_parameters_errors() {
        assert_eq!(
            MediaType::parse_with_parameters("text/plain; charset").unwrap_err().rule(),
            Rule::MissingDelimiter('=')
        );
        assert_eq!(
            MediaType::parse_with_parameters("textplain; charset=utf-8").unwrap_err().segment(),
            Segment::Parsing
        );
        let (media_type, params) = MediaType::parse_with_parameters("text/plain").unwrap();
        assert_eq!(media_type.to_string(), "text/plain");
        assert!(params.is_empty());
    }
}
