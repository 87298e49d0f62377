//! Media type parsing and formatting.
//!
//! Implements the RFC 6838 `type "/" [tree "."] subtype ["+" suffix]` form.
//! Trailing parameters (RFC 2045, RFC 7231) are discarded by
//! [`MediaType::parse`]; [`MediaType::parse_with_parameters`] keeps them.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{ParsingError, Result, Rule, Segment};
use crate::grammar::{check_subtype, check_suffix, check_tree, check_type, find, rfind};
use crate::parameters::Parameters;
use crate::token::{Subtype, Suffix, Tree, Type};

/// Raw byte ranges of the four positional segments, not yet validated.
#[derive(Default)]
struct Segments<'a> {
    ty: &'a [u8],
    tree: &'a [u8],
    subtype: &'a [u8],
    suffix: &'a [u8],
}

/// Splits a media type at the first `;`, the first `/`, the first `.` after
/// it and the last `+` after that.
const fn split(input: &[u8]) -> std::result::Result<Segments<'_>, ParsingError> {
    let input = match find(input, b';') {
        Some(semicolon) => input.split_at(semicolon).0,
        None => input,
    };

    let (ty, rest) = match find(input, b'/') {
        Some(slash) => {
            let (ty, rest) = input.split_at(slash);
            (ty, rest.split_at(1).1)
        }
        None => return Err(ParsingError::new(Segment::Parsing, Rule::MissingDelimiter('/'))),
    };

    let (tree, rest) = match find(rest, b'.') {
        Some(0) => return Err(ParsingError::new(Segment::Parsing, Rule::MissingTree)),
        Some(dot) => rest.split_at(dot + 1),
        None => rest.split_at(0),
    };

    let (subtype, suffix) = match rfind(rest, b'+') {
        Some(plus) => rest.split_at(plus),
        None => rest.split_at(rest.len()),
    };

    Ok(Segments { ty, tree, subtype, suffix })
}

/// Media type as defined by RFC 6838, without parameters.
///
/// # Examples
///
/// ```
/// use rfc6838::MediaType;
///
/// let media_type = MediaType::parse("application/vnd.API+JSON").unwrap();
/// assert_eq!(media_type.type_().as_str(), "application");
/// assert_eq!(media_type.tree().as_str(), "vnd.");
/// assert_eq!(media_type.subtype().as_str(), "api");
/// assert_eq!(media_type.suffix().map(|s| s.as_str()), Some("+json"));
/// assert_eq!(media_type.to_string(), "application/vnd.api+json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    ty: Type,
    tree: Tree,
    subtype: Subtype,
    suffix: Option<Suffix>,
}

impl MediaType {
    /// Assembles a media type from already validated tokens.
    ///
    /// Fails when the formatted result would read back with different
    /// segments: a subtype containing `.` under the standard tree, or a
    /// subtype containing `+` without a suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc6838::{MediaType, Subtype, Tree, Type};
    ///
    /// let ty = Type::parse("application").unwrap();
    /// let subtype = Subtype::parse("x.y").unwrap();
    /// assert!(MediaType::new(ty.clone(), Tree::standard(), subtype.clone(), None).is_err());
    ///
    /// let tree = Tree::parse("vnd.").unwrap();
    /// let media_type = MediaType::new(ty, tree, subtype, None).unwrap();
    /// assert_eq!(media_type.to_string(), "application/vnd.x.y");
    /// ```
    pub fn new(ty: Type, tree: Tree, subtype: Subtype, suffix: Option<Suffix>) -> Result<Self> {
        let subtype_bytes = subtype.as_str().as_bytes();
        if tree.is_standard() && find(subtype_bytes, b'.').is_some() {
            return Err(ParsingError::new(Segment::Subtype, Rule::DotWithoutTree));
        }
        if suffix.is_none() && find(subtype_bytes, b'+').is_some() {
            return Err(ParsingError::new(Segment::Subtype, Rule::PlusWithoutSuffix));
        }
        Ok(Self { ty, tree, subtype, suffix })
    }

    /// Parses a media type in the form `type/tree.subtype+suffix`.
    ///
    /// Everything from the first `;` onwards is ignored. The first failing
    /// segment aborts the parse.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_ascii(s.as_bytes()).map_err(|err| {
            trace!(input = s, %err, "rejected media type");
            err
        })
    }

    /// Parses a media type and its `; name=value` parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc6838::MediaType;
    ///
    /// let (media_type, params) =
    ///     MediaType::parse_with_parameters("text/html; charset=\"utf-8\"").unwrap();
    /// assert_eq!(media_type.to_string(), "text/html");
    /// assert_eq!(params.get("charset").map(|v| v.value()), Some("utf-8"));
    /// ```
    pub fn parse_with_parameters(s: &str) -> Result<(Self, Parameters)> {
        let (essence, rest) = s.split_once(';').unwrap_or((s, ""));
        let media_type = Self::parse(essence)?;
        let parameters = Parameters::parse(rest).map_err(|err| {
            trace!(input = s, %err, "rejected media type parameters");
            err
        })?;
        Ok((media_type, parameters))
    }

    /// Checks a media type without building it.
    ///
    /// Applies the same rules, in the same order, as [`MediaType::parse`]. Being
    /// a `const fn`, it backs the [`media_type!`](crate::media_type) macro.
    pub const fn validate(s: &str) -> Result<()> {
        let segments = match split(s.as_bytes()) {
            Ok(segments) => segments,
            Err(err) => return Err(err),
        };
        if let Err(err) = check_type(segments.ty) {
            return Err(err);
        }
        if let Err(err) = check_tree(segments.tree) {
            return Err(err);
        }
        if let Err(err) = check_subtype(segments.subtype) {
            return Err(err);
        }
        if !segments.suffix.is_empty() {
            if let Err(err) = check_suffix(segments.suffix) {
                return Err(err);
            }
        }
        Ok(())
    }

    /// Builds a media type from a string that already passed
    /// [`MediaType::validate`], folding case without checking again.
    ///
    /// Used by [`media_type!`](crate::media_type). Any other input gives an
    /// unspecified, possibly invalid, value.
    #[doc(hidden)]
    pub fn from_validated(s: &str) -> Self {
        let segments = split(s.as_bytes()).unwrap_or_default();
        Self {
            ty: Type::from_validated(segments.ty),
            tree: Tree::from_validated(segments.tree),
            subtype: Subtype::from_validated(segments.subtype),
            suffix: if segments.suffix.is_empty() {
                None
            } else {
                Some(Suffix::from_validated(segments.suffix))
            },
        }
    }

    fn from_ascii(s: &[u8]) -> Result<Self> {
        let segments = split(s)?;
        let ty = Type::from_ascii(segments.ty)?;
        let tree = Tree::from_ascii(segments.tree)?;
        let subtype = Subtype::from_ascii(segments.subtype)?;
        let suffix = if segments.suffix.is_empty() {
            None
        } else {
            Some(Suffix::from_ascii(segments.suffix)?)
        };
        // The split guarantees the tree and suffix boundaries `new` checks for.
        Ok(Self { ty, tree, subtype, suffix })
    }

    /// Top-level type.
    pub fn type_(&self) -> &Type {
        &self.ty
    }

    /// Registration tree, [`Tree::is_standard`] when absent.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Subtype.
    pub fn subtype(&self) -> &Subtype {
        &self.subtype
    }

    /// Structured syntax suffix, if any.
    pub fn suffix(&self) -> Option<&Suffix> {
        self.suffix.as_ref()
    }

    /// Returns a copy with type, tree and subtype only.
    ///
    /// Fails with [`Rule::PlusWithoutSuffix`] when the subtype itself contains
    /// `+`, as in `application/api+json+xml`.
    pub fn without_suffix(&self) -> Result<Self> {
        Self::new(self.ty.clone(), self.tree.clone(), self.subtype.clone(), None)
    }

    /// Drops the suffix, keeping type, tree and subtype.
    pub fn into_without_suffix(self) -> Result<Self> {
        Self::new(self.ty, self.tree, self.subtype, None)
    }

    /// Formats the media type followed by `; name=value` for each parameter.
    pub fn format_with_parameters(&self, parameters: &Parameters) -> String {
        format!("{}{}", self, parameters)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.ty, self.tree, self.subtype)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = ParsingError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parses a header value given as bytes. Non-ASCII bytes before the first
/// `;` fail the character checks.
impl TryFrom<&[u8]> for MediaType {
    type Error = ParsingError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_ascii(bytes).map_err(|err| {
            trace!(input = ?String::from_utf8_lossy(bytes), %err, "rejected media type");
            err
        })
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> String {
        media_type.to_string()
    }
}

/// Builds a [`MediaType`] from a string literal.
///
/// The literal is validated at compile time with the same rules as
/// [`MediaType::parse`], so an invalid literal does not compile. At runtime
/// only the case folding remains.
///
/// # Examples
///
/// ```
/// use rfc6838::media_type;
///
/// let json = media_type!("application/vnd.api+json");
/// assert_eq!(json.to_string(), "application/vnd.api+json");
/// ```
///
/// ```compile_fail
/// let broken = rfc6838::media_type!("application");
/// ```
#[macro_export]
macro_rules! media_type {
    ($s:literal) => {{
        const _: () = match $crate::MediaType::validate($s) {
            Ok(()) => (),
            Err(_) => panic!(concat!("invalid media type literal: ", $s)),
        };
        $crate::MediaType::from_validated($s)
    }};
}
