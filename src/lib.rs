//! Media type validation and parsing as defined by RFC 6838.
//!
//! This crate decomposes media types such as `application/vnd.api+json` into
//! their grammar elements and rejects any input outside the registered-name
//! grammar:
//! - Top-level type, registration tree, subtype and structured syntax suffix
//!   as validated, case-folded tokens
//! - Parsing and formatting of the composite [`MediaType`]
//! - Parameter names and values (RFC 2045, RFC 7231), with an optional
//!   ordered [`Parameters`] mapping
//! - Compile-time checked literals via [`media_type!`]
//!
//! # Examples
//!
//! ```
//! use rfc6838::MediaType;
//!
//! let media_type: MediaType = "Application/Vnd.Api+JSON; charset=utf-8".parse().unwrap();
//! assert_eq!(media_type.to_string(), "application/vnd.api+json");
//! assert!(MediaType::parse("application/.json").is_err());
//! ```

pub mod ascii;
pub mod error;
pub mod grammar;
pub mod media_type;
pub mod parameters;
pub mod token;
pub mod well_known;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types
pub use error::{ParsingError, Result, Rule, Segment};
pub use media_type::MediaType;
pub use parameters::Parameters;
pub use token::{ParameterName, ParameterValue, Subtype, Suffix, Tree, Type};
