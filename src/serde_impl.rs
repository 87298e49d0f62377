//! Serde support, enabled with the `serde` feature.
//!
//! Every type (de)serializes as its string form. Deserializing validates.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::ParsingError;
use crate::media_type::MediaType;
use crate::token::{ParameterName, ParameterValue, Subtype, Suffix, Tree, Type};

struct ParseVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for ParseVisitor<T>
where
    T: FromStr<Err = ParsingError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a media type string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}

macro_rules! impl_serde {
    ($($name:ty),*) => {
        $(
            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(ParseVisitor::<$name>(PhantomData))
                }
            }
        )*
    };
}

impl_serde!(MediaType, Type, Tree, Subtype, Suffix, ParameterName, ParameterValue);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_media_type() {
        let media_type = MediaType::parse("Application/Vnd.Api+JSON").unwrap();
        let json = serde_json::to_string(&media_type).unwrap();
        assert_eq!(json, "\"application/vnd.api+json\"");
    }

    #[test]
    fn test_deserialize_media_type() {
        let media_type: MediaType = serde_json::from_str("\"image/svg+xml\"").unwrap();
        assert_eq!(media_type.suffix().unwrap().as_str(), "+xml");

        let err = serde_json::from_str::<MediaType>("\"imagesvg\"").unwrap_err();
        assert!(err.to_string().contains("missing delimiter '/' after type"));
    }

    #[test]
    fn test_tokens() {
        let value: ParameterValue = serde_json::from_str("\"\\\"utf-8\\\"\"").unwrap();
        assert_eq!(value.value(), "utf-8");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"\\\"utf-8\\\"\"");

        let tree: Tree = serde_json::from_str("\"\"").unwrap();
        assert!(tree.is_standard());
        assert!(serde_json::from_str::<Suffix>("\"json\"").is_err());
    }
}
