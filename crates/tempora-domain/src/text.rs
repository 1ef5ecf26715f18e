//! Shared text encoding for the scalar value types
//!
//! Every scalar renders through `Display` and parses through `FromStr`; the
//! serde impls are thin wrappers over those two, so JSON and plain text always
//! agree on the format.

use crate::TemporalError;
use std::fmt;
use std::str::FromStr;

/// A value with a canonical textual form
pub trait TextValue: Sized + FromStr<Err = TemporalError> + fmt::Display {
    /// Parse text where the empty string means "absent"
    ///
    /// Returns `Ok(None)` for empty input so callers can leave their current
    /// value untouched, mirroring how text columns and form fields treat
    /// blank values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_domain::{LocalDate, TextValue};
    ///
    /// assert_eq!(LocalDate::parse_nullable("").unwrap(), None);
    /// assert!(LocalDate::parse_nullable("2000-09-10").unwrap().is_some());
    /// assert!(LocalDate::parse_nullable("garbage").is_err());
    /// ```
    fn parse_nullable(text: &str) -> Result<Option<Self>, TemporalError> {
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some)
    }
}

/// Implements `Serialize`/`Deserialize` as a string via `Display`/`FromStr`
macro_rules! impl_text_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }

        impl $crate::text::TextValue for $ty {}
    };
}

pub(crate) use impl_text_serde;
