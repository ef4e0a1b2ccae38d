//! Lenient integer decoding for numeric display fields.
//!
//! Clients send numeric fields either as JSON numbers or as numeric strings
//! (`"Creditos": "8"`). Both are accepted; floats are truncated toward zero.
//! Everything else is rejected.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};

/// Lower bound of the `f64` range that fits in an `i64` after truncation.
const F64_MIN: f64 = -9_223_372_036_854_775_808.0;
/// Exclusive upper bound of the `f64` range that fits in an `i64`.
const F64_MAX: f64 = 9_223_372_036_854_775_808.0;

/// `deserialize_with` helper coercing a number or numeric string to `i64`.
///
/// # Errors
///
/// Returns the deserializer's error when the value is not an integer, a
/// finite in-range float, or a string holding an integer.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor)
}

struct IntegerVisitor;

impl Visitor<'_> for IntegerVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string holding an integer")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        let truncated = value.trunc();
        if truncated.is_finite() && (F64_MIN..F64_MAX).contains(&truncated) {
            Ok(truncated as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}
