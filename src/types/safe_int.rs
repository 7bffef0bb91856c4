//! Exact-integer coercion for fields that arrive as JSON numbers or as
//! decimal strings (RPC encodes 64-bit integers as strings).
//!
//! Every value is bounded by [`MAX_SAFE_INTEGER`] so that power arithmetic
//! and the varint encoding stay exact.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::types::serialization::CodecError;

/// 2^53 - 1, the largest integer a double represents exactly.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

pub fn parse_safe_integer(s: &str) -> Result<i64, CodecError> {
    let trimmed = s.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| CodecError::UnsafeInteger(s.to_string()))?;
    check_safe(n).ok_or_else(|| CodecError::UnsafeInteger(s.to_string()))
}

/// Coerces a number-or-string JSON value into an exact integer.
pub fn coerce_safe_integer(value: &Value) -> Result<i64, CodecError> {
    match value {
        Value::String(s) => parse_safe_integer(s),
        Value::Number(num) => {
            if let Some(n) = num.as_i64() {
                return check_safe(n).ok_or_else(|| CodecError::UnsafeInteger(num.to_string()));
            }
            match num.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64 => Ok(f as i64),
                _ => Err(CodecError::UnsafeInteger(num.to_string())),
            }
        }
        other => Err(CodecError::UnsafeInteger(other.to_string())),
    }
}

pub fn to_safe_i64(n: u64) -> Result<i64, CodecError> {
    if n > MAX_SAFE_INTEGER {
        return Err(CodecError::UnsafeInteger(n.to_string()));
    }
    Ok(n as i64)
}

fn check_safe(n: i64) -> Option<i64> {
    (n.unsigned_abs() <= MAX_SAFE_INTEGER).then_some(n)
}

fn deserialize_safe<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    coerce_safe_integer(&value).map_err(serde::de::Error::custom)
}

macro_rules! safe_int_serde {
    ($name:ident, $ty:ty) => {
        /// Serde adapter: writes a decimal string, reads a number or a string.
        pub mod $name {
            use super::*;

            pub fn serialize<S: Serializer>(v: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(v)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                let n = deserialize_safe(deserializer)?;
                <$ty>::try_from(n).map_err(|_| serde::de::Error::custom(CodecError::UnsafeInteger(n.to_string())))
            }
        }
    };
}

safe_int_serde!(as_u64, u64);
safe_int_serde!(as_u32, u32);
safe_int_serde!(as_i64, i64);
