use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::types::serialization::CodecError;

/// Seconds + nanoseconds since the Unix epoch, RFC 3339 in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl Timestamp {
    pub fn from_unix(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    fn to_datetime(self) -> Result<OffsetDateTime, CodecError> {
        let dt = OffsetDateTime::from_unix_timestamp(self.seconds)
            .map_err(|e| CodecError::InvalidTimestamp(e.to_string()))?;
        dt.replace_nanosecond(self.nanos)
            .map_err(|e| CodecError::InvalidTimestamp(e.to_string()))
    }
}

impl FromStr for Timestamp {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = OffsetDateTime::parse(s, &Rfc3339).map_err(|e| CodecError::InvalidTimestamp(e.to_string()))?;
        Ok(Self {
            seconds: dt.unix_timestamp(),
            nanos: dt.nanosecond(),
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_datetime()
            .and_then(|dt| dt.format(&Rfc3339).map_err(|e| CodecError::InvalidTimestamp(e.to_string())))
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
