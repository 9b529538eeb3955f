//! Value normalization for heterogeneous picker input.
//!
//! A picker value can arrive as an already-structured datetime, as epoch
//! seconds, as text in the combined picker format, or as nothing at all.
//! Normalization collapses all of these to one contract: a canonical
//! `Option<DateTime>` plus the untouched raw representation kept for
//! round-trip display.

use std::fmt;

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::codec::FieldCodec;
use crate::error::{PickerError, Result};

/// The accepted input shapes for [`normalize`].
///
/// The enum is the whole caller contract: anything that cannot be expressed
/// as one of these variants is rejected at compile time rather than by a
/// runtime shape probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerInput {
    /// An already-normalized point-in-time value
    Value(DateTime),
    /// Seconds since the Unix epoch
    Epoch(i64),
    /// Text in the combined picker format
    Text(String),
    /// No value
    Empty,
}

impl From<DateTime> for PickerInput {
    fn from(value: DateTime) -> Self {
        Self::Value(value)
    }
}

impl From<i64> for PickerInput {
    fn from(seconds: i64) -> Self {
        Self::Epoch(seconds)
    }
}

impl From<String> for PickerInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for PickerInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// The caller-supplied representation, preserved verbatim alongside the
/// normalized value. Never consulted for further parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Input was a structured value
    Value(DateTime),
    /// Input was epoch seconds; the original integer, not the derived value
    Epoch(i64),
    /// Input was text; the original string, not the parsed result
    Text(String),
    /// Input was absent
    Empty,
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Value(value) => value.fmt(f),
            RawValue::Epoch(seconds) => seconds.fmt(f),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Empty => Ok(()),
        }
    }
}

/// Result of normalization: the canonical value and the raw original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Canonical point-in-time value, `None` when no value was supplied
    pub value: Option<DateTime>,
    /// The input as the caller supplied it
    pub raw: RawValue,
}

/// Normalizes one picker input against the codec's combined format.
///
/// Dispatch per shape:
///
/// - `Value` passes through unchanged on both sides.
/// - `Epoch` is interpreted as Unix seconds and converted to the civil
///   datetime of that instant in UTC; the raw side keeps the integer.
/// - `Text` must conform to the combined format. A parse failure here is a
///   caller-contract violation and surfaces as
///   [`PickerError::InvalidValue`], not as a parse error.
/// - Empty text is absence, same as `Empty`.
///
/// Every arm assigns both sides, so `raw` never needs to be back-filled from
/// the normalized value.
pub fn normalize(input: PickerInput, codec: &FieldCodec) -> Result<Normalized> {
    match input {
        PickerInput::Value(value) => Ok(Normalized {
            value: Some(value),
            raw: RawValue::Value(value),
        }),
        PickerInput::Epoch(seconds) => {
            let timestamp = Timestamp::from_second(seconds)
                .map_err(|source| PickerError::EpochOutOfRange { seconds, source })?;
            Ok(Normalized {
                value: Some(timestamp.to_zoned(TimeZone::UTC).datetime()),
                raw: RawValue::Epoch(seconds),
            })
        }
        PickerInput::Text(text) if text.is_empty() => Ok(Normalized {
            value: None,
            raw: RawValue::Text(text),
        }),
        PickerInput::Text(text) => {
            let value = codec
                .parse(&text)
                .map_err(|e| PickerError::invalid_value("value", e.to_string()))?;
            Ok(Normalized {
                value: Some(value),
                raw: RawValue::Text(text),
            })
        }
        PickerInput::Empty => Ok(Normalized {
            value: None,
            raw: RawValue::Empty,
        }),
    }
}
