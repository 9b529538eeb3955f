//! Combined date/time field codec.
//!
//! A logical date-time value is edited as two sub-fields, one per picker
//! format. The codec joins the two formats (and the two raw texts) with a
//! fixed single-space rule, translates the *combined* picker format to the
//! native syntax in one pass, and parses/formats whole values against it.

use jiff::civil::{Date, DateTime};
use jiff::fmt::strtime;

use crate::error::{PickerError, Result};
use crate::format::to_native_format;

/// Separator between the date part and the time part, for both formats and
/// texts. Date always comes first.
pub const MERGE_SEPARATOR: &str = " ";

/// Codec over a configured date-part and time-part picker format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCodec {
    date_format: String,
    time_format: String,
}

impl FieldCodec {
    /// Creates a codec for the given picker-notation sub-formats.
    pub fn new(date_format: impl Into<String>, time_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            time_format: time_format.into(),
        }
    }

    /// The configured date-part picker format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// The configured time-part picker format.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Joins the two sub-formats into the combined picker format.
    pub fn combined_format(&self) -> String {
        Self::combine_text(&self.date_format, &self.time_format)
    }

    /// Joins two sub-field texts with the fixed merge rule.
    ///
    /// The rule is exact: `"{date}{space}{time}"`, even when one side is
    /// empty. Partial input therefore still produces a separator plus an
    /// empty segment, which the parser then rejects.
    pub fn combine_text(date_text: &str, time_text: &str) -> String {
        format!("{date_text}{MERGE_SEPARATOR}{time_text}")
    }

    /// The combined format in native (strftime) syntax.
    ///
    /// Translation runs over the joined string, not per part, so token
    /// matching is resolved consistently in a single pass.
    pub fn native_format(&self) -> String {
        to_native_format(&self.combined_format())
    }

    /// The date sub-format alone in native syntax.
    ///
    /// Used for rendering the date sub-field and for calendar-day bounds.
    pub fn date_native_format(&self) -> String {
        to_native_format(&self.date_format)
    }

    /// The time sub-format alone in native syntax.
    pub fn time_native_format(&self) -> String {
        to_native_format(&self.time_format)
    }

    /// Parses combined text against the combined native format.
    pub fn parse(&self, text: &str) -> Result<DateTime> {
        let format = self.native_format();
        strtime::parse(&format, text)
            .and_then(|tm| tm.to_datetime())
            .map_err(|source| PickerError::parse(&format, text, source))
    }

    /// Formats a value with the combined native format.
    pub fn format(&self, value: DateTime) -> Result<String> {
        Self::format_with(&self.native_format(), value)
    }

    /// Formats only the date part of a value.
    pub fn format_date(&self, value: DateTime) -> Result<String> {
        Self::format_with(&self.date_native_format(), value)
    }

    /// Formats only the time part of a value.
    pub fn format_time(&self, value: DateTime) -> Result<String> {
        Self::format_with(&self.time_native_format(), value)
    }

    /// Formats a calendar-day bound with a date-only native format.
    pub fn format_bound(format: &str, day: Date) -> Result<String> {
        strtime::format(format, day).map_err(|source| PickerError::Format {
            format: format.to_string(),
            source,
        })
    }

    fn format_with(format: &str, value: DateTime) -> Result<String> {
        strtime::format(format, value).map_err(|source| PickerError::Format {
            format: format.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn w3c_codec() -> FieldCodec {
        FieldCodec::new("yyyy-mm-dd", "hh:ii")
    }

    #[test]
    fn test_combined_format_joins_date_first() {
        assert_eq!(w3c_codec().combined_format(), "yyyy-mm-dd hh:ii");
    }

    #[test]
    fn test_combine_text_is_exact_single_space_join() {
        assert_eq!(
            FieldCodec::combine_text("2023-07-01", "14:30"),
            "2023-07-01 14:30"
        );
        assert_eq!(FieldCodec::combine_text("2023-07-01", ""), "2023-07-01 ");
        assert_eq!(FieldCodec::combine_text("", ""), " ");
    }

    #[test]
    fn test_native_format_of_combined_string() {
        assert_eq!(w3c_codec().native_format(), "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_sub_native_formats() {
        let codec = w3c_codec();
        assert_eq!(codec.date_native_format(), "%Y-%m-%d");
        assert_eq!(codec.time_native_format(), "%H:%M");
    }

    #[test]
    fn test_parse_combined_text() {
        let value = w3c_codec().parse("2023-07-01 14:30").expect("should parse");
        assert_eq!(value, date(2023, 7, 1).at(14, 30, 0, 0));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let result = w3c_codec().parse("2023-07-01 ");
        assert!(matches!(result, Err(PickerError::Parse { .. })));
    }

    #[test]
    fn test_parse_rejects_out_of_range_component() {
        let result = w3c_codec().parse("2023-13-01 14:30");
        assert!(matches!(result, Err(PickerError::Parse { .. })));
    }

    #[test]
    fn test_format_value() {
        let value = date(2023, 7, 1).at(14, 30, 0, 0);
        assert_eq!(w3c_codec().format(value).unwrap(), "2023-07-01 14:30");
    }

    #[test]
    fn test_format_sub_fields_independently() {
        let codec = w3c_codec();
        let value = date(2023, 7, 1).at(14, 30, 0, 0);
        assert_eq!(codec.format_date(value).unwrap(), "2023-07-01");
        assert_eq!(codec.format_time(value).unwrap(), "14:30");
    }

    #[test]
    fn test_round_trip_with_second_precision() {
        let codec = FieldCodec::new("yyyy-mm-dd", "hh:ii:ss");
        let value = date(2024, 2, 29).at(23, 59, 58, 0);
        let text = codec.format(value).unwrap();
        assert_eq!(codec.parse(&text).unwrap(), value);
    }

    #[test]
    fn test_round_trip_is_precision_limited() {
        // minute-precision format drops seconds on the way out
        let codec = w3c_codec();
        let value = date(2024, 2, 29).at(23, 59, 58, 0);
        let text = codec.format(value).unwrap();
        assert_eq!(codec.parse(&text).unwrap(), date(2024, 2, 29).at(23, 59, 0, 0));
    }
}
