//! Composite field binding.
//!
//! A date-time control is presented as two independently editable sub-fields.
//! [`DateBinder`] carries the single-field (date) configuration; a
//! [`DateTimeBinder`] wraps one and adds the time format, the meridian
//! option, and the held value. The time-bearing control is composed from the
//! date-bearing one rather than inherited from it.

use std::collections::HashMap;

use jiff::civil::{Date, DateTime};

use crate::codec::FieldCodec;
use crate::error::Result;
use crate::settings::{PickerSettings, ViewLevel};
use crate::value::{normalize, Normalized, PickerInput, RawValue};

/// Default date picker format (W3C style)
pub const W3C_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Default time picker format (W3C style)
pub const W3C_TIME_FORMAT: &str = "hh:ii";

/// Default widget language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Sub-field key for the date part
pub const FIELD_NAME_DATE: &str = "date";

/// Sub-field key for the time part
pub const FIELD_NAME_TIME: &str = "time";

/// The submitted name of a control's date sub-field.
pub fn date_field_name(field: &str) -> String {
    format!("{field}[{FIELD_NAME_DATE}]")
}

/// The submitted name of a control's time sub-field.
pub fn time_field_name(field: &str) -> String {
    format!("{field}[{FIELD_NAME_TIME}]")
}

/// Source of raw sub-field strings, keyed by submitted field name.
///
/// This is the seam to the excluded form-data layer: the binder asks for
/// `"{field}[date]"` and `"{field}[time]"` and does not care how the strings
/// were transported.
pub trait FieldSource {
    /// Returns the raw string submitted under `key`, if any.
    fn raw_field(&self, key: &str) -> Option<String>;
}

impl FieldSource for HashMap<String, String> {
    fn raw_field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The two raw sub-field texts of one control, read at binding time.
///
/// Ephemeral: lives only for the duration of one bind operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPair {
    /// Raw date sub-field text
    pub date_text: String,
    /// Raw time sub-field text
    pub time_text: String,
}

impl FieldPair {
    /// Creates a pair from already-extracted sub-field texts.
    pub fn new(date_text: impl Into<String>, time_text: impl Into<String>) -> Self {
        Self {
            date_text: date_text.into(),
            time_text: time_text.into(),
        }
    }

    /// Reads both sub-fields of `field` from a source.
    ///
    /// A missing sub-field reads as the empty string; each side may be
    /// absent independently.
    pub fn read(source: &impl FieldSource, field: &str) -> Self {
        Self {
            date_text: source.raw_field(&date_field_name(field)).unwrap_or_default(),
            time_text: source.raw_field(&time_field_name(field)).unwrap_or_default(),
        }
    }
}

/// Single-field configuration shared by date-bearing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBinder {
    date_format: String,
    language: String,
    start_date: Option<Date>,
    end_date: Option<Date>,
    autoclose: bool,
    keyboard_navigation: bool,
    force_parse: bool,
}

impl DateBinder {
    /// Creates a date binder with the given picker format and language.
    pub fn new(date_format: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            language: language.into(),
            start_date: None,
            end_date: None,
            autoclose: true,
            keyboard_navigation: true,
            force_parse: true,
        }
    }

    /// The configured date picker format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// The configured widget language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Sets the date picker format.
    pub fn set_date_format(&mut self, date_format: impl Into<String>) -> &mut Self {
        self.date_format = date_format.into();
        self
    }

    /// Sets the widget language.
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Sets the earliest selectable day. Bounds are calendar days.
    pub fn set_start_date(&mut self, start_date: Option<Date>) -> &mut Self {
        self.start_date = start_date;
        self
    }

    /// Sets the latest selectable day. Bounds are calendar days.
    pub fn set_end_date(&mut self, end_date: Option<Date>) -> &mut Self {
        self.end_date = end_date;
        self
    }

    /// Whether the picker closes as soon as a value is selected.
    pub fn set_autoclose(&mut self, autoclose: bool) -> &mut Self {
        self.autoclose = autoclose;
        self
    }

    /// Whether keyboard navigation is enabled.
    pub fn set_keyboard_navigation(&mut self, keyboard_navigation: bool) -> &mut Self {
        self.keyboard_navigation = keyboard_navigation;
        self
    }

    /// Whether the widget force-parses the input when closed.
    pub fn set_force_parse(&mut self, force_parse: bool) -> &mut Self {
        self.force_parse = force_parse;
        self
    }
}

impl Default for DateBinder {
    fn default() -> Self {
        Self::new(W3C_DATE_FORMAT, DEFAULT_LANGUAGE)
    }
}

/// A composite date+time control binding.
///
/// Holds the current `(value, raw)` pair and replaces it wholesale on every
/// [`set_value`](Self::set_value) or [`bind`](Self::bind) call; sub-fields
/// are never mutated individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeBinder {
    date: DateBinder,
    time_format: String,
    show_meridian: bool,
    value: Option<DateTime>,
    raw: RawValue,
}

impl DateTimeBinder {
    /// Creates a binder with the given picker formats and language.
    pub fn new(
        date_format: impl Into<String>,
        time_format: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            date: DateBinder::new(date_format, language),
            time_format: time_format.into(),
            show_meridian: false,
            value: None,
            raw: RawValue::Empty,
        }
    }

    /// The wrapped single-field (date) configuration.
    pub fn date(&self) -> &DateBinder {
        &self.date
    }

    /// Mutable access to the wrapped date configuration.
    pub fn date_mut(&mut self) -> &mut DateBinder {
        &mut self.date
    }

    /// The configured time picker format.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Sets the time picker format, a combination of `p P h hh i ii s ss`.
    pub fn set_time_format(&mut self, time_format: impl Into<String>) -> &mut Self {
        self.time_format = time_format.into();
        self
    }

    /// Whether meridian (AM/PM) views are enabled.
    pub fn show_meridian(&self) -> bool {
        self.show_meridian
    }

    /// Enables or disables meridian views.
    ///
    /// Enabling appends `" P"` to the time format exactly once; a format
    /// that already carries a meridian token is left alone, so the call is
    /// idempotent.
    pub fn set_show_meridian(&mut self, show_meridian: bool) -> &mut Self {
        self.show_meridian = show_meridian;

        if self.show_meridian
            && !self.time_format.contains('p')
            && !self.time_format.contains('P')
        {
            self.time_format.push_str(" P");
        }

        self
    }

    /// The codec over the currently configured sub-formats.
    pub fn codec(&self) -> FieldCodec {
        FieldCodec::new(&self.date.date_format, &self.time_format)
    }

    /// The current normalized value.
    pub fn value(&self) -> Option<DateTime> {
        self.value
    }

    /// The raw representation of the last supplied value.
    pub fn raw_value(&self) -> &RawValue {
        &self.raw
    }

    /// Sets the control value from any supported input shape.
    ///
    /// The `(value, raw)` pair is replaced atomically; on error the held
    /// value is left untouched.
    pub fn set_value(&mut self, input: impl Into<PickerInput>) -> Result<&mut Self> {
        let Normalized { value, raw } = normalize(input.into(), &self.codec())?;
        self.value = value;
        self.raw = raw;
        Ok(self)
    }

    /// Merges a sub-field pair into the control value.
    ///
    /// The texts are joined under the fixed merge rule and parsed against
    /// the combined native format. A text that does not parse, which
    /// includes the case where either sub-field was left empty, is absence
    /// rather than an error: the value becomes `None`. Partial input is not
    /// an error condition.
    pub fn bind(&mut self, pair: &FieldPair) -> Option<DateTime> {
        let combined = FieldCodec::combine_text(&pair.date_text, &pair.time_text);
        self.value = self.codec().parse(&combined).ok();
        self.raw = RawValue::Text(combined);
        self.value
    }

    /// Renders the date sub-field string for the current value.
    pub fn render_date(&self) -> Result<String> {
        match self.value {
            Some(value) => self.codec().format_date(value),
            None => Ok(String::new()),
        }
    }

    /// Renders the time sub-field string for the current value.
    pub fn render_time(&self) -> Result<String> {
        match self.value {
            Some(value) => self.codec().format_time(value),
            None => Ok(String::new()),
        }
    }

    /// Derives the widget settings from the current configuration and value.
    ///
    /// Pure derivation, recomputed per call. The view levels are fixed to
    /// the finest granularity a combined date+time control navigates
    /// (selection at the hour view). Bounds are rendered with the date-only
    /// format: restriction operates on calendar days even though the value
    /// carries a time of day.
    pub fn settings(&self) -> Result<PickerSettings> {
        let codec = self.codec();

        let initial_date = match self.value {
            Some(value) => codec.format(value)?,
            None => String::new(),
        };
        let start_date = self
            .date
            .start_date
            .map(|d| FieldCodec::format_bound(&codec.date_native_format(), d))
            .transpose()?;
        let end_date = self
            .date
            .end_date
            .map(|d| FieldCodec::format_bound(&codec.date_native_format(), d))
            .transpose()?;

        Ok(PickerSettings {
            format: codec.combined_format(),
            show_meridian: self.show_meridian,
            autoclose: self.date.autoclose,
            start_view: ViewLevel::Day,
            min_view: ViewLevel::Hour,
            max_view: ViewLevel::Day,
            view_select: ViewLevel::Hour,
            keyboard_navigation: self.date.keyboard_navigation,
            force_parse: self.date.force_parse,
            language: self.date.language.clone(),
            initial_date,
            start_date,
            end_date,
        })
    }
}

impl Default for DateTimeBinder {
    fn default() -> Self {
        Self::new(W3C_DATE_FORMAT, W3C_TIME_FORMAT, DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_field_names_follow_convention() {
        assert_eq!(date_field_name("published"), "published[date]");
        assert_eq!(time_field_name("published"), "published[time]");
    }

    #[test]
    fn test_field_pair_read_from_source() {
        let mut source = HashMap::new();
        source.insert("published[date]".to_string(), "2023-07-01".to_string());
        source.insert("published[time]".to_string(), "14:30".to_string());

        let pair = FieldPair::read(&source, "published");
        assert_eq!(pair, FieldPair::new("2023-07-01", "14:30"));
    }

    #[test]
    fn test_field_pair_missing_sub_field_reads_empty() {
        let mut source = HashMap::new();
        source.insert("published[date]".to_string(), "2023-07-01".to_string());

        let pair = FieldPair::read(&source, "published");
        assert_eq!(pair, FieldPair::new("2023-07-01", ""));
    }

    #[test]
    fn test_bind_merges_both_sub_fields() {
        let mut binder = DateTimeBinder::default();
        let value = binder.bind(&FieldPair::new("2023-07-01", "14:30"));

        assert_eq!(value, Some(date(2023, 7, 1).at(14, 30, 0, 0)));
        assert_eq!(binder.value(), value);
        assert_eq!(
            binder.raw_value(),
            &RawValue::Text("2023-07-01 14:30".to_string())
        );
    }

    #[test]
    fn test_bind_partial_input_is_absence_not_error() {
        let mut binder = DateTimeBinder::default();
        let value = binder.bind(&FieldPair::new("2023-07-01", ""));
        assert_eq!(value, None);
        assert_eq!(binder.value(), None);
    }

    #[test]
    fn test_bind_empty_pair_is_absence() {
        let mut binder = DateTimeBinder::default();
        assert_eq!(binder.bind(&FieldPair::default()), None);
    }

    #[test]
    fn test_bind_replaces_previous_value() {
        let mut binder = DateTimeBinder::default();
        binder.bind(&FieldPair::new("2023-07-01", "14:30"));
        binder.bind(&FieldPair::new("garbage", "text"));
        assert_eq!(binder.value(), None);
    }

    #[test]
    fn test_set_value_string_scenario() {
        let mut binder = DateTimeBinder::default();
        binder.set_value("2023-07-01 14:30").unwrap();

        assert_eq!(binder.value(), Some(date(2023, 7, 1).at(14, 30, 0, 0)));
        assert_eq!(
            binder.raw_value(),
            &RawValue::Text("2023-07-01 14:30".to_string())
        );
    }

    #[test]
    fn test_set_value_epoch_keeps_integer_raw() {
        let mut binder = DateTimeBinder::default();
        binder.set_value(0i64).unwrap();

        assert_eq!(binder.value(), Some(date(1970, 1, 1).at(0, 0, 0, 0)));
        assert_eq!(binder.raw_value(), &RawValue::Epoch(0));
    }

    #[test]
    fn test_set_value_error_leaves_value_untouched() {
        let mut binder = DateTimeBinder::default();
        binder.set_value("2023-07-01 14:30").unwrap();
        assert!(binder.set_value("nonsense").is_err());
        assert_eq!(binder.value(), Some(date(2023, 7, 1).at(14, 30, 0, 0)));
    }

    #[test]
    fn test_show_meridian_appends_token_once() {
        let mut binder = DateTimeBinder::default();
        binder.set_show_meridian(true);
        assert_eq!(binder.time_format(), "hh:ii P");

        let len = binder.time_format().len();
        binder.set_show_meridian(true);
        assert_eq!(binder.time_format().len(), len);
    }

    #[test]
    fn test_show_meridian_respects_existing_token() {
        let mut binder = DateTimeBinder::default();
        binder.set_time_format("hh:ii p");
        binder.set_show_meridian(true);
        assert_eq!(binder.time_format(), "hh:ii p");
    }

    #[test]
    fn test_render_sub_fields() {
        let mut binder = DateTimeBinder::default();
        binder.set_value("2023-07-01 14:30").unwrap();
        assert_eq!(binder.render_date().unwrap(), "2023-07-01");
        assert_eq!(binder.render_time().unwrap(), "14:30");
    }

    #[test]
    fn test_render_without_value_is_empty() {
        let binder = DateTimeBinder::default();
        assert_eq!(binder.render_date().unwrap(), "");
        assert_eq!(binder.render_time().unwrap(), "");
    }

    #[test]
    fn test_settings_view_levels_and_flags() {
        let settings = DateTimeBinder::default().settings().unwrap();
        assert_eq!(settings.format, "yyyy-mm-dd hh:ii");
        assert_eq!(settings.min_view, ViewLevel::Hour);
        assert_eq!(settings.view_select, ViewLevel::Hour);
        assert_eq!(settings.start_view, ViewLevel::Day);
        assert_eq!(settings.max_view, ViewLevel::Day);
        assert!(!settings.show_meridian);
        assert_eq!(settings.initial_date, "");
    }

    #[test]
    fn test_settings_initial_date_uses_combined_format() {
        let mut binder = DateTimeBinder::default();
        binder.set_value("2023-07-01 14:30").unwrap();
        let settings = binder.settings().unwrap();
        assert_eq!(settings.initial_date, "2023-07-01 14:30");
    }

    #[test]
    fn test_settings_bounds_are_date_granularity() {
        let mut binder = DateTimeBinder::default();
        binder.date_mut().set_start_date(Some(date(2023, 1, 1)));
        binder.date_mut().set_end_date(Some(date(2023, 12, 31)));

        let settings = binder.settings().unwrap();
        assert_eq!(settings.start_date.as_deref(), Some("2023-01-01"));
        assert_eq!(settings.end_date.as_deref(), Some("2023-12-31"));
    }
}
