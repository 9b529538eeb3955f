//! Picker widget settings payload.
//!
//! The rendering layer configures the client widget from a flat string map.
//! [`PickerSettings`] is the typed form, derived read-only from the current
//! binder configuration; [`PickerSettings::to_map`] flattens it to the string
//! map the widget expects, with booleans as the literal strings `"true"` and
//! `"false"` and view levels as their numeric codes.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Navigable view levels of the client widget, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLevel {
    /// Hour selection within a day
    Hour,
    /// Day selection within a month
    Day,
    /// Month selection within a year
    Month,
    /// Year selection within a decade
    Year,
    /// Decade selection
    Decade,
}

impl ViewLevel {
    /// The widget's numeric code for this view level.
    pub fn code(self) -> u8 {
        match self {
            ViewLevel::Hour => 0,
            ViewLevel::Day => 1,
            ViewLevel::Month => 2,
            ViewLevel::Year => 3,
            ViewLevel::Decade => 4,
        }
    }
}

// The widget only understands the numeric codes, so JSON carries those too.
impl Serialize for ViewLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Configuration handed to the external rendering layer.
///
/// Recomputed on every request, never persisted. Bounds are calendar-day
/// strings in the date-only format: bound restriction operates on days even
/// though the value carries a time of day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PickerSettings {
    /// Combined picker-notation format for the widget
    pub format: String,
    /// Whether to offer AM/PM views
    pub show_meridian: bool,
    /// Close the picker as soon as a value is selected
    pub autoclose: bool,
    /// View shown when the picker opens
    pub start_view: ViewLevel,
    /// The lowest view the picker may navigate to
    pub min_view: ViewLevel,
    /// The highest view the picker may navigate to
    pub max_view: ViewLevel,
    /// View at which a value is actually selected
    pub view_select: ViewLevel,
    /// Enable keyboard navigation
    pub keyboard_navigation: bool,
    /// Force parsing of the input value when the picker closes
    pub force_parse: bool,
    /// Two-letter language code for month and day names
    pub language: String,
    /// Current value in the combined format, empty when unset
    pub initial_date: String,
    /// Earliest selectable day, date-only format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Latest selectable day, date-only format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl PickerSettings {
    /// Flattens the settings into the widget's string-keyed map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        fn flag(value: bool) -> String {
            if value { "true" } else { "false" }.to_string()
        }

        let mut map = BTreeMap::new();
        map.insert("format".to_string(), self.format.clone());
        map.insert("showMeridian".to_string(), flag(self.show_meridian));
        map.insert("autoclose".to_string(), flag(self.autoclose));
        map.insert("startView".to_string(), self.start_view.code().to_string());
        map.insert("minView".to_string(), self.min_view.code().to_string());
        map.insert("maxView".to_string(), self.max_view.code().to_string());
        map.insert("viewSelect".to_string(), self.view_select.code().to_string());
        map.insert(
            "keyboardNavigation".to_string(),
            flag(self.keyboard_navigation),
        );
        map.insert("forceParse".to_string(), flag(self.force_parse));
        map.insert("language".to_string(), self.language.clone());
        map.insert("initialDate".to_string(), self.initial_date.clone());
        if let Some(start_date) = &self.start_date {
            map.insert("startDate".to_string(), start_date.clone());
        }
        if let Some(end_date) = &self.end_date {
            map.insert("endDate".to_string(), end_date.clone());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_settings() -> PickerSettings {
        PickerSettings {
            format: "yyyy-mm-dd hh:ii".to_string(),
            show_meridian: false,
            autoclose: true,
            start_view: ViewLevel::Day,
            min_view: ViewLevel::Hour,
            max_view: ViewLevel::Day,
            view_select: ViewLevel::Hour,
            keyboard_navigation: true,
            force_parse: true,
            language: "en".to_string(),
            initial_date: String::new(),
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn test_view_level_codes() {
        assert_eq!(ViewLevel::Hour.code(), 0);
        assert_eq!(ViewLevel::Day.code(), 1);
        assert_eq!(ViewLevel::Decade.code(), 4);
    }

    #[test]
    fn test_to_map_booleans_are_literal_strings() {
        let map = sample_settings().to_map();
        assert_eq!(map.get("showMeridian"), Some(&"false".to_string()));
        assert_eq!(map.get("autoclose"), Some(&"true".to_string()));
    }

    #[test]
    fn test_to_map_view_levels_are_numeric() {
        let map = sample_settings().to_map();
        assert_eq!(map.get("minView"), Some(&"0".to_string()));
        assert_eq!(map.get("maxView"), Some(&"1".to_string()));
    }

    #[test]
    fn test_to_map_omits_unset_bounds() {
        let map = sample_settings().to_map();
        assert!(!map.contains_key("startDate"));
        assert!(!map.contains_key("endDate"));

        let mut settings = sample_settings();
        settings.start_date = Some("2023-01-01".to_string());
        assert_eq!(
            settings.to_map().get("startDate"),
            Some(&"2023-01-01".to_string())
        );
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&sample_settings()).unwrap();
        assert!(json.contains("\"showMeridian\":false"));
        assert!(json.contains("\"initialDate\":\"\""));
        assert!(json.contains("\"minView\":0"));
        assert!(!json.contains("startDate"));
    }
}
