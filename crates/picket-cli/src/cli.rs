//! Command handlers mapping CLI arguments onto the binding core.

use anyhow::{Context, Result};
use jiff::civil::Date;
use log::debug;
use picket_core::{to_native_format, DateTimeBinder, FieldPair};

/// CLI handler bound to one date/time format configuration.
pub struct Cli {
    binder: DateTimeBinder,
}

impl Cli {
    /// Creates a handler for the given picker formats.
    pub fn new(date_format: &str, time_format: &str) -> Self {
        Self {
            binder: DateTimeBinder::new(date_format, time_format, picket_core::DEFAULT_LANGUAGE),
        }
    }

    /// Prints the native translation of a picker format.
    pub fn translate(&self, format: &str) -> Result<()> {
        println!("{}", to_native_format(format));
        Ok(())
    }

    /// Parses a combined string and prints the normalized value.
    pub fn parse(&mut self, text: &str) -> Result<()> {
        let native = self.binder.codec().native_format();
        debug!("parsing against native format '{native}'");

        self.binder
            .set_value(text)
            .with_context(|| format!("'{text}' is not in format '{native}'"))?;

        match self.binder.value() {
            Some(value) => println!("{value}"),
            None => println!("no value"),
        }
        Ok(())
    }

    /// Merges two sub-field texts and prints the bound value.
    ///
    /// Mirrors form binding: unparseable or partial input prints `no value`
    /// instead of failing.
    pub fn merge(&mut self, date_text: &str, time_text: &str) -> Result<()> {
        match self.binder.bind(&FieldPair::new(date_text, time_text)) {
            Some(value) => println!("{value}"),
            None => println!("no value"),
        }
        Ok(())
    }

    /// Prints the widget settings as JSON.
    pub fn settings(
        &mut self,
        meridian: bool,
        language: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        value: Option<&str>,
    ) -> Result<()> {
        self.binder.set_show_meridian(meridian);
        self.binder.date_mut().set_language(language);

        if let Some(text) = start_date {
            let day: Date = text.parse().context("invalid --start-date")?;
            self.binder.date_mut().set_start_date(Some(day));
        }
        if let Some(text) = end_date {
            let day: Date = text.parse().context("invalid --end-date")?;
            self.binder.date_mut().set_end_date(Some(day));
        }
        if let Some(text) = value {
            self.binder
                .set_value(text)
                .context("invalid initial value")?;
        }

        let settings = self.binder.settings().context("cannot derive settings")?;
        println!("{}", serde_json::to_string_pretty(&settings)?);
        Ok(())
    }
}
