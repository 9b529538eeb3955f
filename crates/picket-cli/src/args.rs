use clap::{Parser, Subcommand};

/// Main command-line interface for the Picket binding core
///
/// Picket translates between compact picker-notation date/time formats and
/// the native strftime syntax, and binds two-part date/time form input into
/// single values. The CLI exposes those operations for inspection and
/// scripting.
#[derive(Parser)]
#[command(version, about, name = "picket")]
pub struct Args {
    /// Date picker format (tokens: d dd m mm M MM yy yyyy)
    #[arg(long, global = true, default_value = picket_core::W3C_DATE_FORMAT)]
    pub date_format: String,

    /// Time picker format (tokens: h hh i ii s ss p P)
    #[arg(long, global = true, default_value = picket_core::W3C_TIME_FORMAT)]
    pub time_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Picket CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Translate a picker format into native strftime syntax
    #[command(alias = "t")]
    Translate {
        /// Picker-notation format string
        format: String,
    },
    /// Parse a combined "date time" string into a value
    #[command(alias = "p")]
    Parse {
        /// Text in the combined picker format
        text: String,
    },
    /// Merge two sub-field texts the way form binding does
    #[command(alias = "m")]
    Merge {
        /// Date sub-field text
        #[arg(long, default_value = "")]
        date: String,
        /// Time sub-field text
        #[arg(long, default_value = "")]
        time: String,
    },
    /// Print the widget settings for the given configuration
    #[command(alias = "s")]
    Settings {
        /// Enable meridian (AM/PM) views
        #[arg(long)]
        meridian: bool,
        /// Two-letter widget language code
        #[arg(long, default_value = picket_core::DEFAULT_LANGUAGE)]
        language: String,
        /// Earliest selectable day (ISO date)
        #[arg(long)]
        start_date: Option<String>,
        /// Latest selectable day (ISO date)
        #[arg(long)]
        end_date: Option<String>,
        /// Initial value in the combined picker format
        #[arg(long)]
        value: Option<String>,
    },
}
