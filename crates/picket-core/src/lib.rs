//! Core library for the Picket date/time picker field binding.
//!
//! A single logical date-time value is edited as two sub-fields, a date part
//! and a time part, each described by a compact picker-notation format
//! (`yyyy-mm-dd`, `hh:ii`, ...). This crate is the translation and binding
//! core behind such a control:
//!
//! - [`format`]: translates picker notation into the strftime-style syntax
//!   that [`jiff`] parses and formats natively
//! - [`codec`]: joins the two sub-formats/sub-texts and parses or renders
//!   whole values against the combined format
//! - [`value`]: normalizes heterogeneous input (structured value, epoch
//!   seconds, text, nothing) into one `(value, raw)` contract
//! - [`binder`]: merges submitted sub-field pairs into a control value and
//!   derives the widget settings for the rendering layer
//! - [`registry`]: the one-shot latch through which the surrounding form
//!   framework installs the control type
//!
//! Markup construction, template wiring, and the client-side calendar widget
//! itself are external collaborators and live outside this crate.
//!
//! # Quick Start
//!
//! ```rust
//! use picket_core::{DateTimeBinder, FieldPair};
//!
//! # fn example() -> picket_core::Result<()> {
//! let mut binder = DateTimeBinder::default();
//!
//! // Merge the two submitted sub-fields into one value
//! let value = binder.bind(&FieldPair::new("2023-07-01", "14:30"));
//! assert!(value.is_some());
//!
//! // Render the value back into its sub-fields
//! assert_eq!(binder.render_date()?, "2023-07-01");
//! assert_eq!(binder.render_time()?, "14:30");
//!
//! // Derive the widget configuration for the rendering layer
//! let settings = binder.settings()?;
//! assert_eq!(settings.format, "yyyy-mm-dd hh:ii");
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod codec;
pub mod error;
pub mod format;
pub mod registry;
pub mod settings;
pub mod value;

// Re-export commonly used types
pub use binder::{
    date_field_name, time_field_name, DateBinder, DateTimeBinder, FieldPair, FieldSource,
    DEFAULT_LANGUAGE, W3C_DATE_FORMAT, W3C_TIME_FORMAT,
};
pub use codec::{FieldCodec, MERGE_SEPARATOR};
pub use error::{PickerError, Result};
pub use format::to_native_format;
pub use registry::{ControlDescriptor, PickerRegistry, DEFAULT_HOOK_NAME};
pub use settings::{PickerSettings, ViewLevel};
pub use value::{normalize, Normalized, PickerInput, RawValue};
