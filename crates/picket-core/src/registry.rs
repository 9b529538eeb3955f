//! One-shot control registration.
//!
//! The surrounding form framework installs the picker control type once per
//! process. The latch is an explicit registry object handed by reference to
//! whatever composes the framework binding, not a hidden static flag: the
//! first [`PickerRegistry::register`] call wins, every later one fails and
//! leaves the installed descriptor untouched.

use crate::binder::{DateTimeBinder, DEFAULT_LANGUAGE, W3C_DATE_FORMAT, W3C_TIME_FORMAT};
use crate::error::{PickerError, Result};

/// Default extension-hook name offered to the framework
pub const DEFAULT_HOOK_NAME: &str = "add_date_time_picker";

/// Factory parameters for creating bound control instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Name of the extension hook installed into the framework
    pub hook_name: String,
    /// Date picker format for created controls
    pub date_format: String,
    /// Time picker format for created controls
    pub time_format: String,
    /// Widget language for created controls
    pub language: String,
}

impl Default for ControlDescriptor {
    fn default() -> Self {
        Self {
            hook_name: DEFAULT_HOOK_NAME.to_string(),
            date_format: W3C_DATE_FORMAT.to_string(),
            time_format: W3C_TIME_FORMAT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Process-wide registration latch for the picker control type.
#[derive(Debug, Default)]
pub struct PickerRegistry {
    installed: Option<ControlDescriptor>,
}

impl PickerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the control factory descriptor.
    ///
    /// # Errors
    ///
    /// Fails with [`PickerError::AlreadyRegistered`] on every call after the
    /// first. The failure is fatal to the call only; the first descriptor
    /// stays installed.
    pub fn register(&mut self, descriptor: ControlDescriptor) -> Result<()> {
        if let Some(installed) = &self.installed {
            return Err(PickerError::AlreadyRegistered {
                name: installed.hook_name.clone(),
            });
        }
        self.installed = Some(descriptor);
        Ok(())
    }

    /// Whether a control type has been registered.
    pub fn is_registered(&self) -> bool {
        self.installed.is_some()
    }

    /// The installed descriptor, if any.
    pub fn descriptor(&self) -> Option<&ControlDescriptor> {
        self.installed.as_ref()
    }

    /// Creates a bound control instance from the installed descriptor.
    pub fn create_control(&self) -> Option<DateTimeBinder> {
        self.installed.as_ref().map(|d| {
            DateTimeBinder::new(
                d.date_format.clone(),
                d.time_format.clone(),
                d.language.clone(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_succeeds() {
        let mut registry = PickerRegistry::new();
        assert!(!registry.is_registered());

        registry.register(ControlDescriptor::default()).unwrap();
        assert!(registry.is_registered());
    }

    #[test]
    fn test_second_registration_fails_and_keeps_first() {
        let mut registry = PickerRegistry::new();
        registry.register(ControlDescriptor::default()).unwrap();

        let second = ControlDescriptor {
            hook_name: "other_hook".to_string(),
            ..ControlDescriptor::default()
        };
        let result = registry.register(second);
        assert!(matches!(
            result,
            Err(PickerError::AlreadyRegistered { name }) if name == DEFAULT_HOOK_NAME
        ));
        assert_eq!(
            registry.descriptor().map(|d| d.hook_name.as_str()),
            Some(DEFAULT_HOOK_NAME)
        );
    }

    #[test]
    fn test_create_control_uses_descriptor_formats() {
        let mut registry = PickerRegistry::new();
        registry
            .register(ControlDescriptor {
                hook_name: DEFAULT_HOOK_NAME.to_string(),
                date_format: "dd.mm.yyyy".to_string(),
                time_format: "hh:ii:ss".to_string(),
                language: "cs".to_string(),
            })
            .unwrap();

        let binder = registry.create_control().expect("registered");
        assert_eq!(binder.date().date_format(), "dd.mm.yyyy");
        assert_eq!(binder.time_format(), "hh:ii:ss");
        assert_eq!(binder.date().language(), "cs");
    }

    #[test]
    fn test_create_control_before_registration() {
        assert!(PickerRegistry::new().create_control().is_none());
    }
}
