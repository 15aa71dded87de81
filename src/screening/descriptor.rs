use thiserror::Error;

use super::{Application, registry};

/// Static metadata for one adjustable material descriptor.
///
/// The registry supplies one table of these per application; the entries
/// never change at runtime. Range metadata is advisory — value storage does
/// not clamp to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorSpec {
    /// Identifier, unique within an application.
    pub id: &'static str,

    /// Human-readable label for input controls.
    pub label: &'static str,

    /// Display unit, empty when dimensionless.
    pub unit: &'static str,

    /// Inclusive lower bound of the adjustable range.
    pub min: f64,

    /// Inclusive upper bound of the adjustable range.
    pub max: f64,

    /// Default value, also the reset target.
    pub default: f64,

    /// Increment for slider controls.
    pub step: f64,

    /// One-sentence description shown under the control.
    pub description: &'static str,
}

/// An error for descriptor lookups that violate the registry contract.
///
/// The registry is closed and static, so an unknown identifier is a
/// programming error in the calling application and fails fast rather than
/// silently doing nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("unknown descriptor `{id}` for {application}")]
    UnknownDescriptor {
        application: Application,
        id: String,
    },
}

/// Live descriptor values for one application, in registry order.
///
/// Values mutate only through [`set`](Self::set) and
/// [`reset`](Self::reset); descriptors are never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorValues {
    application: Application,
    values: Vec<f64>,
}

impl DescriptorValues {
    /// Creates the value set for an application, populated with registry
    /// defaults.
    #[must_use]
    pub fn with_defaults(application: Application) -> Self {
        let values = registry::descriptors(application)
            .iter()
            .map(|spec| spec.default)
            .collect();
        Self {
            application,
            values,
        }
    }

    /// The application these values belong to.
    #[must_use]
    pub fn application(&self) -> Application {
        self.application
    }

    /// Returns the current value of a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownDescriptor`] if `id` is not in
    /// this application's registry.
    pub fn get(&self, id: &str) -> Result<f64, DescriptorError> {
        Ok(self.values[self.position(id)?])
    }

    /// Overwrites the current value of a descriptor.
    ///
    /// No clamping is applied; input controls own range enforcement, and
    /// out-of-range values flow into the prediction unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownDescriptor`] if `id` is not in
    /// this application's registry.
    pub fn set(&mut self, id: &str, value: f64) -> Result<(), DescriptorError> {
        let index = self.position(id)?;
        self.values[index] = value;
        Ok(())
    }

    /// Restores every descriptor to its registry default.
    pub fn reset(&mut self) {
        for (value, spec) in self
            .values
            .iter_mut()
            .zip(registry::descriptors(self.application))
        {
            *value = spec.default;
        }
    }

    /// Iterates descriptors with their current values, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static DescriptorSpec, f64)> + '_ {
        registry::descriptors(self.application)
            .iter()
            .zip(self.values.iter().copied())
    }

    fn position(&self, id: &str) -> Result<usize, DescriptorError> {
        registry::descriptors(self.application)
            .iter()
            .position(|spec| spec.id == id)
            .ok_or_else(|| DescriptorError::UnknownDescriptor {
                application: self.application,
                id: id.to_owned(),
            })
    }
}
