//! Supercapacitor electrode/separator performance model.
//!
//! Predicts energy storage metrics for a cellulose-acetate-derived porous
//! carbon electrode with its separator. Surface area and porosity dominate
//! capacitance and power; molecular weight of the precursor governs
//! mechanical stability and cycling life. A composite performance score
//! summarizes the balance of energy, power, and capacitance.

mod core;

pub use core::{SupercapacitorDescriptors, SupercapacitorPrediction};

use std::convert::Infallible;

use twine_core::Model;

/// Model adapter for supercapacitor performance prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Supercapacitor;

impl Supercapacitor {
    /// Predicts supercapacitor performance from material descriptors.
    #[must_use]
    pub fn predict(descriptors: &SupercapacitorDescriptors) -> SupercapacitorPrediction {
        core::predict(descriptors)
    }
}

impl Model for Supercapacitor {
    type Input = SupercapacitorDescriptors;
    type Output = SupercapacitorPrediction;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::predict(input))
    }
}
