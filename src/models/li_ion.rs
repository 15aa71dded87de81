//! Li-ion battery electrolyte/separator performance model.
//!
//! Predicts transport and cycling metrics for a porous cellulose acetate
//! membrane used as a gel electrolyte host or separator. Porosity and pore
//! size drive ion transport; chain chemistry (degree of substitution) and
//! molecular weight drive the electrochemical window and cycling life.

mod core;

pub use core::{LiIonDescriptors, LiIonPrediction};

use std::convert::Infallible;

use twine_core::Model;

/// Model adapter for Li-ion membrane performance prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiIon;

impl LiIon {
    /// Predicts Li-ion membrane performance from its descriptors.
    #[must_use]
    pub fn predict(descriptors: &LiIonDescriptors) -> LiIonPrediction {
        core::predict(descriptors)
    }
}

impl Model for LiIon {
    type Input = LiIonDescriptors;
    type Output = LiIonPrediction;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::predict(input))
    }
}
