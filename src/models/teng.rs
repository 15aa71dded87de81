//! Triboelectric nanogenerator (TENG) performance model.
//!
//! Predicts the electrical output and longevity of an electrospun cellulose
//! acetate membrane used as the contact layer of a TENG. Higher degrees of
//! substitution and porosity raise the triboelectric output; thinner fibers
//! trade voltage for current.

mod core;

pub use core::{TengDescriptors, TengPrediction};

use std::convert::Infallible;

use twine_core::Model;

/// Model adapter for TENG membrane performance prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Teng;

impl Teng {
    /// Predicts TENG performance from membrane descriptors.
    #[must_use]
    pub fn predict(descriptors: &TengDescriptors) -> TengPrediction {
        core::predict(descriptors)
    }
}

impl Model for Teng {
    type Input = TengDescriptors;
    type Output = TengPrediction;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::predict(input))
    }
}
