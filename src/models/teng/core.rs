//! Computation for the TENG membrane model.

use uom::si::{
    f64::{Length, Ratio},
    length::nanometer,
    ratio::{percent, ratio},
};

use crate::support::rounding::{one_decimal, whole};

/// Membrane descriptors for a TENG contact layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TengDescriptors {
    /// Degree of substitution: acetyl groups per anhydroglucose unit.
    pub degree_of_substitution: Ratio,

    /// Average diameter of the electrospun fibers.
    pub fiber_diameter: Length,

    /// Pore volume fraction of the membrane.
    pub porosity: Ratio,
}

impl TengDescriptors {
    /// Creates descriptors from display-unit scalars: dimensionless degree
    /// of substitution, fiber diameter in nanometres, porosity in percent.
    #[must_use]
    pub fn new(degree_of_substitution: f64, fiber_diameter_nm: f64, porosity_pct: f64) -> Self {
        Self {
            degree_of_substitution: Ratio::new::<ratio>(degree_of_substitution),
            fiber_diameter: Length::new::<nanometer>(fiber_diameter_nm),
            porosity: Ratio::new::<percent>(porosity_pct),
        }
    }
}

/// Predicted TENG performance metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TengPrediction {
    /// Open-circuit output voltage in V, one-decimal precision.
    pub output_voltage: f64,

    /// Short-circuit output current in µA, one-decimal precision.
    pub output_current: f64,

    /// Areal power density in µW/cm², one-decimal precision.
    pub power_density: f64,

    /// Contact-separation cycles before output degradation.
    pub durability: u32,

    /// Output stability over cycling, in percent.
    pub stability: u32,
}

pub(super) fn predict(descriptors: &TengDescriptors) -> TengPrediction {
    let ds = descriptors.degree_of_substitution.get::<ratio>();
    let fiber = descriptors.fiber_diameter.get::<nanometer>();
    let porosity = descriptors.porosity.get::<percent>();

    TengPrediction {
        output_voltage: one_decimal(
            ds / 3.0 * 30.0 + fiber / 1500.0 * 20.0 + porosity / 100.0 * 50.0,
        ),
        output_current: one_decimal(
            ds / 3.0 * 15.0 + (1500.0 - fiber) / 1500.0 * 20.0 + porosity / 100.0 * 15.0,
        ),
        power_density: one_decimal(
            ds / 3.0 * 40.0 + porosity / 100.0 * 40.0 + (1500.0 - fiber) / 1500.0 * 20.0,
        ),
        durability: whole(
            ds / 3.0 * 40_000.0 + fiber / 1500.0 * 30_000.0 + porosity / 100.0 * 30_000.0,
        ),
        stability: whole(ds / 3.0 * 40.0 + fiber / 1500.0 * 30.0 + porosity / 100.0 * 30.0),
    }
}
