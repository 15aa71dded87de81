//! Computation for the Li-ion membrane model.

use uom::si::{
    f64::{Length, MolarMass, Ratio},
    length::nanometer,
    molar_mass::gram_per_mole,
    ratio::{percent, ratio},
};

use crate::support::rounding::{one_decimal, two_decimals, whole};

/// Membrane descriptors for a Li-ion electrolyte host or separator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiIonDescriptors {
    /// Pore volume fraction of the membrane.
    pub porosity: Ratio,

    /// Average pore diameter.
    pub pore_size: Length,

    /// Degree of substitution: acetyl groups per anhydroglucose unit.
    pub degree_of_substitution: Ratio,

    /// Number-average molecular weight of the polymer.
    pub molecular_weight: MolarMass,
}

impl LiIonDescriptors {
    /// Creates descriptors from display-unit scalars: porosity in percent,
    /// pore size in nanometres, dimensionless degree of substitution,
    /// molecular weight in g/mol.
    #[must_use]
    pub fn new(
        porosity_pct: f64,
        pore_size_nm: f64,
        degree_of_substitution: f64,
        molecular_weight_g_mol: f64,
    ) -> Self {
        Self {
            porosity: Ratio::new::<percent>(porosity_pct),
            pore_size: Length::new::<nanometer>(pore_size_nm),
            degree_of_substitution: Ratio::new::<ratio>(degree_of_substitution),
            molecular_weight: MolarMass::new::<gram_per_mole>(molecular_weight_g_mol),
        }
    }
}

/// Predicted Li-ion membrane performance metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiIonPrediction {
    /// Ionic conductivity in mS/cm, two-decimal precision.
    pub ionic_conductivity: f64,

    /// Li⁺ transference number (dimensionless), two-decimal precision.
    pub li_transference: f64,

    /// Electrochemical stability window in V, one-decimal precision.
    pub stability_window: f64,

    /// Charge/discharge cycles before end of life.
    pub cycle_life: u32,

    /// Capacity retained at end of life, in percent.
    pub capacity_retention: u32,
}

pub(super) fn predict(descriptors: &LiIonDescriptors) -> LiIonPrediction {
    let porosity = descriptors.porosity.get::<percent>();
    let pore = descriptors.pore_size.get::<nanometer>();
    let ds = descriptors.degree_of_substitution.get::<ratio>();
    let mw = descriptors.molecular_weight.get::<gram_per_mole>();

    LiIonPrediction {
        ionic_conductivity: two_decimals(
            porosity / 100.0 * 5.0 + pore / 500.0 * 3.0 + ds / 3.0 * 2.0,
        ),
        li_transference: two_decimals(
            ds / 3.0 * 0.4 + porosity / 100.0 * 0.3 + mw / 100_000.0 * 0.1,
        ),
        stability_window: one_decimal(3.0 + ds / 3.0 * 1.5 + mw / 100_000.0 * 0.5),
        cycle_life: whole(mw / 100_000.0 * 500.0 + ds / 3.0 * 300.0 + porosity / 100.0 * 200.0),
        capacity_retention: whole(
            mw / 100_000.0 * 50.0 + ds / 3.0 * 30.0 + porosity / 100.0 * 20.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use twine_core::Model;

    use crate::models::li_ion::LiIon;

    #[test]
    fn default_membrane() {
        let p = predict(&LiIonDescriptors::new(60.0, 200.0, 2.0, 50_000.0));

        assert_relative_eq!(p.ionic_conductivity, 5.53);
        assert_relative_eq!(p.li_transference, 0.5);
        assert_relative_eq!(p.stability_window, 4.3);
        assert_eq!(p.cycle_life, 570);
        assert_eq!(p.capacity_retention, 57);
    }

    #[test]
    fn lower_range_endpoints() {
        let p = predict(&LiIonDescriptors::new(40.0, 50.0, 1.0, 10_000.0));

        assert_relative_eq!(p.ionic_conductivity, 2.97);
        assert_relative_eq!(p.li_transference, 0.26);
        assert_relative_eq!(p.stability_window, 3.5);
        assert_eq!(p.cycle_life, 230);
        assert_eq!(p.capacity_retention, 23);
    }

    #[test]
    fn upper_range_endpoints() {
        let p = predict(&LiIonDescriptors::new(80.0, 500.0, 3.0, 100_000.0));

        assert_relative_eq!(p.ionic_conductivity, 9.0);
        assert_relative_eq!(p.li_transference, 0.74);
        assert_relative_eq!(p.stability_window, 5.0);
        assert_eq!(p.cycle_life, 960);
        assert_eq!(p.capacity_retention, 96);
    }

    #[test]
    fn molecular_weight_widens_stability_window() {
        let low = predict(&LiIonDescriptors::new(60.0, 200.0, 2.0, 10_000.0));
        let high = predict(&LiIonDescriptors::new(60.0, 200.0, 2.0, 100_000.0));

        assert!(high.stability_window > low.stability_window);
        assert!(high.cycle_life > low.cycle_life);
    }

    #[test]
    fn model_adapter_matches_core() {
        let descriptors = LiIonDescriptors::new(60.0, 200.0, 2.0, 50_000.0);

        let adapted = LiIon.call(&descriptors).unwrap();

        assert_eq!(adapted, LiIon::predict(&descriptors));
    }
}
