//! Computation for the supercapacitor model.

use uom::si::{
    f64::{Length, MolarMass, Ratio},
    length::nanometer,
    molar_mass::gram_per_mole,
    ratio::percent,
};

use crate::support::rounding::{one_decimal, two_decimals, whole};

/// Material descriptors for a supercapacitor electrode and separator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupercapacitorDescriptors {
    /// BET specific surface area in m²/g.
    pub specific_surface_area: f64,

    /// Pore volume fraction of the electrode.
    pub porosity: Ratio,

    /// Average pore diameter.
    pub pore_size: Length,

    /// Electrolyte uptake relative to dry mass.
    pub electrolyte_uptake: Ratio,

    /// Number-average molecular weight of the precursor polymer.
    pub molecular_weight: MolarMass,
}

impl SupercapacitorDescriptors {
    /// Creates descriptors from display-unit scalars: surface area in m²/g,
    /// porosity and electrolyte uptake in percent, pore size in nanometres,
    /// molecular weight in g/mol.
    #[must_use]
    pub fn new(
        specific_surface_area_m2_g: f64,
        porosity_pct: f64,
        pore_size_nm: f64,
        electrolyte_uptake_pct: f64,
        molecular_weight_g_mol: f64,
    ) -> Self {
        Self {
            specific_surface_area: specific_surface_area_m2_g,
            porosity: Ratio::new::<percent>(porosity_pct),
            pore_size: Length::new::<nanometer>(pore_size_nm),
            electrolyte_uptake: Ratio::new::<percent>(electrolyte_uptake_pct),
            molecular_weight: MolarMass::new::<gram_per_mole>(molecular_weight_g_mol),
        }
    }
}

/// Predicted supercapacitor performance metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupercapacitorPrediction {
    /// Gravimetric energy density in Wh/kg, two-decimal precision.
    pub energy_density: f64,

    /// Gravimetric power density in W/kg.
    pub power_density: u32,

    /// Specific capacitance in F/g.
    pub specific_capacitance: u32,

    /// Charge/discharge cycles before end of life.
    pub cycle_life: u32,

    /// Composite performance score out of 100, one-decimal precision.
    pub performance_score: f64,
}

pub(super) fn predict(descriptors: &SupercapacitorDescriptors) -> SupercapacitorPrediction {
    let ssa = descriptors.specific_surface_area;
    let porosity = descriptors.porosity.get::<percent>();
    let pore = descriptors.pore_size.get::<nanometer>();
    let uptake = descriptors.electrolyte_uptake.get::<percent>();
    let mw = descriptors.molecular_weight.get::<gram_per_mole>();

    let energy_density = two_decimals(
        ssa / 2500.0 * 60.0 + porosity / 100.0 * 30.0 + uptake / 400.0 * 10.0,
    );
    let power_density = whole(
        ssa / 2500.0 * 6000.0 + porosity / 100.0 * 3000.0 + pore / 50.0 * 1000.0,
    );
    let specific_capacitance = whole(
        ssa / 2500.0 * 300.0 + porosity / 100.0 * 150.0 + uptake / 400.0 * 50.0,
    );
    let cycle_life = whole(
        mw / 100_000.0 * 50_000.0 + ssa / 2500.0 * 30_000.0 + porosity / 100.0 * 20_000.0,
    );

    // The score is defined over the rounded display values, not the raw sums.
    let performance_score = one_decimal(
        energy_density / 100.0 * 30.0
            + f64::from(power_density) / 10_000.0 * 30.0
            + f64::from(specific_capacitance) / 500.0 * 40.0,
    );

    SupercapacitorPrediction {
        energy_density,
        power_density,
        specific_capacitance,
        cycle_life,
        performance_score,
    }
}
