//! Static descriptor registry.
//!
//! Supplies range, default, step, and display metadata for every descriptor
//! of every application. The registry is pure metadata: it performs no
//! validation and never changes at runtime.

use super::{Application, DescriptorSpec};

/// Descriptor identifiers used across the registry tables.
///
/// Identifiers are unique within an application; `porosity` and a few
/// others appear in more than one application with different ranges.
pub mod id {
    pub const DS: &str = "DS";
    pub const FIBER_DIAMETER: &str = "fiberDiameter";
    pub const POROSITY: &str = "porosity";
    pub const PORE_SIZE: &str = "poreSize";
    pub const MOLECULAR_WEIGHT: &str = "molecularWeight";
    pub const SPECIFIC_SURFACE_AREA: &str = "specificSurfaceArea";
    pub const ELECTROLYTE_UPTAKE: &str = "electrolyteUptake";
}

/// TENG membrane descriptors.
pub const TENG: [DescriptorSpec; 3] = [
    DescriptorSpec {
        id: id::DS,
        label: "Degree of Substitution (DS)",
        unit: "",
        min: 0.5,
        max: 3.0,
        default: 2.5,
        step: 0.1,
        description: "Number of acetyl groups per anhydroglucose unit. Higher DS increases \
                      hydrophobicity and affects surface charge polarity, directly impacting \
                      triboelectric performance.",
    },
    DescriptorSpec {
        id: id::FIBER_DIAMETER,
        label: "Fiber Diameter",
        unit: "nm",
        min: 150.0,
        max: 1500.0,
        default: 400.0,
        step: 10.0,
        description: "Average diameter of electrospun fibers. Smaller diameters increase \
                      surface area and contact points, enhancing triboelectric charge transfer.",
    },
    DescriptorSpec {
        id: id::POROSITY,
        label: "Porosity",
        unit: "%",
        min: 60.0,
        max: 95.0,
        default: 70.0,
        step: 1.0,
        description: "Volume fraction of pores within the material. Higher porosity increases \
                      surface roughness and effective contact area, improving triboelectric \
                      output.",
    },
];

/// Li-ion electrolyte/separator descriptors.
pub const LI_ION: [DescriptorSpec; 4] = [
    DescriptorSpec {
        id: id::POROSITY,
        label: "Porosity",
        unit: "%",
        min: 40.0,
        max: 80.0,
        default: 60.0,
        step: 1.0,
        description: "Volume fraction of pores within the material. Higher porosity \
                      facilitates ion transport and electrolyte uptake.",
    },
    DescriptorSpec {
        id: id::PORE_SIZE,
        label: "Pore Size",
        unit: "nm",
        min: 50.0,
        max: 500.0,
        default: 200.0,
        step: 10.0,
        description: "Average pore diameter. Optimal pore size ensures efficient ion flow and \
                      prevents dendrite formation.",
    },
    DescriptorSpec {
        id: id::DS,
        label: "Degree of Substitution (DS)",
        unit: "",
        min: 1.0,
        max: 3.0,
        default: 2.0,
        step: 0.1,
        description: "Affects polymer chain flexibility and ion coordination sites.",
    },
    DescriptorSpec {
        id: id::MOLECULAR_WEIGHT,
        label: "Molecular Weight (MW)",
        unit: "g/mol",
        min: 10_000.0,
        max: 100_000.0,
        default: 50_000.0,
        step: 1000.0,
        description: "Affects mechanical strength and processability.",
    },
];

/// Supercapacitor electrode/separator descriptors.
pub const SUPERCAPACITOR: [DescriptorSpec; 5] = [
    DescriptorSpec {
        id: id::SPECIFIC_SURFACE_AREA,
        label: "Specific Surface Area",
        unit: "m²/g",
        min: 500.0,
        max: 2500.0,
        default: 1500.0,
        step: 50.0,
        description: "Critical for ion diffusion and electrolyte uptake. High surface area in \
                      activated carbon derivatives increases capacitance.",
    },
    DescriptorSpec {
        id: id::POROSITY,
        label: "Porosity",
        unit: "%",
        min: 50.0,
        max: 90.0,
        default: 70.0,
        step: 1.0,
        description: "Controlled porosity is essential for optimal ion diffusion and \
                      electrolyte uptake in separators and electrodes.",
    },
    DescriptorSpec {
        id: id::PORE_SIZE,
        label: "Pore Size",
        unit: "nm",
        min: 2.0,
        max: 50.0,
        default: 20.0,
        step: 1.0,
        description: "Affects ion accessibility and electrolyte retention. Micropores (<2nm) \
                      for high capacitance, mesopores (2-50nm) for ion transport.",
    },
    DescriptorSpec {
        id: id::ELECTROLYTE_UPTAKE,
        label: "Electrolyte Uptake",
        unit: "%",
        min: 100.0,
        max: 400.0,
        default: 200.0,
        step: 10.0,
        description: "Ability to absorb and retain electrolyte. Higher uptake improves ionic \
                      conductivity and overall performance.",
    },
    DescriptorSpec {
        id: id::MOLECULAR_WEIGHT,
        label: "Molecular Weight (MW)",
        unit: "g/mol",
        min: 20_000.0,
        max: 100_000.0,
        default: 50_000.0,
        step: 1000.0,
        description: "Affects mechanical stability and flexibility. Important for flexible \
                      supercapacitor applications.",
    },
];

/// Returns the descriptor table for an application, in presentation order.
#[must_use]
pub fn descriptors(application: Application) -> &'static [DescriptorSpec] {
    match application {
        Application::Teng => &TENG,
        Application::LiIon => &LI_ION,
        Application::Supercapacitor => &SUPERCAPACITOR,
    }
}
