use std::fmt;

/// The target energy-device application being screened.
///
/// The set is closed: every application has its own descriptor registry,
/// prediction model, and output shape. Selecting a different application is
/// a pure context switch with independent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Application {
    /// Triboelectric nanogenerators.
    Teng,
    /// Li-ion battery electrolytes and separators.
    LiIon,
    /// Supercapacitor electrodes and separators.
    Supercapacitor,
}

impl Application {
    /// All applications, in presentation order.
    pub const ALL: [Application; 3] = [
        Application::Teng,
        Application::LiIon,
        Application::Supercapacitor,
    ];

    /// Display name for selection controls.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Application::Teng => "TENGs",
            Application::LiIon => "Li-ion Batteries",
            Application::Supercapacitor => "Supercapacitors",
        }
    }

    /// One-line tagline shown under the name in selection controls.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Application::Teng => "Triboelectric Nanogenerators",
            Application::LiIon => "Electrolytes & Separators",
            Application::Supercapacitor => "Energy Storage Devices",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Application::Teng => 0,
            Application::LiIon => 1,
            Application::Supercapacitor => 2,
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
