use crate::models::{
    li_ion::{LiIon, LiIonDescriptors, LiIonPrediction},
    supercapacitor::{Supercapacitor, SupercapacitorDescriptors, SupercapacitorPrediction},
    teng::{Teng, TengDescriptors, TengPrediction},
};

use super::{Application, DescriptorError, DescriptorValues, registry::id};

/// A prediction for whichever application is active in a [`Session`].
///
/// The output shape differs per application, so the session returns a
/// variant per model rather than a common record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    Teng(TengPrediction),
    LiIon(LiIonPrediction),
    Supercapacitor(SupercapacitorPrediction),
}

impl Prediction {
    /// The application this prediction belongs to.
    #[must_use]
    pub fn application(&self) -> Application {
        match self {
            Prediction::Teng(_) => Application::Teng,
            Prediction::LiIon(_) => Application::LiIon,
            Prediction::Supercapacitor(_) => Application::Supercapacitor,
        }
    }
}

/// Mutable screening state: the active application plus independent live
/// descriptor values for all three applications.
///
/// Switching applications never touches descriptor values, and values set
/// for one application never affect another. A session owns its state
/// outright and is not synchronized; concurrent use requires one session
/// per logical user.
///
/// ```
/// use acetate_models::screening::{Application, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.active(), Application::Teng);
///
/// session.select(Application::Supercapacitor);
/// session.reset_active();
/// assert_eq!(
///     session
///         .descriptor(Application::Supercapacitor, "porosity")
///         .unwrap(),
///     70.0
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    active: Application,
    values: [DescriptorValues; 3],
}

impl Session {
    /// Creates a session with every application at registry defaults and
    /// TENGs active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Application::Teng,
            values: [
                DescriptorValues::with_defaults(Application::Teng),
                DescriptorValues::with_defaults(Application::LiIon),
                DescriptorValues::with_defaults(Application::Supercapacitor),
            ],
        }
    }

    /// The currently active application.
    #[must_use]
    pub fn active(&self) -> Application {
        self.active
    }

    /// Switches the active application. No descriptor values change.
    pub fn select(&mut self, application: Application) {
        self.active = application;
    }

    /// Current descriptor values for an application, for rendering input
    /// controls.
    #[must_use]
    pub fn values(&self, application: Application) -> &DescriptorValues {
        &self.values[application.index()]
    }

    /// Current value of one descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownDescriptor`] if `id` is not in the
    /// application's registry.
    pub fn descriptor(&self, application: Application, id: &str) -> Result<f64, DescriptorError> {
        self.values[application.index()].get(id)
    }

    /// Overwrites one descriptor value. No clamping is applied.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownDescriptor`] if `id` is not in the
    /// application's registry.
    pub fn set_descriptor(
        &mut self,
        application: Application,
        id: &str,
        value: f64,
    ) -> Result<(), DescriptorError> {
        self.values[application.index()].set(id, value)
    }

    /// Resets the active application's descriptors to registry defaults.
    /// Other applications are untouched.
    pub fn reset_active(&mut self) {
        self.values[self.active.index()].reset();
    }

    /// Computes the active application's prediction from its current
    /// descriptor values.
    #[must_use]
    pub fn predict_active(&self) -> Prediction {
        let values = &self.values[self.active.index()];
        match self.active {
            Application::Teng => Prediction::Teng(Teng::predict(&teng_descriptors(values))),
            Application::LiIon => Prediction::LiIon(LiIon::predict(&li_ion_descriptors(values))),
            Application::Supercapacitor => Prediction::Supercapacitor(Supercapacitor::predict(
                &supercapacitor_descriptors(values),
            )),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn teng_descriptors(values: &DescriptorValues) -> TengDescriptors {
    TengDescriptors::new(
        own_value(values, id::DS),
        own_value(values, id::FIBER_DIAMETER),
        own_value(values, id::POROSITY),
    )
}

fn li_ion_descriptors(values: &DescriptorValues) -> LiIonDescriptors {
    LiIonDescriptors::new(
        own_value(values, id::POROSITY),
        own_value(values, id::PORE_SIZE),
        own_value(values, id::DS),
        own_value(values, id::MOLECULAR_WEIGHT),
    )
}

fn supercapacitor_descriptors(values: &DescriptorValues) -> SupercapacitorDescriptors {
    SupercapacitorDescriptors::new(
        own_value(values, id::SPECIFIC_SURFACE_AREA),
        own_value(values, id::POROSITY),
        own_value(values, id::PORE_SIZE),
        own_value(values, id::ELECTROLYTE_UPTAKE),
        own_value(values, id::MOLECULAR_WEIGHT),
    )
}

fn own_value(values: &DescriptorValues, id: &str) -> f64 {
    values
        .get(id)
        .expect("registry ids are always present in their own value set")
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn starts_with_tengs_active_at_defaults() {
        let session = Session::new();

        assert_eq!(session.active(), Application::Teng);

        let Prediction::Teng(p) = session.predict_active() else {
            panic!("expected a TENG prediction");
        };
        assert_relative_eq!(p.output_voltage, 65.3);
        assert_eq!(p.durability, 62_333);
    }

    #[test]
    fn prediction_is_idempotent() {
        let mut session = Session::new();
        session.select(Application::Supercapacitor);
        session
            .set_descriptor(Application::Supercapacitor, id::POROSITY, 83.0)
            .unwrap();

        assert_eq!(session.predict_active(), session.predict_active());
    }

    #[test]
    fn select_has_no_side_effects_on_values() {
        let mut session = Session::new();
        session
            .set_descriptor(Application::LiIon, id::POROSITY, 77.0)
            .unwrap();

        session.select(Application::LiIon);
        session.select(Application::Teng);
        session.select(Application::LiIon);

        assert_relative_eq!(
            session.descriptor(Application::LiIon, id::POROSITY).unwrap(),
            77.0
        );
    }

    #[test]
    fn applications_are_isolated() {
        let mut session = Session::new();
        let baseline = session.predict_active();

        session
            .set_descriptor(Application::LiIon, id::POROSITY, 79.0)
            .unwrap();
        session
            .set_descriptor(Application::Supercapacitor, id::PORE_SIZE, 45.0)
            .unwrap();

        // Still on TENGs: its values and prediction are untouched.
        assert_eq!(session.predict_active(), baseline);
        assert_relative_eq!(
            session.descriptor(Application::Teng, id::POROSITY).unwrap(),
            70.0
        );
    }

    #[test]
    fn reset_only_touches_the_active_application() {
        let mut session = Session::new();
        session
            .set_descriptor(Application::Teng, id::DS, 1.1)
            .unwrap();
        session
            .set_descriptor(Application::Teng, id::POROSITY, 91.0)
            .unwrap();
        session
            .set_descriptor(Application::LiIon, id::DS, 2.9)
            .unwrap();

        session.reset_active();

        assert_relative_eq!(session.descriptor(Application::Teng, id::DS).unwrap(), 2.5);
        assert_relative_eq!(
            session.descriptor(Application::Teng, id::POROSITY).unwrap(),
            70.0
        );
        assert_relative_eq!(session.descriptor(Application::LiIon, id::DS).unwrap(), 2.9);
    }

    #[test]
    fn reset_then_predict_matches_a_fresh_session() {
        let mut session = Session::new();
        session
            .set_descriptor(Application::Teng, id::FIBER_DIAMETER, 1500.0)
            .unwrap();

        session.reset_active();

        assert_eq!(session.predict_active(), Session::new().predict_active());
    }

    #[test]
    fn out_of_range_values_flow_into_the_prediction() {
        let mut session = Session::new();
        session
            .set_descriptor(Application::Teng, id::POROSITY, 150.0)
            .unwrap();

        let Prediction::Teng(p) = session.predict_active() else {
            panic!("expected a TENG prediction");
        };
        assert_relative_eq!(p.output_voltage, 105.3);
    }

    #[test]
    fn unknown_descriptor_is_rejected() {
        let mut session = Session::new();

        let err = session
            .set_descriptor(Application::Teng, id::PORE_SIZE, 10.0)
            .unwrap_err();

        assert!(matches!(err, DescriptorError::UnknownDescriptor { .. }));
    }

    #[test]
    fn prediction_reports_its_application() {
        let mut session = Session::new();

        for application in Application::ALL {
            session.select(application);
            assert_eq!(session.predict_active().application(), application);
        }
    }
}
