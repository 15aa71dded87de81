//! Presentation adapter for prediction results.
//!
//! Maps a prediction record to labeled display entries: the value formatted
//! at its fixed precision, the display unit, the range caption shown under
//! the bar, and a bar fill fraction normalized into [0, 1] by a per-metric
//! display range.

use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

use super::{DescriptorSpec, Prediction};
use crate::models::{
    li_ion::LiIonPrediction, supercapacitor::SupercapacitorPrediction, teng::TengPrediction,
};

/// A bar fill fraction for rendering a metric as a proportional bar.
///
/// The fraction must lie in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFraction(Constrained<Ratio, UnitInterval>);

impl BarFraction {
    /// Creates a [`BarFraction`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Creates a [`BarFraction`] from a quantity with ratio units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for BarFraction {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Display range used to normalize a metric into a bar fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    /// Normalizes a value into this range, clamped into [0, 1].
    ///
    /// Values are not bounded to their display ranges, so the fraction
    /// saturates at the ends. A NaN value yields an empty bar.
    #[must_use]
    pub fn fraction(&self, value: f64) -> BarFraction {
        let raw = (value - self.min) / (self.max - self.min);
        let clamped = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
        BarFraction::new(clamped).expect("clamped fraction is always within [0, 1]")
    }
}

/// One rendered performance metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDisplay {
    /// Metric name.
    pub label: &'static str,

    /// Value formatted at the metric's fixed precision.
    pub value: String,

    /// Display unit, empty for dimensionless metrics.
    pub unit: &'static str,

    /// Range caption shown alongside the bar.
    pub range: &'static str,

    /// Bar fill fraction over the metric's display range.
    pub fraction: BarFraction,
}

/// Renders a prediction as labeled metrics, in presentation order.
#[must_use]
pub fn metrics(prediction: &Prediction) -> Vec<MetricDisplay> {
    match prediction {
        Prediction::Teng(p) => teng_metrics(p),
        Prediction::LiIon(p) => li_ion_metrics(p),
        Prediction::Supercapacitor(p) => supercapacitor_metrics(p),
    }
}

/// Formats a descriptor's current value for its slider readout.
///
/// Fractional-step descriptors show one decimal, coarse-step descriptors
/// (molecular weight) group digits, and everything else prints as a whole
/// number.
#[must_use]
pub fn descriptor_value(spec: &DescriptorSpec, value: f64) -> String {
    if spec.step < 1.0 {
        format!("{value:.1}")
    } else if spec.step >= 1000.0 {
        group_digits(value.round() as u32)
    } else {
        format!("{value:.0}")
    }
}

/// Formats a count with thousands separators.
#[must_use]
pub fn group_digits(count: u32) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn metric(
    label: &'static str,
    value: String,
    unit: &'static str,
    range: &'static str,
    bar: DisplayRange,
    raw: f64,
) -> MetricDisplay {
    MetricDisplay {
        label,
        value,
        unit,
        range,
        fraction: bar.fraction(raw),
    }
}

fn teng_metrics(p: &TengPrediction) -> Vec<MetricDisplay> {
    vec![
        metric(
            "Output Voltage",
            format!("{:.1}", p.output_voltage),
            "V",
            "0-100 V",
            DisplayRange {
                min: 0.0,
                max: 100.0,
            },
            p.output_voltage,
        ),
        metric(
            "Output Current",
            format!("{:.1}", p.output_current),
            "µA",
            "0-50 µA",
            DisplayRange {
                min: 0.0,
                max: 50.0,
            },
            p.output_current,
        ),
        metric(
            "Power Density",
            format!("{:.1}", p.power_density),
            "µW/cm²",
            "0-100 µW/cm²",
            DisplayRange {
                min: 0.0,
                max: 100.0,
            },
            p.power_density,
        ),
        metric(
            "Durability",
            group_digits(p.durability),
            "cycles",
            "0-100,000 cycles",
            DisplayRange {
                min: 0.0,
                max: 100_000.0,
            },
            f64::from(p.durability),
        ),
        metric(
            "Stability",
            p.stability.to_string(),
            "%",
            "0-100%",
            DisplayRange {
                min: 0.0,
                max: 100.0,
            },
            f64::from(p.stability),
        ),
    ]
}

fn li_ion_metrics(p: &LiIonPrediction) -> Vec<MetricDisplay> {
    vec![
        metric(
            "Ionic Conductivity",
            format!("{:.2}", p.ionic_conductivity),
            "mS/cm",
            "0.1-10 mS/cm",
            DisplayRange {
                min: 0.0,
                max: 10.0,
            },
            p.ionic_conductivity,
        ),
        metric(
            "Li+ Transference Number",
            format!("{:.2}", p.li_transference),
            "",
            "0.1-0.8",
            DisplayRange { min: 0.0, max: 0.8 },
            p.li_transference,
        ),
        metric(
            "Electrochemical Stability Window",
            format!("{:.1}", p.stability_window),
            "V",
            "3-5 V",
            DisplayRange { min: 3.0, max: 5.0 },
            p.stability_window,
        ),
        metric(
            "Cycle Life",
            p.cycle_life.to_string(),
            "cycles",
            "0-1000 cycles",
            DisplayRange {
                min: 0.0,
                max: 1000.0,
            },
            f64::from(p.cycle_life),
        ),
        metric(
            "Capacity Retention",
            p.capacity_retention.to_string(),
            "%",
            "0-100%",
            DisplayRange {
                min: 0.0,
                max: 100.0,
            },
            f64::from(p.capacity_retention),
        ),
    ]
}

fn supercapacitor_metrics(p: &SupercapacitorPrediction) -> Vec<MetricDisplay> {
    vec![
        metric(
            "Energy Density",
            format!("{:.2}", p.energy_density),
            "Wh/kg",
            "0-100 Wh/kg",
            DisplayRange {
                min: 0.0,
                max: 100.0,
            },
            p.energy_density,
        ),
        metric(
            "Power Density",
            group_digits(p.power_density),
            "W/kg",
            "0-10,000 W/kg",
            DisplayRange {
                min: 0.0,
                max: 10_000.0,
            },
            f64::from(p.power_density),
        ),
        metric(
            "Specific Capacitance",
            p.specific_capacitance.to_string(),
            "F/g",
            "0-500 F/g",
            DisplayRange {
                min: 0.0,
                max: 500.0,
            },
            f64::from(p.specific_capacitance),
        ),
        metric(
            "Cycle Life",
            group_digits(p.cycle_life),
            "cycles",
            "0-100,000 cycles",
            DisplayRange {
                min: 0.0,
                max: 100_000.0,
            },
            f64::from(p.cycle_life),
        ),
        metric(
            "Overall Performance Score",
            format!("{:.1}", p.performance_score),
            "",
            "Out of 100",
            DisplayRange {
                min: 0.0,
                max: 100.0,
            },
            p.performance_score,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::screening::{Application, Session, registry};

    #[test]
    fn teng_defaults_render_with_fixed_precision() {
        let rendered = metrics(&Session::new().predict_active());

        let values: Vec<&str> = rendered.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["65.3", "37.7", "76.0", "62,333", "62"]);

        assert_eq!(rendered[0].unit, "V");
        assert_relative_eq!(rendered[0].fraction.get::<ratio>(), 0.653, epsilon = 1e-12);
        assert_relative_eq!(
            rendered[3].fraction.get::<ratio>(),
            0.62333,
            epsilon = 1e-12
        );
    }

    #[test]
    fn li_ion_defaults_render_with_fixed_precision() {
        let mut session = Session::new();
        session.select(Application::LiIon);

        let rendered = metrics(&session.predict_active());

        let values: Vec<&str> = rendered.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["5.53", "0.50", "4.3", "570", "57"]);
    }

    #[test]
    fn supercapacitor_defaults_render_with_fixed_precision() {
        let mut session = Session::new();
        session.select(Application::Supercapacitor);

        let rendered = metrics(&session.predict_active());

        let values: Vec<&str> = rendered.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["62.00", "6,100", "310", "57,000", "61.7"]);
        assert_eq!(rendered[4].range, "Out of 100");
    }

    #[test]
    fn stability_window_bar_uses_an_offset_range() {
        let bar = DisplayRange { min: 3.0, max: 5.0 };

        assert_relative_eq!(bar.fraction(4.25).get::<ratio>(), 0.625);
        assert_relative_eq!(bar.fraction(3.0).get::<ratio>(), 0.0);
        assert_relative_eq!(bar.fraction(5.0).get::<ratio>(), 1.0);
    }

    #[test]
    fn fractions_clamp_at_both_ends() {
        let bar = DisplayRange {
            min: 0.0,
            max: 100.0,
        };

        assert_relative_eq!(bar.fraction(150.0).get::<ratio>(), 1.0);
        assert_relative_eq!(bar.fraction(-5.0).get::<ratio>(), 0.0);
    }

    #[test]
    fn nan_renders_as_an_empty_bar() {
        let bar = DisplayRange {
            min: 0.0,
            max: 100.0,
        };

        assert_relative_eq!(bar.fraction(f64::NAN).get::<ratio>(), 0.0);
    }

    #[test]
    fn group_digits_inserts_thousands_separators() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(62_333), "62,333");
        assert_eq!(group_digits(100_000), "100,000");
    }

    #[test]
    fn descriptor_readouts_follow_their_steps() {
        let teng = registry::descriptors(Application::Teng);
        assert_eq!(descriptor_value(&teng[0], 2.5), "2.5");
        assert_eq!(descriptor_value(&teng[1], 400.0), "400");

        let li_ion = registry::descriptors(Application::LiIon);
        assert_eq!(descriptor_value(&li_ion[3], 50_000.0), "50,000");
    }
}
