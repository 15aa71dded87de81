//! Prediction models.
//!
//! Models are the primary public interface of this crate: one per target
//! application, each mapping that application's material descriptors to a
//! fixed-shape record of predicted performance metrics.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation lives. The [`twine_core::Model`]
//! implementation is a thin adapter that delegates to the core.
//!
//! # Prediction character
//!
//! The predictions are first-stage process-to-architecture correlations:
//! weighted sums of normalized descriptor fractions with fixed empirical
//! coefficients, rounded to each metric's display precision. They are
//! deterministic and total — no bounds checking happens inside a model, so
//! out-of-range descriptors still produce a numeric result. Input controls
//! own range enforcement.

pub mod li_ion;
pub mod supercapacitor;
pub mod teng;
