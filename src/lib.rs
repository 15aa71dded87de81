//! # Acetate Models
//!
//! Descriptor-driven performance models for cellulose acetate materials in
//! three energy-device applications: triboelectric nanogenerators (TENGs),
//! Li-ion battery electrolytes and separators, and supercapacitors.
//!
//! ## Crate layout
//!
//! - [`models`]: Per-application prediction models mapping material
//!   descriptors to predicted performance metrics.
//! - [`screening`]: The interactive screening layer: descriptor registry,
//!   session state, and the presentation adapter.
//! - [`support`]: Supporting utilities used across the crate.
//!
//! ## Typical use
//!
//! A UI drives a [`screening::Session`]: it renders input controls from the
//! descriptor registry, writes values back as the user adjusts them, and
//! re-renders the active application's prediction on every change.
//!
//! ```
//! use acetate_models::screening::{Application, Prediction, Session};
//!
//! let mut session = Session::new();
//! session.select(Application::LiIon);
//! session
//!     .set_descriptor(Application::LiIon, "porosity", 72.0)
//!     .unwrap();
//!
//! match session.predict_active() {
//!     Prediction::LiIon(p) => assert!(p.ionic_conductivity > 0.0),
//!     _ => unreachable!(),
//! }
//! ```

pub mod models;
pub mod screening;
pub mod support;
