//! Interactive screening over the prediction models.
//!
//! This module is the contract between the models and an interactive UI:
//!
//! - [`registry`]: Static descriptor metadata (ranges, defaults, steps,
//!   labels) for rendering input controls.
//! - [`Session`]: Mutable screening state — the active application plus
//!   independent live descriptor values for all three applications.
//! - [`display`]: Maps prediction records to labeled values and
//!   proportional bar fractions.

pub mod display;
pub mod registry;

mod application;
mod descriptor;
mod session;

pub use application::Application;
pub use descriptor::{DescriptorError, DescriptorSpec, DescriptorValues};
pub use session::{Prediction, Session};
