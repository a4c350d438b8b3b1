//! Parametric cost and hour estimator for power-systems engineering studies.
//!
//! The core is [`services::calculator::calculate_all`], a pure function from
//! an [`domain::models::EstimateInput`] to an [`domain::models::EstimateOutput`].
//! The rest of the crate is the command-line form around it: argument
//! parsing, a persisted override profile, display tables and file export.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
pub mod telemetry;

pub use domain::models::{EstimateInput, EstimateOutput, StudyResult};
pub use services::calculator::{calculate_all, EstimateError};
