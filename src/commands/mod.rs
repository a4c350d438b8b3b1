//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs`: catalog listing and profile commands.
//! - `estimate.rs`: estimate/breakdown/studies/export.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod estimate;

pub use admin::{handle_catalog_command, handle_profile_commands};
pub use estimate::handle_estimate_commands;
