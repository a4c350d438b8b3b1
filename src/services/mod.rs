//! Service layer: the calculator and the helpers around it.
//!
//! ## Service map
//! - `calculator.rs`: pure estimate computation.
//! - `factors.rs`: factor-table lookups with neutral fallback.
//! - `input.rs`: assembles an `EstimateInput` from form fields + profile.
//! - `validation.rs`: form range checks.
//! - `profile.rs`: persisted study/team overrides (TOML).
//! - `report.rs`: display tables, metrics and number formatting.
//! - `export.rs`: JSON/CSV/TXT renderers and file writes.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - `calculator.rs` never touches the filesystem or environment.
//! - Side effects live in `profile.rs`, `export.rs` and `output.rs` only.
//! - Keep command handlers thin; delegate to services.

pub mod calculator;
pub mod export;
pub mod factors;
pub mod input;
pub mod output;
pub mod profile;
pub mod report;
pub mod validation;
