//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs`: estimate input/output, overrides profile, report rows.
//! - `constants.rs`: factor tables, study catalog, team defaults, fixed rates.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output and the profile file format.

pub mod constants;
pub mod models;
