//! Range checks the input form applies before the calculator sees a value.
//!
//! The calculator itself extrapolates outside these bounds; they only exist
//! to keep interactive input inside the calibrated region.

use crate::cli::{ReportMode, TeamLevel};
use crate::domain::models::{EstimateInput, Profile, StudyOverride, TeamRate};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{first} (and {more} more)")]
    Several {
        first: Box<ValidationError>,
        more: usize,
    },
}

pub const FACILITY_MW: (f64, f64) = (0.5, 500.0);
pub const MV_BUSES: (f64, f64) = (1.0, 200.0);
pub const LV_BUSES: (f64, f64) = (1.0, 300.0);
pub const MW_EXPONENT: (f64, f64) = (0.5, 1.2);
pub const BUS_EXPONENT: (f64, f64) = (0.7, 1.3);
pub const BUS_CONFIDENCE: (f64, f64) = (0.9, 2.5);
pub const BUFFER_PERCENT: (f64, f64) = (5.0, 25.0);
pub const REPORT_PERCENT: (f64, f64) = (10.0, 50.0);
pub const REPORT_FIXED: (f64, f64) = (5_000.0, 100_000.0);
pub const REPORT_COMPLEXITY: (f64, f64) = (0.8, 1.5);
pub const CUSTOM_COST: (f64, f64) = (0.0, 500_000.0);
pub const STUDY_BASE_HOURS: (f64, f64) = (5.0, 50.0);
pub const STUDY_COMPLEXITY: (f64, f64) = (0.5, 2.0);

pub fn team_rate_range(level: TeamLevel) -> (f64, f64) {
    match level {
        TeamLevel::L1 => (1200.0, 3600.0),
        TeamLevel::L2 => (600.0, 1800.0),
        TeamLevel::L3 => (450.0, 1350.0),
    }
}

pub fn team_allocation_range(level: TeamLevel) -> (f64, f64) {
    match level {
        TeamLevel::L1 => (0.05, 0.25),
        TeamLevel::L2 => (0.20, 0.50),
        TeamLevel::L3 => (0.30, 0.70),
    }
}

/// Collects every out-of-range field instead of stopping at the first.
#[derive(Default)]
struct Checker {
    errors: Vec<ValidationError>,
}

impl Checker {
    fn check(&mut self, field: impl Into<String>, value: f64, (min, max): (f64, f64)) {
        // NaN fails both comparisons, so test for containment.
        if !(min..=max).contains(&value) {
            self.errors.push(ValidationError::OutOfRange {
                field: field.into(),
                value,
                min,
                max,
            });
        }
    }

    fn finish(mut self) -> Result<(), ValidationError> {
        match self.errors.len() {
            0 => Ok(()),
            1 => Err(self.errors.remove(0)),
            n => Err(ValidationError::Several {
                first: Box::new(self.errors.remove(0)),
                more: n - 1,
            }),
        }
    }
}

pub fn check_study_override(code: &str, ov: &StudyOverride) -> Result<(), ValidationError> {
    let mut c = Checker::default();
    push_study(&mut c, code, ov);
    c.finish()
}

pub fn check_team_rate(level: TeamLevel, member: &TeamRate) -> Result<(), ValidationError> {
    let mut c = Checker::default();
    push_team(&mut c, level, member);
    c.finish()
}

fn push_study(c: &mut Checker, code: &str, ov: &StudyOverride) {
    c.check(format!("studies.{code}.base_hours"), ov.base_hours, STUDY_BASE_HOURS);
    c.check(format!("studies.{code}.complexity"), ov.complexity, STUDY_COMPLEXITY);
}

fn push_team(c: &mut Checker, level: TeamLevel, member: &TeamRate) {
    c.check(format!("team.{level}.rate"), member.rate, team_rate_range(level));
    c.check(
        format!("team.{level}.allocation"),
        member.allocation,
        team_allocation_range(level),
    );
}

pub fn check_profile(profile: &Profile) -> Result<(), ValidationError> {
    let mut c = Checker::default();
    for (code, ov) in &profile.studies {
        push_study(&mut c, code, ov);
    }
    for (level, member) in profile.team.levels() {
        push_team(&mut c, level, member);
    }
    c.finish()
}

/// Check every user-editable field of an assembled input.
///
/// Only overrides of selected studies are checked; the others do not reach
/// the result.
pub fn check_input(input: &EstimateInput) -> Result<(), ValidationError> {
    let mut c = Checker::default();
    c.check("facility_mw", input.facility_mw, FACILITY_MW);
    c.check("mv_buses", f64::from(input.mv_buses), MV_BUSES);
    c.check("lv_buses", f64::from(input.lv_buses), LV_BUSES);
    c.check("mw_exponent", input.mw_exponent, MW_EXPONENT);
    c.check("bus_exponent", input.bus_exponent, BUS_EXPONENT);
    c.check("bus_confidence", input.bus_confidence, BUS_CONFIDENCE);
    c.check("buffer_percent", input.buffer_percent, BUFFER_PERCENT);
    // Only the field for the active reporting mode reaches the result.
    match input.report.mode {
        ReportMode::Percentage => {
            c.check("report_percent", input.report.percent, REPORT_PERCENT);
            c.check("report_complexity", input.report.complexity, REPORT_COMPLEXITY);
        }
        ReportMode::Fixed => c.check("report_fixed", input.report.fixed_amount, REPORT_FIXED),
    }
    if let Some(custom) = input.custom_cost {
        c.check("custom_cost", custom, CUSTOM_COST);
    }
    for code in &input.selected_studies {
        if let Some(ov) = input.studies.get(code) {
            push_study(&mut c, code, ov);
        }
    }
    for (level, member) in input.team.levels() {
        push_team(&mut c, level, member);
    }
    c.finish()
}
