//! Estimate calculation.
//!
//! `calculate_all` is a pure function of its [`EstimateInput`]: no I/O, no
//! shared state, same input gives the same output. Everything else in the
//! crate exists to build that input or to present the output.

use crate::cli::{ReportMode, TeamLevel};
use crate::domain::constants::{
    AGGREGATE_REPORT_RATE, BASELINE_BUSES, BASELINE_MW, MEETINGS_HOURS, MEETINGS_RATE,
    MODELLING_PERCENT, MODELLING_RATE, STUDY_CATALOG,
};
use crate::domain::models::{
    EstimateInput, EstimateOutput, StudyDefinition, StudyOverride, StudyResult, TeamOverrides,
};
use crate::services::factors::{find_study, project_factor, region_factor, voltage_factor};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EstimateError {
    #[error("no override entry for selected study: {0}")]
    MissingStudyOverride(String),
    #[error("total bus count is zero")]
    NoBuses,
    #[error("total bus count overflows: {mv} MV + {lv} LV")]
    BusCountOverflow { mv: u32, lv: u32 },
}

/// Scaling shared by every study of one estimate.
#[derive(Debug, Clone, Copy)]
struct Scaling {
    /// (buses/32)^bus_exp x (MW/10)^mw_exp
    size: f64,
    /// project x voltage x region x bus confidence
    combined: f64,
}

/// Compute the full breakdown for one input set.
///
/// Returns `Ok(None)` when no study is selected; callers should prompt for
/// a selection rather than show a zero estimate. Unknown study codes are
/// skipped. A selected catalog study without an override entry, or a zero
/// bus count, aborts the whole computation.
pub fn calculate_all(input: &EstimateInput) -> Result<Option<EstimateOutput>, EstimateError> {
    if input.selected_studies.is_empty() {
        return Ok(None);
    }

    let total_buses = input
        .mv_buses
        .checked_add(input.lv_buses)
        .ok_or(EstimateError::BusCountOverflow {
            mv: input.mv_buses,
            lv: input.lv_buses,
        })?;
    if total_buses == 0 {
        return Err(EstimateError::NoBuses);
    }
    let buses = f64::from(total_buses);

    let mw_factor = (input.facility_mw / BASELINE_MW).powf(input.mw_exponent);
    let bus_factor = (buses / BASELINE_BUSES).powf(input.bus_exponent);
    let scaling = Scaling {
        size: bus_factor * mw_factor,
        combined: project_factor(&input.project_type)
            * voltage_factor(&input.voltage)
            * region_factor(&input.region)
            * input.bus_confidence,
    };

    let selected: HashSet<&str> = input.selected_studies.iter().map(String::as_str).collect();
    for code in &selected {
        if find_study(code).is_none() {
            tracing::debug!(code, "skipping unknown study code");
        }
    }

    let mut studies = Vec::new();
    for def in STUDY_CATALOG.iter().filter(|d| selected.contains(d.code)) {
        let ov = input
            .studies
            .get(def.code)
            .ok_or_else(|| EstimateError::MissingStudyOverride(def.code.to_string()))?;
        studies.push(study_line(def, ov, scaling, &input.team, input));
    }

    let total_study_hours: f64 = studies.iter().map(|s| s.study_hours).sum();
    let total_report_hours: f64 = studies.iter().map(|s| s.report_hours).sum();
    let total_study_cost: f64 = studies.iter().map(|s| s.study_cost).sum();

    // The aggregate uses a flat rate, not the per-study blended rate, so it
    // need not equal the sum of per-study report costs.
    let total_reporting_cost = match input.report.mode {
        ReportMode::Percentage => {
            total_report_hours * AGGREGATE_REPORT_RATE * input.report.complexity
        }
        // Share of the catalog that was asked for, unknown codes included.
        ReportMode::Fixed => {
            input.report.fixed_amount * (selected.len() as f64 / STUDY_CATALOG.len() as f64)
        }
    };

    let total_project_hours = total_study_hours + total_report_hours + MEETINGS_HOURS;
    let meetings_cost = MEETINGS_HOURS * MEETINGS_RATE;
    let modelling_hours = total_project_hours * MODELLING_PERCENT;
    let modelling_cost = modelling_hours * MODELLING_RATE;
    let custom_cost = input.custom_cost.unwrap_or(0.0);

    let subtotal =
        total_study_cost + total_reporting_cost + meetings_cost + modelling_cost + custom_cost;
    let buffer = subtotal * (input.buffer_percent / 100.0);
    let grand_total = subtotal + buffer;

    tracing::debug!(
        studies = studies.len(),
        total_buses,
        subtotal,
        grand_total,
        "estimate computed"
    );

    Ok(Some(EstimateOutput {
        total_buses,
        mw_per_bus: input.facility_mw / buses,
        mw_factor,
        bus_factor,
        combined_factor: scaling.combined,
        total_study_hours,
        total_report_hours,
        meetings_hours: MEETINGS_HOURS,
        total_project_hours,
        modelling_hours,
        total_study_cost,
        total_reporting_cost,
        meetings_cost,
        modelling_cost,
        custom_cost,
        subtotal,
        buffer,
        grand_total,
        cost_per_bus: grand_total / buses,
        studies,
    }))
}

fn study_line(
    def: &StudyDefinition,
    ov: &StudyOverride,
    scaling: Scaling,
    team: &TeamOverrides,
    input: &EstimateInput,
) -> StudyResult {
    let study_hours = ov.base_hours * scaling.size * scaling.combined * ov.complexity;
    let blended_rate = blended_rate(team, study_hours);
    let report_hours = match input.report.mode {
        ReportMode::Percentage => study_hours * (input.report.percent / 100.0),
        ReportMode::Fixed => 0.0,
    };

    StudyResult {
        code: def.code.to_string(),
        name: def.name.to_string(),
        study_hours,
        report_hours,
        blended_rate,
        study_cost: study_hours * blended_rate,
        report_cost: report_hours * blended_rate * input.report.complexity,
    }
}

/// Hours-weighted rate across levels. Allocations are used as given, so
/// they need not sum to 1.
pub fn blended_rate(team: &TeamOverrides, study_hours: f64) -> f64 {
    if study_hours <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = [TeamLevel::L1, TeamLevel::L2, TeamLevel::L3]
        .into_iter()
        .map(|level| {
            let member = team.get(level);
            study_hours * member.allocation * member.rate
        })
        .sum();
    weighted / study_hours
}
