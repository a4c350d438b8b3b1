use crate::domain::constants::{
    NEUTRAL_FACTOR, PROJECT_FACTORS, REGION_FACTORS, STUDY_CATALOG, VOLTAGE_FACTORS,
};
use crate::domain::models::{FactorEntry, StudyDefinition};

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, f)| *f)
}

fn factor_or_neutral(table: &[(&str, f64)], key: &str, kind: &str) -> f64 {
    lookup(table, key).unwrap_or_else(|| {
        tracing::debug!(kind, key, "unknown key, using neutral factor");
        NEUTRAL_FACTOR
    })
}

pub fn project_factor(project_type: &str) -> f64 {
    factor_or_neutral(PROJECT_FACTORS, project_type, "project_type")
}

pub fn voltage_factor(voltage: &str) -> f64 {
    factor_or_neutral(VOLTAGE_FACTORS, voltage, "voltage")
}

pub fn region_factor(region: &str) -> f64 {
    factor_or_neutral(REGION_FACTORS, region, "region")
}

pub fn is_known_project_type(project_type: &str) -> bool {
    lookup(PROJECT_FACTORS, project_type).is_some()
}

pub fn is_known_voltage(voltage: &str) -> bool {
    lookup(VOLTAGE_FACTORS, voltage).is_some()
}

pub fn is_known_region(region: &str) -> bool {
    lookup(REGION_FACTORS, region).is_some()
}

pub fn find_study(code: &str) -> Option<&'static StudyDefinition> {
    STUDY_CATALOG.iter().find(|s| s.code == code)
}

pub fn factor_entries(table: &[(&str, f64)]) -> Vec<FactorEntry> {
    table
        .iter()
        .map(|(key, factor)| FactorEntry {
            key: key.to_string(),
            factor: *factor,
        })
        .collect()
}
