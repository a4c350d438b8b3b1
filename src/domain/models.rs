use crate::cli::{ReportMode, TeamLevel};
use crate::domain::constants::{
    DEFAULT_REPORT_FIXED, DEFAULT_REPORT_PERCENT, DEFAULT_SELECTED_STUDIES, STUDY_CATALOG,
    TEAM_DEFAULTS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One entry of the fixed study catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudyDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub base_hours: f64,
    pub complexity: f64,
}

impl StudyDefinition {
    pub const fn new(code: &'static str, name: &'static str, base_hours: f64, complexity: f64) -> Self {
        Self {
            code,
            name,
            base_hours,
            complexity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyOverride {
    pub base_hours: f64,
    pub complexity: f64,
}

impl From<&StudyDefinition> for StudyOverride {
    fn from(def: &StudyDefinition) -> Self {
        Self {
            base_hours: def.base_hours,
            complexity: def.complexity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamRate {
    /// ₹ per hour.
    pub rate: f64,
    /// Share of a study's hours; levels are not normalized against each other.
    pub allocation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamOverrides {
    #[serde(rename = "L1")]
    pub l1: TeamRate,
    #[serde(rename = "L2")]
    pub l2: TeamRate,
    #[serde(rename = "L3")]
    pub l3: TeamRate,
}

impl TeamOverrides {
    pub fn get(&self, level: TeamLevel) -> &TeamRate {
        match level {
            TeamLevel::L1 => &self.l1,
            TeamLevel::L2 => &self.l2,
            TeamLevel::L3 => &self.l3,
        }
    }

    pub fn get_mut(&mut self, level: TeamLevel) -> &mut TeamRate {
        match level {
            TeamLevel::L1 => &mut self.l1,
            TeamLevel::L2 => &mut self.l2,
            TeamLevel::L3 => &mut self.l3,
        }
    }

    pub fn levels(&self) -> [(TeamLevel, &TeamRate); 3] {
        [
            (TeamLevel::L1, &self.l1),
            (TeamLevel::L2, &self.l2),
            (TeamLevel::L3, &self.l3),
        ]
    }
}

impl TeamRate {
    pub fn default_for(level: TeamLevel) -> Self {
        TEAM_DEFAULTS
            .iter()
            .find(|(l, _, _)| *l == level)
            .map(|(_, rate, allocation)| Self {
                rate: *rate,
                allocation: *allocation,
            })
            .unwrap_or(Self {
                rate: 0.0,
                allocation: 0.0,
            })
    }
}

impl Default for TeamOverrides {
    fn default() -> Self {
        Self {
            l1: TeamRate::default_for(TeamLevel::L1),
            l2: TeamRate::default_for(TeamLevel::L2),
            l3: TeamRate::default_for(TeamLevel::L3),
        }
    }
}

pub fn default_study_overrides() -> BTreeMap<String, StudyOverride> {
    STUDY_CATALOG
        .iter()
        .map(|def| (def.code.to_string(), StudyOverride::from(def)))
        .collect()
}

/// Persisted form edits: per-study and per-level overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_study_overrides")]
    pub studies: BTreeMap<String, StudyOverride>,
    #[serde(default)]
    pub team: TeamOverrides,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            studies: default_study_overrides(),
            team: TeamOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSettings {
    pub mode: ReportMode,
    /// Percent units, used in percentage mode.
    pub percent: f64,
    /// ₹ base fee for the full catalog, used in fixed mode.
    pub fixed_amount: f64,
    pub complexity: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            mode: ReportMode::Percentage,
            percent: DEFAULT_REPORT_PERCENT,
            fixed_amount: DEFAULT_REPORT_FIXED,
            complexity: 1.0,
        }
    }
}

/// Everything one calculation needs. Built fresh per call; never shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateInput {
    pub facility_mw: f64,
    pub mv_buses: u32,
    pub lv_buses: u32,
    pub project_type: String,
    pub voltage: String,
    pub region: String,
    pub mw_exponent: f64,
    pub bus_exponent: f64,
    pub bus_confidence: f64,
    /// Percent units.
    pub buffer_percent: f64,
    pub report: ReportSettings,
    pub selected_studies: Vec<String>,
    pub studies: BTreeMap<String, StudyOverride>,
    pub team: TeamOverrides,
    /// `None` for estimates that carry no custom addend at all.
    pub custom_cost: Option<f64>,
}

impl Default for EstimateInput {
    fn default() -> Self {
        Self {
            facility_mw: 10.0,
            mv_buses: 24,
            lv_buses: 54,
            project_type: "Commercial".to_string(),
            voltage: "33".to_string(),
            region: "Domestic".to_string(),
            mw_exponent: 0.8,
            bus_exponent: 0.9,
            bus_confidence: 1.0,
            buffer_percent: 15.0,
            report: ReportSettings::default(),
            selected_studies: DEFAULT_SELECTED_STUDIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            studies: default_study_overrides(),
            team: TeamOverrides::default(),
            custom_cost: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyResult {
    pub code: String,
    pub name: String,
    pub study_hours: f64,
    pub report_hours: f64,
    pub blended_rate: f64,
    pub study_cost: f64,
    pub report_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateOutput {
    pub total_buses: u32,
    pub mw_per_bus: f64,
    pub mw_factor: f64,
    pub bus_factor: f64,
    /// Project x voltage x region x bus confidence; study complexity excluded.
    pub combined_factor: f64,
    pub total_study_hours: f64,
    pub total_report_hours: f64,
    pub meetings_hours: f64,
    pub total_project_hours: f64,
    pub modelling_hours: f64,
    pub total_study_cost: f64,
    pub total_reporting_cost: f64,
    pub meetings_cost: f64,
    pub modelling_cost: f64,
    pub custom_cost: f64,
    pub subtotal: f64,
    pub buffer: f64,
    pub grand_total: f64,
    pub cost_per_bus: f64,
    pub studies: Vec<StudyResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyRow {
    pub study: String,
    pub study_hours: f64,
    pub report_hours: f64,
    pub total_hours: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub component: String,
    pub total: f64,
    pub per_bus: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSummary {
    pub project_name: String,
    pub total_buses: u32,
    pub grand_total: f64,
    pub cost_per_bus: f64,
    pub cost: Vec<Metric>,
    pub time: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorEntry {
    pub key: String,
    pub factor: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub studies: Vec<StudyDefinition>,
    pub project_types: Vec<FactorEntry>,
    pub voltages: Vec<FactorEntry>,
    pub regions: Vec<FactorEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub project_name: String,
    pub remarks: String,
    pub input: EstimateInput,
    pub output: EstimateOutput,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub path: String,
    pub format: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub path: String,
    pub profile: Profile,
}
