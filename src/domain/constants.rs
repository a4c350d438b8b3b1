//! Static reference tables: factor tables, study catalog, team defaults.
//!
//! Tables are ordered slices rather than maps so listings keep the order
//! the estimator has always shown them in.

use crate::cli::TeamLevel;
use crate::domain::models::StudyDefinition;

pub const MEETINGS_RATE: f64 = 800.0;
pub const MEETINGS_COUNT: f64 = 4.0;
pub const MEETINGS_HOURS_EACH: f64 = 1.5;
pub const MEETINGS_HOURS: f64 = MEETINGS_COUNT * MEETINGS_HOURS_EACH;

pub const MODELLING_PERCENT: f64 = 0.30;
pub const MODELLING_RATE: f64 = 1200.0;

/// Flat rate used for the aggregate reporting cost in percentage mode.
pub const AGGREGATE_REPORT_RATE: f64 = 1200.0;

/// Calibration baselines for the power-law scaling.
pub const BASELINE_BUSES: f64 = 32.0;
pub const BASELINE_MW: f64 = 10.0;

/// Neutral multiplier for keys missing from a factor table.
pub const NEUTRAL_FACTOR: f64 = 1.0;

pub const PROJECT_FACTORS: &[(&str, f64)] = &[
    ("Commercial", 0.85),
    ("Industrial", 1.10),
    ("Pharma", 1.20),
    ("Hospital", 1.25),
    ("Metro/Infrastructure", 1.30),
    ("Oil & Gas", 1.40),
    ("Business Park", 0.80),
];

/// Keyed by highest voltage band in kV.
pub const VOLTAGE_FACTORS: &[(&str, f64)] = &[
    ("11", 1.00),
    ("33", 1.15),
    ("66", 1.30),
    ("132", 1.50),
    ("220", 1.75),
];

pub const REGION_FACTORS: &[(&str, f64)] = &[
    ("Domestic", 1.00),
    ("SouthAsia", 1.05),
    ("SeAsia", 1.35),
    ("MiddleEast", 1.75),
    ("APAC", 1.55),
    ("Europe", 2.00),
];

pub const STUDY_CATALOG: &[StudyDefinition] = &[
    StudyDefinition::new("lf", "Load Flow", 15.0, 1.0),
    StudyDefinition::new("sc", "Short Circuit", 18.0, 1.1),
    StudyDefinition::new("pdc", "Protection Coordination", 25.0, 1.3),
    StudyDefinition::new("af", "Arc Flash", 16.0, 1.0),
    StudyDefinition::new("har", "Harmonics", 22.0, 1.2),
    StudyDefinition::new("ts", "Transient Stability", 30.0, 1.4),
    StudyDefinition::new("ms", "Motor Starting", 18.0, 1.05),
];

/// Studies ticked on a fresh estimate.
pub const DEFAULT_SELECTED_STUDIES: &[&str] = &["lf", "sc", "pdc", "af"];

/// (level, hourly rate in ₹, allocation fraction)
pub const TEAM_DEFAULTS: &[(TeamLevel, f64, f64)] = &[
    (TeamLevel::L1, 2400.0, 0.15),
    (TeamLevel::L2, 1200.0, 0.35),
    (TeamLevel::L3, 900.0, 0.50),
];

pub const DEFAULT_PROJECT_NAME: &str = "Project-Alpha";
pub const DEFAULT_REPORT_FIXED: f64 = 30_000.0;
pub const DEFAULT_REPORT_PERCENT: f64 = 35.0;
