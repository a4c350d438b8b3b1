use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::constants::{DEFAULT_PROJECT_NAME, DEFAULT_REPORT_FIXED, DEFAULT_REPORT_PERCENT};

pub const PROFILE_ENV: &str = "POWEREST_PROFILE";

#[derive(Parser, Debug)]
#[command(
    name = "powerest",
    version,
    about = "Cost and hour estimator for power-systems engineering studies"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = PROFILE_ENV,
        help = "Override profile (TOML); defaults to ~/.config/powerest/profile.toml"
    )]
    pub profile: Option<PathBuf>,
    #[arg(long, short, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute an estimate and print the headline metrics.
    Estimate {
        #[command(flatten)]
        args: EstimateArgs,
    },
    /// Per-component cost, per-bus amount and share of the grand total.
    Breakdown {
        #[command(flatten)]
        args: EstimateArgs,
    },
    /// Per-study hours and cost.
    Studies {
        #[command(flatten)]
        args: EstimateArgs,
    },
    /// Write the estimate summary as JSON, CSV or plain text.
    Export {
        #[command(flatten)]
        args: EstimateArgs,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[arg(long, help = "Output file; defaults to estimate-<project>.<ext>")]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = false, conflicts_with = "out")]
        stdout: bool,
        #[arg(long, default_value_t = false, help = "Append the per-component section")]
        detail: bool,
    },
    /// List the study catalog and the factor tables.
    Catalog,
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    Show,
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    SetStudy {
        code: String,
        #[arg(long)]
        base_hours: Option<f64>,
        #[arg(long)]
        complexity: Option<f64>,
    },
    SetTeam {
        #[arg(value_enum)]
        level: TeamLevel,
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long, help = "Fraction of study hours, e.g. 0.35")]
        allocation: Option<f64>,
    },
    Reset,
}

/// Form fields shared by every command that computes an estimate.
#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,
    #[arg(long, default_value_t = 10.0, help = "Facility capacity in MW")]
    pub facility_mw: f64,
    #[arg(long, default_value_t = 24)]
    pub mv_buses: u32,
    #[arg(long, default_value_t = 54)]
    pub lv_buses: u32,
    #[arg(long, default_value = "Commercial")]
    pub project_type: String,
    #[arg(long, default_value = "33", help = "Highest voltage band in kV")]
    pub voltage: String,
    #[arg(long, default_value = "Domestic")]
    pub region: String,
    #[arg(long, default_value_t = 0.8)]
    pub mw_exponent: f64,
    #[arg(long, default_value_t = 0.9)]
    pub bus_exponent: f64,
    #[arg(long, default_value_t = 1.0)]
    pub bus_confidence: f64,
    #[arg(long, default_value_t = 15.0, help = "Contingency buffer in percent")]
    pub buffer_percent: f64,
    #[arg(long, value_enum, default_value_t = ReportMode::Percentage)]
    pub report_mode: ReportMode,
    #[arg(long, default_value_t = DEFAULT_REPORT_PERCENT)]
    pub report_percent: f64,
    #[arg(long, default_value_t = DEFAULT_REPORT_FIXED, help = "Fixed reporting fee in ₹")]
    pub report_fixed: f64,
    #[arg(long, default_value_t = 1.0)]
    pub report_complexity: f64,
    #[arg(long, help = "Flat addend in ₹")]
    pub custom_cost: Option<f64>,
    #[arg(long = "study", help = "Study code to include (repeatable)")]
    pub studies: Vec<String>,
    #[arg(long, default_value_t = false, conflicts_with = "studies")]
    pub all_studies: bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Start from an empty selection instead of the default studies"
    )]
    pub no_default_studies: bool,
    #[arg(long, default_value = "")]
    pub remarks: String,
    #[arg(long, default_value_t = false, help = "Skip form range checks")]
    pub no_validate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Report hours as a percentage of each study's hours.
    Percentage,
    /// Flat fee scaled by the share of the catalog selected.
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
pub enum TeamLevel {
    #[value(name = "L1", alias = "l1")]
    L1,
    #[value(name = "L2", alias = "l2")]
    L2,
    #[value(name = "L3", alias = "l3")]
    L3,
}

impl std::fmt::Display for TeamLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TeamLevel::L1 => "L1",
            TeamLevel::L2 => "L2",
            TeamLevel::L3 => "L3",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }
}
