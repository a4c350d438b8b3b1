use crate::cli::EstimateArgs;
use crate::domain::constants::{DEFAULT_SELECTED_STUDIES, STUDY_CATALOG};
use crate::domain::models::{EstimateInput, Profile, ReportSettings};
use crate::services::factors::{find_study, is_known_project_type, is_known_region, is_known_voltage};
use crate::services::validation::check_input;

pub fn selected_studies(args: &EstimateArgs) -> Vec<String> {
    if args.all_studies {
        return STUDY_CATALOG.iter().map(|s| s.code.to_string()).collect();
    }
    if args.studies.is_empty() && !args.no_default_studies {
        return DEFAULT_SELECTED_STUDIES.iter().map(|s| s.to_string()).collect();
    }
    let mut out: Vec<String> = Vec::new();
    for code in &args.studies {
        let code = code.trim().to_ascii_lowercase();
        if !out.contains(&code) {
            out.push(code);
        }
    }
    out
}

/// Assemble one calculator input from form fields and the saved overrides.
pub fn build_input(args: &EstimateArgs, profile: &Profile) -> EstimateInput {
    EstimateInput {
        facility_mw: args.facility_mw,
        mv_buses: args.mv_buses,
        lv_buses: args.lv_buses,
        project_type: args.project_type.clone(),
        voltage: args.voltage.trim_end_matches("kV").trim().to_string(),
        region: args.region.clone(),
        mw_exponent: args.mw_exponent,
        bus_exponent: args.bus_exponent,
        bus_confidence: args.bus_confidence,
        buffer_percent: args.buffer_percent,
        report: ReportSettings {
            mode: args.report_mode,
            percent: args.report_percent,
            fixed_amount: args.report_fixed,
            complexity: args.report_complexity,
        },
        selected_studies: selected_studies(args),
        studies: profile.studies.clone(),
        team: profile.team,
        custom_cost: args.custom_cost,
    }
}

/// Warn about keys that will silently fall back or be skipped.
pub fn warn_on_fallbacks(input: &EstimateInput) {
    if !is_known_project_type(&input.project_type) {
        tracing::warn!(project_type = %input.project_type, "unknown project type, factor 1.0 applied");
    }
    if !is_known_voltage(&input.voltage) {
        tracing::warn!(voltage = %input.voltage, "unknown voltage band, factor 1.0 applied");
    }
    if !is_known_region(&input.region) {
        tracing::warn!(region = %input.region, "unknown region, factor 1.0 applied");
    }
    for code in &input.selected_studies {
        if find_study(code).is_none() {
            tracing::warn!(code = %code, "unknown study code ignored");
        }
    }
}

pub fn prepare_input(args: &EstimateArgs, profile: &Profile) -> anyhow::Result<EstimateInput> {
    let input = build_input(args, profile);
    warn_on_fallbacks(&input);
    if !args.no_validate {
        check_input(&input)?;
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn args_from(extra: &[&str]) -> EstimateArgs {
        let mut argv = vec!["powerest", "estimate"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Estimate { args } => args,
            _ => unreachable!("estimate subcommand"),
        }
    }

    #[test]
    fn default_args_match_default_input() {
        let input = build_input(&args_from(&[]), &Profile::default());
        assert_eq!(input, EstimateInput::default());
    }

    #[test]
    fn explicit_studies_replace_defaults() {
        let args = args_from(&["--study", "TS", "--study", "ts", "--study", "har"]);
        assert_eq!(selected_studies(&args), vec!["ts", "har"]);
    }

    #[test]
    fn all_studies_selects_catalog() {
        assert_eq!(selected_studies(&args_from(&["--all-studies"])).len(), 7);
    }

    #[test]
    fn no_default_studies_allows_empty_selection() {
        assert!(selected_studies(&args_from(&["--no-default-studies"])).is_empty());
    }

    #[test]
    fn voltage_accepts_kv_suffix() {
        let input = build_input(&args_from(&["--voltage", "132kV"]), &Profile::default());
        assert_eq!(input.voltage, "132");
    }

    #[test]
    fn out_of_range_is_rejected_unless_skipped() {
        let profile = Profile::default();
        assert!(prepare_input(&args_from(&["--facility-mw", "900"]), &profile).is_err());
        assert!(prepare_input(&args_from(&["--facility-mw", "900", "--no-validate"]), &profile).is_ok());
    }
}
