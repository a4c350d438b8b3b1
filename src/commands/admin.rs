use crate::cli::{Cli, Commands, ProfileCommands};
use crate::domain::constants::{PROJECT_FACTORS, REGION_FACTORS, STUDY_CATALOG, VOLTAGE_FACTORS};
use crate::domain::models::{CatalogReport, JsonOut, Profile, ProfileReport};
use crate::services::factors::factor_entries;
use crate::services::output::print_one;
use crate::services::profile::{init_profile, save_profile, set_study, set_team};
use std::path::Path;

pub fn handle_catalog_command(cli: &Cli) -> anyhow::Result<bool> {
    if !matches!(cli.command, Commands::Catalog) {
        return Ok(false);
    }

    let report = CatalogReport {
        studies: STUDY_CATALOG.to_vec(),
        project_types: factor_entries(PROJECT_FACTORS),
        voltages: factor_entries(VOLTAGE_FACTORS),
        regions: factor_entries(REGION_FACTORS),
    };
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        for s in &report.studies {
            println!(
                "study\t{}\t{}\t{}\t{}",
                s.code, s.name, s.base_hours, s.complexity
            );
        }
        for (kind, entries) in [
            ("project", &report.project_types),
            ("voltage", &report.voltages),
            ("region", &report.regions),
        ] {
            for e in entries {
                println!("{}\t{}\t{:.2}", kind, e.key, e.factor);
            }
        }
    }
    Ok(true)
}

fn print_profile(json: bool, path: &Path, profile: Profile) -> anyhow::Result<()> {
    let report = ProfileReport {
        path: path.to_string_lossy().to_string(),
        profile,
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("# {}", report.path);
        print!("{}", toml::to_string_pretty(&report.profile)?);
    }
    Ok(())
}

pub fn handle_profile_commands(
    cli: &Cli,
    profile_path: &Path,
    profile: &mut Profile,
) -> anyhow::Result<bool> {
    let Commands::Profile { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ProfileCommands::Show => print_profile(cli.json, profile_path, profile.clone())?,
        ProfileCommands::Init { force } => {
            let created = init_profile(profile_path, *force)?;
            print_profile(cli.json, profile_path, created)?;
        }
        ProfileCommands::SetStudy {
            code,
            base_hours,
            complexity,
        } => {
            let code = code.trim().to_ascii_lowercase();
            let updated = set_study(profile, &code, *base_hours, *complexity)?;
            save_profile(profile_path, profile)?;
            print_one(cli.json, updated, |s| {
                format!(
                    "{}\tbase_hours={}\tcomplexity={}",
                    code, s.base_hours, s.complexity
                )
            })?;
        }
        ProfileCommands::SetTeam {
            level,
            rate,
            allocation,
        } => {
            let updated = set_team(profile, *level, *rate, *allocation)?;
            save_profile(profile_path, profile)?;
            print_one(cli.json, updated, |t| {
                format!("{}\trate={}\tallocation={}", level, t.rate, t.allocation)
            })?;
        }
        ProfileCommands::Reset => {
            *profile = Profile::default();
            save_profile(profile_path, profile)?;
            print_profile(cli.json, profile_path, profile.clone())?;
        }
    }

    Ok(true)
}
