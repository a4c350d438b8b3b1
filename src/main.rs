use clap::Parser;
use std::process::ExitCode;

use powerest::cli::{Cli, Commands, ProfileCommands};
use powerest::commands::{handle_catalog_command, handle_estimate_commands, handle_profile_commands};
use powerest::domain::models::Profile;
use powerest::services::output::print_error;
use powerest::services::profile::{load_profile, resolve_profile_path};
use powerest::telemetry::init_tracing;

fn run(cli: &Cli) -> anyhow::Result<()> {
    if handle_catalog_command(cli)? {
        return Ok(());
    }

    let profile_path = resolve_profile_path(cli.profile.as_deref())?;
    // init/reset overwrite the file, so a broken one must not block them.
    let mut profile = match &cli.command {
        Commands::Profile {
            command: ProfileCommands::Init { .. } | ProfileCommands::Reset,
        } => Profile::default(),
        _ => load_profile(&profile_path)?,
    };
    tracing::debug!(path = %profile_path.display(), "profile resolved");

    if handle_profile_commands(cli, &profile_path, &mut profile)? {
        return Ok(());
    }
    handle_estimate_commands(cli, &profile)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}
