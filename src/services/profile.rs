use crate::cli::TeamLevel;
use crate::domain::constants::STUDY_CATALOG;
use crate::domain::models::{Profile, StudyOverride, TeamRate};
use crate::services::factors::find_study;
use crate::services::validation::{check_study_override, check_team_rate};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("unknown study code: {0}")]
    UnknownStudy(String),
    #[error("profile already exists at {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

pub fn default_profile_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/powerest/profile.toml"))
}

pub fn resolve_profile_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => default_profile_path(),
    }
}

impl Profile {
    /// Fill catalog studies missing from a hand-edited file with defaults.
    pub fn resolved(mut self) -> Self {
        for def in STUDY_CATALOG {
            self.studies
                .entry(def.code.to_string())
                .or_insert_with(|| StudyOverride::from(def));
        }
        self
    }
}

pub fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no profile file, using catalog defaults");
        return Ok(Profile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let profile: Profile = toml::from_str(&raw)?;
    for code in profile.studies.keys() {
        if find_study(code).is_none() {
            tracing::warn!(code = %code, "profile overrides a study that is not in the catalog");
        }
    }
    Ok(profile.resolved())
}

pub fn save_profile(path: &Path, profile: &Profile) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(profile)?)?;
    tracing::info!(path = %path.display(), "profile saved");
    Ok(())
}

pub fn init_profile(path: &Path, force: bool) -> anyhow::Result<Profile> {
    if path.exists() && !force {
        return Err(ProfileError::AlreadyExists(path.to_path_buf()).into());
    }
    let profile = Profile::default();
    save_profile(path, &profile)?;
    Ok(profile)
}

pub fn set_study(
    profile: &mut Profile,
    code: &str,
    base_hours: Option<f64>,
    complexity: Option<f64>,
) -> anyhow::Result<StudyOverride> {
    let def = find_study(code).ok_or_else(|| ProfileError::UnknownStudy(code.to_string()))?;
    let current = profile
        .studies
        .get(code)
        .copied()
        .unwrap_or_else(|| StudyOverride::from(def));
    let updated = StudyOverride {
        base_hours: base_hours.unwrap_or(current.base_hours),
        complexity: complexity.unwrap_or(current.complexity),
    };
    check_study_override(code, &updated)?;
    profile.studies.insert(code.to_string(), updated);
    Ok(updated)
}

pub fn set_team(
    profile: &mut Profile,
    level: TeamLevel,
    rate: Option<f64>,
    allocation: Option<f64>,
) -> anyhow::Result<TeamRate> {
    let current = *profile.team.get(level);
    let updated = TeamRate {
        rate: rate.unwrap_or(current.rate),
        allocation: allocation.unwrap_or(current.allocation),
    };
    check_team_rate(level, &updated)?;
    *profile.team.get_mut(level) = updated;
    Ok(updated)
}
