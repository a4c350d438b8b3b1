use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::services::calculator::EstimateError;
use crate::services::profile::ProfileError;
use crate::services::validation::ValidationError;
use serde::Serialize;

pub const EMPTY_SELECTION_HINT: &str = "select at least one study to calculate";

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Nothing selected: not an error, but there is no estimate to show.
pub fn print_empty_selection(json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: false,
                data: Option::<()>::None
            })?
        );
    } else {
        println!("{}", EMPTY_SELECTION_HINT);
    }
    Ok(())
}

/// Stable machine-readable code for an error surfaced to the user.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ValidationError>().is_some() {
        "OUT_OF_RANGE"
    } else if let Some(e) = err.downcast_ref::<EstimateError>() {
        match e {
            EstimateError::MissingStudyOverride(_) => "MISSING_OVERRIDE",
            EstimateError::NoBuses => "NO_BUSES",
            EstimateError::BusCountOverflow { .. } => "BUS_COUNT_OVERFLOW",
        }
    } else if let Some(e) = err.downcast_ref::<ProfileError>() {
        match e {
            ProfileError::UnknownStudy(_) => "UNKNOWN_STUDY",
            ProfileError::AlreadyExists(_) => "PROFILE_EXISTS",
        }
    } else {
        "ERROR"
    }
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
