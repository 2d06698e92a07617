//! Pre-flight checks before a flow starts prompting.
//!
//! Validates that required configuration is available before asking the
//! user for input that would otherwise be wasted.

use crate::config::Settings;
use crate::error::{PlannerError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Building a timetable needs a writable output directory.
    Schedule,
    /// Notes need an OpenAI API key and a writable output directory.
    Notes,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Schedule => {
            check_output_dir(settings)?;
        }
        Operation::Notes => {
            check_api_key(settings)?;
            check_output_dir(settings)?;
        }
    }
    Ok(())
}

/// Check that an OpenAI API key is configured.
fn check_api_key(settings: &Settings) -> Result<()> {
    match settings.openai.resolve_api_key() {
        Some(_) => Ok(()),
        None => Err(PlannerError::Config(
            "OpenAI API key not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

/// Check that the output directory exists and is a directory.
fn check_output_dir(settings: &Settings) -> Result<()> {
    let dir = settings.output_dir();
    if dir.is_dir() {
        Ok(())
    } else {
        Err(PlannerError::Config(format!(
            "Output directory {} does not exist",
            dir.display()
        )))
    }
}
