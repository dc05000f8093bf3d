use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use tracing::debug;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Verbosity can be given before or after the subcommand.
fn verbosity(matches: &clap::ArgMatches) -> u8 {
    let top = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    let sub = matches
        .subcommand()
        .and_then(|(_, m)| m.get_one::<u8>(commands::logging::ARG_VERBOSITY).copied())
        .unwrap_or(0);
    top.max(sub)
}

/// Main entry point for the CLI - builds and returns the Action
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action dispatch fails
pub fn start() -> Result<Action> {
    // 1. Parse command-line arguments
    let matches = commands::new().get_matches();

    // 2. Initialize telemetry
    telemetry::init(get_verbosity_level(verbosity(&matches)))?;

    debug!(
        "{} build {}",
        crate::APP_USER_AGENT,
        crate::GIT_COMMIT_HASH
    );

    // 3. Dispatch to appropriate action
    let action = dispatch::handler(&matches)?;

    Ok(action)
}
