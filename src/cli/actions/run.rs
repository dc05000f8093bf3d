use crate::cli::actions::{Action, add, list};
use anyhow::Result;
use std::io::Write;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute<W: Write>(action: Action, out: &mut W) -> Result<()> {
    match action {
        Action::List(args) => list::execute(args, out).await,
        Action::Add(args) => add::execute(args, out).await,
    }
}
