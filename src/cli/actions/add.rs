use crate::users::{ApiTarget, ApiTransport, UserClient, UserInput};
use anyhow::Result;
use std::io::Write;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct Args {
    pub api_target: ApiTarget,
    pub input: UserInput,
}

/// Validate the form fields and submit the user.
/// # Errors
/// Returns the validation error for rejected input, or the remote error if the
/// service does not accept the user.
#[instrument(skip(out))]
pub async fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let transport = ApiTransport::from_target(crate::APP_USER_AGENT, args.api_target)?;
    let client = UserClient::new(transport);

    let user = client.add_user(&args.input).await?;

    info!("added user {}", user);

    writeln!(out, "User added successfully!")?;
    out.flush()?;

    Ok(())
}
