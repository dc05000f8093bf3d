use crate::users::{ApiTarget, ApiTransport, User, UserClient};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct Args {
    pub api_target: ApiTarget,
}

/// Fetch the users and print one per line.
/// # Errors
/// Returns an error if the transport cannot be built, the request fails, or
/// the output cannot be written.
#[instrument(skip(out))]
pub async fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let transport = ApiTransport::from_target(crate::APP_USER_AGENT, args.api_target)?;
    debug!("transport: {:?}", transport);

    let client = UserClient::new(transport);
    let users = client.list_users().await?;

    out.write_all(render(&users).as_bytes())?;
    out.flush()?;

    Ok(())
}

fn render(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    users.iter().fold(String::new(), |mut acc, user| {
        acc.push_str(&user.to_string());
        acc.push('\n');
        acc
    })
}
