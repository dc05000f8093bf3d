//! Map parsed command-line arguments to an `Action`.

use crate::cli::actions::{Action, add, list};
use crate::cli::commands::{
    api,
    users::{CMD_ADD, CMD_LIST, Options},
};
use crate::users::ApiTarget;
use anyhow::{Context, Result, anyhow};

/// # Errors
/// Returns an error if the API URL is invalid, a required argument is missing,
/// or no known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand: expected {CMD_LIST} or {CMD_ADD}"))?;

    let url = api::url(matches, Some(sub_m)).context("missing required argument: --url")?;
    let api_target = ApiTarget::parse(&url).context("invalid --url/USERCLIENT_URL")?;

    match name {
        CMD_LIST => Ok(Action::List(list::Args { api_target })),
        CMD_ADD => {
            let options = Options::parse(sub_m)?;
            Ok(Action::Add(add::Args {
                api_target,
                input: options.input,
            }))
        }
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::UserInput;

    #[test]
    fn list_maps_to_list_action() {
        temp_env::with_vars([("USERCLIENT_URL", Some("http://127.0.0.1:8000/"))], || {
            let matches = crate::cli::commands::new().get_matches_from(vec!["userclient", "list"]);
            let action = handler(&matches);
            assert!(matches!(
                action,
                Ok(Action::List(list::Args { ref api_target }))
                    if api_target.base_url() == "http://127.0.0.1:8000"
            ));
        });
    }

    #[test]
    fn add_maps_raw_fields() {
        temp_env::with_vars([("USERCLIENT_URL", None::<&str>)], || {
            let matches = crate::cli::commands::new().get_matches_from(vec![
                "userclient",
                "add",
                "-n",
                "Alice",
                "-e",
                "not-an-email",
                "-a",
                "abc",
            ]);
            let action = handler(&matches);
            assert!(matches!(
                action,
                Ok(Action::Add(add::Args { ref input, .. }))
                    if *input == UserInput::new("Alice", "not-an-email", "abc")
            ));
        });
    }

    #[test]
    fn invalid_url_is_rejected() {
        temp_env::with_vars([("USERCLIENT_URL", Some("ftp://users.example.com"))], || {
            let matches = crate::cli::commands::new().get_matches_from(vec!["userclient", "list"]);
            let result = handler(&matches);
            assert!(result.is_err());
            if let Err(err) = result {
                assert!(err.to_string().contains("invalid --url/USERCLIENT_URL"));
            }
        });
    }

    #[test]
    fn invalid_flag_url_names_both_sources() {
        temp_env::with_vars([("USERCLIENT_URL", None::<&str>)], || {
            let matches = crate::cli::commands::new().get_matches_from(vec![
                "userclient",
                "--url",
                "http://users.example.com?x=1",
                "list",
            ]);
            let result = handler(&matches);
            assert!(matches!(
                result,
                Err(ref err) if err.to_string().contains("--url")
            ));
        });
    }
}
