use clap::{Arg, ArgMatches, Command};

pub const ARG_URL: &str = "url";

pub const DEFAULT_URL: &str = "http://localhost:8000";

pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_URL)
            .short('u')
            .long("url")
            .help("Users API base URL (http(s)://host:port); requests go to <url>/users/")
            .env("USERCLIENT_URL")
            .default_value(DEFAULT_URL)
            .global(true),
    )
}

/// Read the API URL, preferring the subcommand matches where global args land.
#[must_use]
pub fn url(matches: &ArgMatches, sub_matches: Option<&ArgMatches>) -> Option<String> {
    sub_matches
        .and_then(|m| m.get_one::<String>(ARG_URL))
        .or_else(|| matches.get_one::<String>(ARG_URL))
        .cloned()
}
