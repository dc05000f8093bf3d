use crate::users::UserInput;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const CMD_LIST: &str = "list";
pub const CMD_ADD: &str = "add";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_AGE: &str = "age";

#[must_use]
pub fn list_command() -> Command {
    Command::new(CMD_LIST).about("Fetch and print all users")
}

// Values are kept as plain text so bad input reaches validation instead of
// being rejected by the parser.
#[must_use]
pub fn add_command() -> Command {
    Command::new(CMD_ADD)
        .about("Validate and submit a new user")
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long("name")
                .help("User name")
                .env("USERCLIENT_NAME")
                .required(true),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("User email address")
                .env("USERCLIENT_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_AGE)
                .short('a')
                .long("age")
                .help("User age, a positive whole number")
                .env("USERCLIENT_AGE")
                .allow_hyphen_values(true)
                .required(true),
        )
}

#[derive(Debug)]
pub struct Options {
    pub input: UserInput,
}

impl Options {
    /// # Errors
    /// Returns an error if a required form field is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let field = |id: &str| -> Result<String> {
            matches
                .get_one::<String>(id)
                .cloned()
                .with_context(|| format!("missing required argument: --{id}"))
        };

        Ok(Self {
            input: UserInput {
                name: field(ARG_NAME)?,
                email: field(ARG_EMAIL)?,
                age: field(ARG_AGE)?,
            },
        })
    }
}
