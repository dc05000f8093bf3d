pub mod api;
pub mod logging;
pub mod users;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userclient")
        .about("List and add users on a remote user directory")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(users::list_command())
        .subcommand(users::add_command());

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use super::users::{ARG_AGE, ARG_EMAIL, ARG_NAME, CMD_ADD, CMD_LIST};

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userclient");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("List and add users on a remote user directory".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_list_defaults_url() {
        temp_env::with_vars([("USERCLIENT_URL", None::<&str>)], || {
            let matches = new().get_matches_from(vec!["userclient", CMD_LIST]);
            let sub = matches.subcommand_matches(CMD_LIST);
            assert!(sub.is_some());
            assert_eq!(
                api::url(&matches, sub),
                Some(api::DEFAULT_URL.to_string())
            );
        });
    }

    #[test]
    fn test_url_after_subcommand() {
        temp_env::with_vars([("USERCLIENT_URL", None::<&str>)], || {
            let matches = new().get_matches_from(vec![
                "userclient",
                CMD_LIST,
                "--url",
                "https://users.example.com",
            ]);
            assert_eq!(
                api::url(&matches, matches.subcommand_matches(CMD_LIST)),
                Some("https://users.example.com".to_string())
            );
        });
    }

    #[test]
    fn test_check_add_args() {
        let matches = new().get_matches_from(vec![
            "userclient",
            "--url",
            "http://127.0.0.1:9000",
            CMD_ADD,
            "--name",
            "Alice",
            "--email",
            "alice@example.com",
            "--age",
            "-1",
        ]);

        let sub = matches.subcommand_matches(CMD_ADD);
        assert_eq!(
            api::url(&matches, sub),
            Some("http://127.0.0.1:9000".to_string())
        );
        let sub = sub.expect("add subcommand matches");
        assert_eq!(
            sub.get_one::<String>(ARG_NAME).cloned(),
            Some("Alice".to_string())
        );
        assert_eq!(
            sub.get_one::<String>(ARG_EMAIL).cloned(),
            Some("alice@example.com".to_string())
        );
        assert_eq!(sub.get_one::<String>(ARG_AGE).cloned(), Some("-1".to_string()));
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERCLIENT_URL", Some("https://users.example.com:8443")),
                ("USERCLIENT_NAME", Some("Bob")),
                ("USERCLIENT_EMAIL", Some("b@x.com")),
                ("USERCLIENT_AGE", Some("25")),
                ("USERCLIENT_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userclient", CMD_ADD]);
                let sub = matches.subcommand_matches(CMD_ADD);
                assert_eq!(
                    api::url(&matches, sub),
                    Some("https://users.example.com:8443".to_string())
                );
                let sub = sub.expect("add subcommand matches");
                assert_eq!(sub.get_one::<String>(ARG_NAME).cloned(), Some("Bob".to_string()));
                assert_eq!(sub.get_one::<String>(ARG_AGE).cloned(), Some("25".to_string()));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_add_requires_fields() {
        temp_env::with_vars(
            [
                ("USERCLIENT_NAME", None::<&str>),
                ("USERCLIENT_EMAIL", None::<&str>),
                ("USERCLIENT_AGE", None::<&str>),
            ],
            || {
                let result = new().try_get_matches_from(vec!["userclient", CMD_ADD, "-n", "Alice"]);
                assert!(result.is_err());
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERCLIENT_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["userclient", CMD_LIST]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("USERCLIENT_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["userclient".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }
                args.push(CMD_LIST.to_string());

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["userclient"]);
        assert!(result.is_err());
    }
}
