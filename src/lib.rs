//! # Userclient (remote user directory client)
//!
//! `userclient` lists the users held by a remote REST service and submits new
//! ones. Input is checked locally before anything is sent.
//!
//! ## Wire format
//!
//! The service exposes a single collection at `{base_url}/users/`:
//!
//! - `GET` returns a JSON array of `{"Name", "Email", "Age"}` objects.
//! - `POST` accepts one such object and answers with any `2xx` on success.
//!   Any other status is reported with the response body as the error detail.
//!
//! ## Validation
//!
//! A user is only submitted when the name is not blank, the email matches a
//! `local@domain` grammar and the age is a positive integer. See
//! [`users::validate`].
//!
//! ## Transport
//!
//! Every request goes through an [`users::ApiTransport`] that the caller builds
//! once and hands to [`users::UserClient::new`]. There is no retry, no timeout
//! beyond the HTTP client defaults, and at most one request per action.

pub mod cli;
pub mod users;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
