use thiserror::Error;

/// Local form checks. Any of these blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingField,
    #[error("Valid email is required.")]
    InvalidEmail,
    #[error("Age must be a positive number.")]
    InvalidAge,
}

/// Why a list request did not produce a response body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("{status} - {body}")]
    Status { status: u16, body: String },
}

/// Remote failures. None of them are retried.
///
/// `Invalid` is the one local case: `create_user` re-checks the record before
/// anything is sent.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Error fetching users: {0}")]
    Fetch(#[source] FetchError),
    #[error("Error decoding users: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Error encoding user: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Error adding user: {status} - {body}")]
    Request { status: u16, body: String },
    #[error("Error adding user: {0}")]
    Send(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum AddUserError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Client(#[from] ClientError),
}
