//! Users API client: local validation plus the list/create round trips.
//!
//! Flow Overview:
//! - Parse the base URL into an `ApiTarget` and build an `ApiTransport`.
//! - Hand the transport to `UserClient::new`.
//! - `list_users` issues `GET /users/` and decodes the array.
//! - `add_user` validates a `UserInput`, then `create_user` issues `POST /users/`.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::{USERS_PATH, UserClient};
pub use error::{AddUserError, ClientError, FetchError, ValidationError};
pub use transport::{ApiResponse, ApiTarget, ApiTransport, JSON_CONTENT_TYPE};
pub use types::{User, UserInput};
pub use validate::{valid_email, validate, validate_user};
