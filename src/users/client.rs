use crate::users::{
    error::{AddUserError, ClientError, FetchError},
    transport::ApiTransport,
    types::{User, UserInput},
    validate::{validate, validate_user},
};
use tracing::{debug, error, instrument};

/// Collection path for both listing and creating users.
pub const USERS_PATH: &str = "/users/";

#[derive(Debug, Clone)]
pub struct UserClient {
    transport: ApiTransport,
}

impl UserClient {
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    fn users_url(&self) -> String {
        self.transport.endpoint_url(USERS_PATH)
    }

    /// Fetch every user from the service.
    ///
    /// # Errors
    /// Returns `ClientError::Fetch` on transport failure or a non-2xx status, and
    /// `ClientError::Decode` if the body is not a JSON array of users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let url = self.users_url();

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| ClientError::Fetch(FetchError::Transport(e)))?;

        if !response.is_success() {
            error!("Failed to fetch users: {} - {}", response.status, response.body);

            return Err(ClientError::Fetch(FetchError::Status {
                status: response.status,
                body: response.body,
            }));
        }

        let users: Vec<User> = serde_json::from_str(&response.body).map_err(ClientError::Decode)?;

        debug!("fetched {} users from {}", users.len(), response.url);

        Ok(users)
    }

    /// Submit a user. The record is checked again first, so a hand-built
    /// `User` that would fail `validate` never reaches the service.
    ///
    /// # Errors
    /// Returns `ClientError::Invalid` before any request for a record that fails
    /// validation, `ClientError::Request` with the status and body text on a
    /// non-2xx answer, and `ClientError::Send` if the request never completed.
    #[instrument(skip(self))]
    pub async fn create_user(&self, user: &User) -> Result<(), ClientError> {
        validate_user(user)?;

        let url = self.users_url();

        let payload = serde_json::to_vec(user).map_err(ClientError::Encode)?;

        debug!("sending JSON: {}", String::from_utf8_lossy(&payload));

        let response = self
            .transport
            .post_json(&url, payload)
            .await
            .map_err(ClientError::Send)?;

        debug!(
            "server response: {}, details: {}",
            response.status, response.body
        );

        if !response.is_success() {
            error!("Failed to add user: {} - {}", response.status, response.body);

            return Err(ClientError::Request {
                status: response.status,
                body: response.body,
            });
        }

        Ok(())
    }

    /// Validate raw form input and submit it. Nothing is sent if validation fails.
    ///
    /// # Errors
    /// Returns `AddUserError::Invalid` for rejected input, otherwise any
    /// `ClientError` from `create_user`.
    #[instrument(skip(self))]
    pub async fn add_user(&self, input: &UserInput) -> Result<User, AddUserError> {
        let user = validate(input)?;

        self.create_user(&user).await?;

        Ok(user)
    }
}
