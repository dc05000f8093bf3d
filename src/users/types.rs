use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record as exchanged with the service.
///
/// Encodes with capitalized keys; decoding also accepts the lowercase form and
/// ignores fields it does not know (the service adds an `id`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Email", alias = "email")]
    pub email: String,
    #[serde(rename = "Age", alias = "age")]
    pub age: i32,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>, {}", self.name, self.email, self.age)
    }
}

/// Raw form fields, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl UserInput {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
        }
    }
}
