use crate::users::{
    error::ValidationError,
    types::{User, UserInput},
};
use regex::Regex;

/// `local@domain`: a dot-atom local part (atext runs joined by single dots), and
/// a domain made of dot-separated alphanumeric labels with optional inner hyphens.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$";

/// Email format check. Input is not trimmed: padded addresses are rejected.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|regex| regex.is_match(email))
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || !valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn check_age(age: i32) -> Result<i32, ValidationError> {
    if age > 0 {
        Ok(age)
    } else {
        Err(ValidationError::InvalidAge)
    }
}

/// Check the form fields in order (name, email, age) and build a `User`.
///
/// # Errors
/// Returns the first failing check as a `ValidationError`.
pub fn validate(candidate: &UserInput) -> Result<User, ValidationError> {
    check_name(&candidate.name)?;
    check_email(&candidate.email)?;

    let age = candidate
        .age
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidAge)
        .and_then(check_age)?;

    Ok(User {
        name: candidate.name.clone(),
        email: candidate.email.clone(),
        age,
    })
}

/// Re-run the same checks on an already built `User`.
///
/// # Errors
/// Returns the first failing check as a `ValidationError`.
pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    check_name(&user.name)?;
    check_email(&user.email)?;
    check_age(user.age)?;
    Ok(())
}
