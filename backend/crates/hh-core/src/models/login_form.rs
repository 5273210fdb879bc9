use crate::{CoreError, Result as CoreErrorResult};

use std::sync::LazyLock;

use regex::Regex;

const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("Invalid regex")
});

/// Email shape accepted by the portal's forms.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Credentials as typed into the login page, checked before any login call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> LoginForm<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self { email, password }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.email.is_empty() {
            return Err(CoreError::validation("Email is required"));
        }
        if !is_valid_email(self.email) {
            return Err(CoreError::validation("Invalid email address"));
        }

        if self.password.is_empty() {
            return Err(CoreError::validation("Password is required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        Ok(())
    }
}
