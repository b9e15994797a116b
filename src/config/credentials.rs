//! Email credentials for the report mailer
//!
//! The mailer itself lives outside this crate; the pipeline only checks that
//! the credentials it will need are present so a missing setting is reported
//! before a run instead of after it.

use crate::ConfigError;

pub const EMAIL_VAR: &str = "GMAIL_EMAIL";
pub const PASSWORD_VAR: &str = "GMAIL_APP_PASSWORD";

/// Sender account used by the external mailer
#[derive(Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub email: String,
    pub app_password: String,
}

impl std::fmt::Debug for EmailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailCredentials")
            .field("email", &self.email)
            .field("app_password", &"<redacted>")
            .finish()
    }
}

impl EmailCredentials {
    /// Reads the credentials from the process environment
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the credentials through an arbitrary variable lookup
    ///
    /// Values are trimmed of surrounding quotes; an empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
                .filter(|v| !v.is_empty())
        };

        let email = read(EMAIL_VAR);
        let app_password = read(PASSWORD_VAR);

        match (email, app_password) {
            (Some(email), Some(app_password)) => Ok(Self {
                email,
                app_password,
            }),
            (email, password) => {
                let mut missing = Vec::new();
                if email.is_none() {
                    missing.push(EMAIL_VAR);
                }
                if password.is_none() {
                    missing.push(PASSWORD_VAR);
                }
                Err(ConfigError::MissingCredentials { missing })
            }
        }
    }
}
