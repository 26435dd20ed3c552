use std::fmt;

use crate::error::{GhStarError, Result};

pub const USERNAME_VAR: &str = "GH_UNAME";
pub const TOKEN_VAR: &str = "GH_TOKEN";

/// GitHub username and personal access token used for Basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    /// Build credentials from raw values. Missing and empty values are
    /// both rejected with [`GhStarError::Auth`].
    pub fn resolve(username: Option<String>, token: Option<String>) -> Result<Self> {
        match (username, token) {
            (Some(username), Some(token)) if !username.is_empty() && !token.is_empty() => {
                Ok(Credentials { username, token })
            }
            _ => Err(GhStarError::Auth),
        }
    }

    /// Read `GH_UNAME` and `GH_TOKEN` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var(USERNAME_VAR).ok(),
            std::env::var(TOKEN_VAR).ok(),
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
