use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A username/password pair for HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    pub username: String,
    pub password: String,
}

impl Authorization {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` header: `Basic base64(username:password)`.
    pub fn basic_header_value(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
