use std::collections::HashMap;

use parking_lot::RwLock;
use url::Url;

use crate::{AuthStore, Authorization};

/// Normalise an origin into the key credentials are stored under.
///
/// URLs collapse to `host[:port]`, dropping scheme, userinfo and path. Anything
/// that does not parse as a URL with a host (a bare `example.org`, say) is
/// trimmed and lower-cased.
pub fn origin_key(origin: &str) -> String {
    let origin = origin.trim();
    match Url::parse(origin) {
        Ok(url) if url.host_str().is_some() => {
            let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
            match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host,
            }
        }
        _ => origin.trim_end_matches('/').to_ascii_lowercase(),
    }
}

/// In-memory [`AuthStore`] shared between concurrent downloads.
///
/// Writes for one origin are last-writer-wins.
#[derive(Debug, Default)]
pub struct CredentialCache {
    entries: RwLock<HashMap<String, Authorization>>,
    last:    RwLock<Option<Authorization>>,
}

impl CredentialCache {
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_last_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.set_last_credentials(username, password);
        self
    }

    /// Seed the out-of-band pair picked up by [`options_for`](crate::options_for).
    pub fn set_last_credentials(&self, username: impl Into<String>, password: impl Into<String>) {
        *self.last.write() = Some(Authorization::new(username, password));
    }

    pub fn remove(&self, origin: &str) -> Option<Authorization> {
        self.entries.write().remove(&origin_key(origin))
    }

    pub fn len(&self) -> usize { self.entries.read().len() }

    pub fn is_empty(&self) -> bool { self.entries.read().is_empty() }
}

impl AuthStore for CredentialCache {
    fn has_authorization(&self, origin: &str) -> bool {
        self.entries.read().contains_key(&origin_key(origin))
    }

    fn authorization(&self, origin: &str) -> Option<Authorization> {
        self.entries.read().get(&origin_key(origin)).cloned()
    }

    fn set_authorization(&self, origin: &str, username: &str, password: &str) {
        let key = origin_key(origin);
        tracing::debug!(origin = %key, "storing credentials");
        self.entries
            .write()
            .insert(key, Authorization::new(username, password));
    }

    fn last_username(&self) -> Option<String> {
        self.last.read().as_ref().map(|auth| auth.username.clone())
    }

    fn last_password(&self) -> Option<String> {
        self.last.read().as_ref().map(|auth| auth.password.clone())
    }
}
