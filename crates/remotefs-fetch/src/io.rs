use std::io;

use remotefs_auth::{AuthStore, Authorization, CredentialCache};

/// Console-side collaborator of a download.
///
/// Besides the credential store it decides whether the user can be prompted,
/// receives progress lines, and answers credential prompts.
pub trait Io: AuthStore + Send + Sync {
    fn is_interactive(&self) -> bool;

    /// Replace the current status line with `message`.
    fn overwrite(&self, message: &str);

    fn ask(&self, question: &str) -> io::Result<String>;

    fn ask_and_hide_answer(&self, question: &str) -> io::Result<String>;
}

impl<T: Io + ?Sized> Io for &T {
    fn is_interactive(&self) -> bool { (**self).is_interactive() }

    fn overwrite(&self, message: &str) { (**self).overwrite(message) }

    fn ask(&self, question: &str) -> io::Result<String> { (**self).ask(question) }

    fn ask_and_hide_answer(&self, question: &str) -> io::Result<String> {
        (**self).ask_and_hide_answer(question)
    }
}

impl<T: Io + ?Sized> Io for std::sync::Arc<T> {
    fn is_interactive(&self) -> bool { (**self).is_interactive() }

    fn overwrite(&self, message: &str) { (**self).overwrite(message) }

    fn ask(&self, question: &str) -> io::Result<String> { (**self).ask(question) }

    fn ask_and_hide_answer(&self, question: &str) -> io::Result<String> {
        (**self).ask_and_hide_answer(question)
    }
}

/// Silent, non-interactive [`Io`] over an in-memory [`CredentialCache`].
#[derive(Debug, Default)]
pub struct NullIo {
    credentials: CredentialCache,
}

impl NullIo {
    pub fn new() -> Self { Self::default() }

    pub fn with_credentials(credentials: CredentialCache) -> Self { Self { credentials } }

    pub fn credentials(&self) -> &CredentialCache { &self.credentials }
}

impl AuthStore for NullIo {
    fn has_authorization(&self, origin: &str) -> bool { self.credentials.has_authorization(origin) }

    fn authorization(&self, origin: &str) -> Option<Authorization> {
        self.credentials.authorization(origin)
    }

    fn set_authorization(&self, origin: &str, username: &str, password: &str) {
        self.credentials.set_authorization(origin, username, password)
    }

    fn last_username(&self) -> Option<String> { self.credentials.last_username() }

    fn last_password(&self) -> Option<String> { self.credentials.last_password() }
}

impl Io for NullIo {
    fn is_interactive(&self) -> bool { false }

    fn overwrite(&self, _message: &str) {}

    fn ask(&self, _question: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "not an interactive console"))
    }

    fn ask_and_hide_answer(&self, question: &str) -> io::Result<String> { self.ask(question) }
}
