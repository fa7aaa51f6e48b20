use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;
use remotefs_auth::{AuthStore, Authorization, CredentialCache};
use remotefs_fetch::Io;

/// [`Io`] backed by the terminal on stderr, so stdout only carries content.
#[derive(Debug)]
pub struct ConsoleIo {
    term:        Term,
    credentials: CredentialCache,
    interactive: bool,
    /// A status line is on screen without its trailing newline.
    pending:     AtomicBool,
}

impl ConsoleIo {
    pub fn new(credentials: CredentialCache, no_interaction: bool) -> Self {
        let term = Term::stderr();
        let interactive = !no_interaction && term.is_term();
        Self { term, credentials, interactive, pending: AtomicBool::new(false) }
    }

    /// Terminate the current status line, if any.
    pub fn finish(&self) {
        if self.pending.swap(false, Ordering::AcqRel) {
            let _ = self.term.write_line("");
        }
    }
}

impl AuthStore for ConsoleIo {
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

impl Io for ConsoleIo {
    fn is_interactive(&self) -> bool { self.interactive }

    fn overwrite(&self, message: &str) {
        // Piped stderr gets one line per update.
        if !self.term.is_term() {
            let _ = self.term.write_line(message);
            return;
        }
        let _ = self.term.clear_line();
        if self.term.write_str(message).is_ok() {
            self.pending.store(true, Ordering::Release);
        }
    }

    fn ask(&self, question: &str) -> io::Result<String> {
        self.finish();
        self.term.write_str(question)?;
        self.term.read_line()
    }

    fn ask_and_hide_answer(&self, question: &str) -> io::Result<String> {
        self.finish();
        self.term.write_str(question)?;
        self.term.read_secure_line()
    }
}
