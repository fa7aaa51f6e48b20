//! Error types for remotefs-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The '{url}' URL not found")]
    NotFound { url: String },

    /// The server asked for credentials. `interactive` tells whether the IO
    /// collaborator could have prompted for them; `rejected` whether the
    /// request that failed already carried some.
    #[error("The '{url}' URL required authentication{}", auth_hint(.interactive, .rejected))]
    AuthenticationRequired {
        url:         String,
        interactive: bool,
        rejected:    bool,
    },

    #[error("The '{url}' file could not be downloaded: {message}")]
    Transport {
        url:     String,
        code:    Option<u16>,
        message: String,
    },

    #[error("failed to read credentials: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start download runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Flat classification of [`Error`] for callers deciding what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AuthenticationRequired,
    Transport,
    /// Failures on this side of the wire: disk, console, runtime, client setup.
    Local,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::AuthenticationRequired { .. } => ErrorKind::AuthenticationRequired,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Prompt(_) | Error::Write { .. } | Error::Runtime(_) | Error::Client(_) => {
                ErrorKind::Local
            }
        }
    }

    /// HTTP status behind the failure, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { .. } => Some(404),
            Error::AuthenticationRequired { .. } => Some(401),
            Error::Transport { code, .. } => *code,
            _ => None,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

fn auth_hint(interactive: &bool, rejected: &bool) -> &'static str {
    match (*rejected, *interactive) {
        (true, false) => ": the supplied credentials were rejected",
        (false, false) => ".\nYou must be using the interactive console to authenticate",
        (_, true) => "",
    }
}
