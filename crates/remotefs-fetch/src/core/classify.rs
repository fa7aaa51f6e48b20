use crate::data::DownloadSession;
use crate::error::Error;
use crate::io::Io;

/// Turn a failed request into a typed error.
///
/// The first classified failure of a session clears `first_call`. Only then
/// does a 401 count as "authentication required". A later 401 is a plain
/// transport failure carrying code 401.
pub fn classify_failure<I: Io + ?Sized>(
    session: &mut DownloadSession,
    code: u16,
    message: &str,
    io: &I,
) -> Error {
    let first_call = std::mem::replace(&mut session.first_call, false);
    let url = session.file_url.clone();

    match code {
        404 => Error::NotFound { url },
        401 if first_call => Error::AuthenticationRequired {
            url,
            interactive: io.is_interactive(),
            rejected: session.credentials_sent,
        },
        _ => Error::Transport {
            url,
            code: Some(code),
            message: message.to_string(),
        },
    }
}
