use std::error::Error as StdError;
use std::path::Path;

use bytes::Bytes;
use futures_util::StreamExt;
use remotefs_auth::options_for;
use url::Url;

use crate::core::{classify_failure, handle_notification, progress_line};
use crate::data::{DownloadSession, FetchOptions, Notification};
use crate::effects::http::HttpClient;
use crate::effects::sink::Sink;
use crate::error::{Error, Result};
use crate::io::Io;

/// Downloads single files, attaching credentials from the IO collaborator and
/// reporting progress to it.
pub struct Fetcher<C: HttpClient, I: Io> {
    client:  C,
    io:      I,
    options: FetchOptions,
}

impl<C: HttpClient, I: Io> Fetcher<C, I> {
    pub fn new(client: C, io: I) -> Self {
        Self {
            client,
            io,
            options: FetchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &C { &self.client }

    pub fn io(&self) -> &I { &self.io }

    pub fn options(&self) -> FetchOptions { self.options }

    /// Retrieve `file_url` into memory.
    ///
    /// `origin_url` is the authority credentials are looked up and stored under;
    /// it may differ from the file's host when fetching from a mirror.
    pub async fn get_contents(&self, origin_url: &str, file_url: &str) -> Result<Bytes> {
        let mut session = self.session(origin_url, file_url);
        let mut sink = Sink::memory();

        self.transfer(&mut session, &mut sink).await?;

        Ok(sink.into_bytes())
    }

    /// Retrieve `file_url` into `destination`.
    ///
    /// The body is staged next to the destination and moved into place only
    /// once complete. On error the destination is not created.
    pub async fn copy(
        &self,
        origin_url: &str,
        file_url: &str,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let destination = destination.as_ref();
        let mut session = self.session(origin_url, file_url);
        let mut sink = Sink::staged_file(destination)?;

        self.transfer(&mut session, &mut sink).await?;
        sink.commit().await?;

        tracing::debug!(url = file_url, destination = %destination.display(), "placed download");
        Ok(())
    }

    fn session(&self, origin_url: &str, file_url: &str) -> DownloadSession {
        DownloadSession::new(origin_url, file_url).with_progress(self.options.progress)
    }

    /// Run a session to completion, prompting once for credentials if the
    /// server asks for them and the console can answer.
    async fn transfer(&self, session: &mut DownloadSession, sink: &mut Sink) -> Result<()> {
        if session.progress_enabled {
            self.io.overwrite("    Downloading: connection...");
        }

        let result = match self.attempt(session, sink).await {
            Err(Error::AuthenticationRequired {
                interactive: true, ..
            }) => {
                self.prompt_credentials(session)?;
                sink.reset().await?;
                self.attempt(session, sink).await
            }
            other => other,
        };

        match result {
            Ok(bytes) => {
                if session.progress_enabled && session.last_reported != Some(100) {
                    self.io.overwrite(&progress_line(100));
                }
                tracing::info!(url = %session.file_url, bytes, "downloaded");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(url = %session.file_url, "{err}");
                Err(err)
            }
        }
    }

    /// One request/response cycle. Returns the number of body bytes received.
    async fn attempt(&self, session: &mut DownloadSession, sink: &mut Sink) -> Result<u64> {
        let options = options_for(&self.io, &session.origin_url);
        session.begin_attempt(options.has_authorization());

        tracing::debug!(
            url = %session.file_url,
            origin = %session.origin_url,
            authenticated = session.credentials_sent,
            "requesting"
        );

        let response = self
            .client
            .get(&session.file_url, &options)
            .await
            .map_err(|e| transport_error(session, &e))?;

        if !response.is_success() {
            let message = response.status_line();
            return Err(classify_failure(session, response.status, &message, &self.io));
        }

        if let Some(size) = response.content_length {
            handle_notification(session, Notification::FileSize(size), &self.io)?;
        }

        let mut body = response.body;
        let mut transferred = 0u64;

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| transport_error(session, &e))?;
            sink.write(&chunk).await?;
            transferred += chunk.len() as u64;

            let max = session.bytes_max;
            handle_notification(session, Notification::Progress { transferred, max }, &self.io)?;
        }

        Ok(transferred)
    }

    fn prompt_credentials(&self, session: &DownloadSession) -> Result<()> {
        let host = Url::parse(&session.file_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
            .unwrap_or_else(|| session.origin_url.clone());

        self.io.overwrite(&format!("    Authentication required ({host}):"));
        let username = self.io.ask("      Username: ").map_err(Error::Prompt)?;
        let password = self
            .io
            .ask_and_hide_answer("      Password: ")
            .map_err(Error::Prompt)?;

        self.io
            .set_authorization(&session.origin_url, username.trim(), &password);
        Ok(())
    }
}

/// A failure with no HTTP status behind it: DNS, connect, TLS, timeout, reset.
fn transport_error(session: &DownloadSession, err: &(dyn StdError + 'static)) -> Error {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    Error::Transport {
        url: session.file_url.clone(),
        code: None,
        message,
    }
}
