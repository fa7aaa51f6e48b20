use std::path::Path;

use bytes::Bytes;
use tokio::runtime::{Builder, Runtime};

use crate::effects::fetcher::Fetcher;
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};
use crate::io::Io;

/// Blocking front of a [`Fetcher`].
///
/// Each call drives one download on a private current-thread runtime and
/// returns when it has completed or failed. Must not be used from inside
/// another tokio runtime.
pub struct RemoteFilesystem<C: HttpClient, I: Io> {
    fetcher: Fetcher<C, I>,
    runtime: Runtime,
}

impl<C: HttpClient, I: Io> RemoteFilesystem<C, I> {
    pub fn new(fetcher: Fetcher<C, I>) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        Ok(Self { fetcher, runtime })
    }

    pub fn fetcher(&self) -> &Fetcher<C, I> { &self.fetcher }

    pub fn io(&self) -> &I { self.fetcher.io() }

    pub fn get_contents(&self, origin_url: &str, file_url: &str) -> Result<Bytes> {
        self.runtime
            .block_on(self.fetcher.get_contents(origin_url, file_url))
    }

    pub fn copy(&self, origin_url: &str, file_url: &str, destination: impl AsRef<Path>) -> Result<()> {
        self.runtime
            .block_on(self.fetcher.copy(origin_url, file_url, destination))
    }
}

#[cfg(feature = "reqwest")]
impl<I: Io> RemoteFilesystem<crate::effects::http::ReqwestClient, I> {
    /// A filesystem over a [`ReqwestClient`](crate::ReqwestClient) built from `settings`.
    pub fn with_settings(
        io: I,
        settings: crate::effects::http::ClientSettings,
        options: crate::data::FetchOptions,
    ) -> Result<Self> {
        let client = crate::effects::http::ReqwestClient::with_settings(settings)?;
        Self::new(Fetcher::new(client, io).with_options(options))
    }
}
