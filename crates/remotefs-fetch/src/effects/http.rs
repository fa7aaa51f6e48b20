use std::fmt;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use remotefs_auth::RequestOptions;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line, announced size and body of a response.
///
/// The body is only read for successful statuses.
pub struct HttpResponse<E> {
    pub status:         u16,
    pub reason:         String,
    pub content_length: Option<u64>,
    pub body:           BoxStream<'static, std::result::Result<Bytes, E>>,
}

impl<E> HttpResponse<E> {
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }

    /// `HTTP 404 Not Found`-style summary of the status line.
    pub fn status_line(&self) -> String {
        if self.reason.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            format!("HTTP {} {}", self.status, self.reason)
        }
    }
}

impl<E> fmt::Debug for HttpResponse<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations follow redirects and apply their own timeouts. Error
/// statuses are returned as responses, not as `Err`; `Err` is reserved for
/// failures where no status exists (DNS, connect, TLS, timeout).
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET for `url` with the headers in `options`.
    fn get(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use std::time::Duration;

    use reqwest::{Client, Proxy, Url};

    use super::*;
    use crate::error::{Error, Result};

    /// Settings for building a [`ReqwestClient`].
    ///
    /// The timeouts are the only way a stalled transfer ends; they surface as
    /// transport errors.
    #[derive(Debug, Clone)]
    pub struct ClientSettings {
        pub connect_timeout: Duration,
        pub timeout:         Duration,
        pub user_agent:      String,
        pub proxies:         Vec<Url>,
        /// Ignore proxies from the environment.
        pub no_proxy:        bool,
    }

    impl Default for ClientSettings {
        fn default() -> Self {
            Self {
                connect_timeout: Duration::from_secs(30),
                timeout:         Duration::from_secs(300),
                user_agent:      concat!("remotefs/", env!("CARGO_PKG_VERSION")).to_string(),
                proxies:         Vec::new(),
                no_proxy:        false,
            }
        }
    }

    impl ClientSettings {
        #[must_use]
        pub fn connect_timeout(mut self, timeout: Duration) -> Self {
            self.connect_timeout = timeout;
            self
        }

        #[must_use]
        pub fn timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }

        #[must_use]
        pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
            self.user_agent = user_agent.into();
            self
        }

        #[must_use]
        pub fn proxy(mut self, proxy: Url) -> Self {
            self.proxies.push(proxy);
            self
        }

        #[must_use]
        pub fn no_proxy(mut self) -> Self {
            self.no_proxy = true;
            self
        }

        pub fn build(self) -> Result<Client> {
            let mut builder = Client::builder()
                .connect_timeout(self.connect_timeout)
                .timeout(self.timeout)
                .user_agent(self.user_agent);

            if self.no_proxy {
                builder = builder.no_proxy();
            }

            let (secure, insecure): (Vec<Url>, Vec<Url>) =
                self.proxies.into_iter().partition(|u| u.scheme() == "https");

            for u in secure {
                let proxy = Proxy::https(u.as_str())
                    .map_err(|e| Error::Client(format!("invalid proxy URL {u}: {e}")))?;
                builder = builder.proxy(proxy);
            }
            for u in insecure {
                let proxy = Proxy::http(u.as_str())
                    .map_err(|e| Error::Client(format!("invalid proxy URL {u}: {e}")))?;
                builder = builder.proxy(proxy);
            }

            builder.build().map_err(|e| Error::Client(e.to_string()))
        }
    }

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default settings.
        pub fn new() -> Result<Self> { Self::with_settings(ClientSettings::default()) }

        pub fn with_settings(settings: ClientSettings) -> Result<Self> {
            Ok(Self {
                client: settings.build()?,
            })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            options: &RequestOptions,
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in options.headers() {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let status = response.status();

            Ok(HttpResponse {
                status:         status.as_u16(),
                reason:         status.canonical_reason().unwrap_or_default().to_string(),
                content_length: response.content_length(),
                body:           Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::{ClientSettings, ReqwestClient};
