//! I/O side of fetching: the HTTP client seam, the async [`Fetcher`] and the
//! blocking [`RemoteFilesystem`] built on it.

mod blocking;
mod fetcher;
mod http;
mod sink;

pub use blocking::RemoteFilesystem;
pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::{ClientSettings, ReqwestClient};
