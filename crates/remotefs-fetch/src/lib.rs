//! Single-file HTTP fetching for package archives and metadata.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Plain types: options, transport notifications, per-download session state
//! - [`core`] - Pure decisions: progress arithmetic, failure classification
//! - [`effects`] - I/O: the HTTP client seam, the async fetcher and its blocking facade
//!
//! # Key Features
//!
//! - **Transparent basic auth**: credentials come from a caller-owned store via
//!   [`remotefs_auth::options_for`]; an interactive caller is prompted once and the
//!   request reissued
//! - **Typed failures**: not-found, authentication-required and transport errors are distinct
//! - **Progress sink**: human-readable progress lines go to the IO collaborator
//! - **No partial files**: [`Fetcher::copy`] only places the destination once the body is complete

pub mod core;
pub mod data;
mod effects;
mod error;
mod io;

pub use data::{DownloadSession, FetchOptions, Notification};
pub use effects::{BoxStream, Fetcher, HttpClient, HttpResponse, RemoteFilesystem};
#[cfg(feature = "reqwest")]
pub use effects::{ClientSettings, ReqwestClient};
pub use error::{Error, ErrorKind, Result};
pub use io::{Io, NullIo};

pub use remotefs_auth::{AuthStore, Authorization, CredentialCache, RequestOptions};
