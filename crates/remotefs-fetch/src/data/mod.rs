//! Plain data types for fetching.
//!
//! Configuration, the events a transport reports while a body streams in, and
//! the per-download session those events update.

pub mod notification;
pub mod options;
pub mod session;

pub use notification::Notification;
pub use options::FetchOptions;
pub use session::DownloadSession;
