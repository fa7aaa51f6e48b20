//! HTTP basic credential resolution for remote package fetching.
//!
//! Decides which authentication material goes out with a request, without
//! touching the network and without owning persistence.
//!
//! # Key Features
//!
//! - **Pluggable store**: [`AuthStore`] is the only seam; callers bring their own cache
//! - **Promotion**: out-of-band credentials are remembered for the origin on first use
//! - **Concurrent cache**: [`CredentialCache`] allows parallel readers and serialised writers
//!
//! # Example
//!
//! ```
//! use remotefs_auth::{AuthStore, CredentialCache, options_for};
//!
//! let cache = CredentialCache::new().with_last_credentials("login", "secret");
//! let options = options_for(&cache, "https://repo.example.org");
//!
//! assert!(options.header_lines()[0].starts_with("Authorization: Basic "));
//! assert!(cache.authorization("repo.example.org").is_some());
//! ```

pub use self::cache::{CredentialCache, origin_key};
pub use self::credentials::Authorization;
pub use self::options::{AUTHORIZATION, RequestOptions};
pub use self::resolver::options_for;
pub use self::store::AuthStore;

mod cache;
mod credentials;
mod options;
mod resolver;
mod store;
