use crate::{AuthStore, Authorization, RequestOptions};

/// Decide which authentication to attach to a request for `origin`.
///
/// Exactly one branch applies:
/// 1. credentials already stored for `origin` are used as-is;
/// 2. otherwise a non-empty last-known username is paired with the last-known
///    password, used, and stored for `origin` so later requests reuse it;
/// 3. otherwise the options are empty.
///
/// No I/O happens here. The only side effect is the `set_authorization` call
/// of branch 2.
pub fn options_for<S: AuthStore + ?Sized>(store: &S, origin: &str) -> RequestOptions {
    if store.has_authorization(origin) {
        tracing::debug!(origin, "using stored credentials");
        return store
            .authorization(origin)
            .map(|auth| RequestOptions::basic(&auth))
            .unwrap_or_default();
    }

    match store.last_username().filter(|username| !username.is_empty()) {
        Some(username) => {
            let password = store.last_password().unwrap_or_default();
            tracing::debug!(origin, "promoting last-known credentials");
            store.set_authorization(origin, &username, &password);
            RequestOptions::basic(&Authorization::new(username, password))
        }
        None => RequestOptions::default(),
    }
}
