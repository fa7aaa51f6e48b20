use crate::Authorization;

/// Caller-owned credential storage consulted by [`options_for`](crate::options_for).
///
/// All methods take `&self`: implementations are shared between concurrent
/// downloads and carry their own synchronisation.
pub trait AuthStore {
    fn has_authorization(&self, origin: &str) -> bool;

    fn authorization(&self, origin: &str) -> Option<Authorization>;

    fn set_authorization(&self, origin: &str, username: &str, password: &str);

    /// Username supplied out-of-band, e.g. from configuration or a previous prompt.
    fn last_username(&self) -> Option<String>;

    fn last_password(&self) -> Option<String>;
}

impl<S: AuthStore + ?Sized> AuthStore for &S {
    fn has_authorization(&self, origin: &str) -> bool { (**self).has_authorization(origin) }

    fn authorization(&self, origin: &str) -> Option<Authorization> { (**self).authorization(origin) }

    fn set_authorization(&self, origin: &str, username: &str, password: &str) {
        (**self).set_authorization(origin, username, password)
    }

    fn last_username(&self) -> Option<String> { (**self).last_username() }

    fn last_password(&self) -> Option<String> { (**self).last_password() }
}

impl<S: AuthStore + ?Sized> AuthStore for std::sync::Arc<S> {
    fn has_authorization(&self, origin: &str) -> bool { (**self).has_authorization(origin) }

    fn authorization(&self, origin: &str) -> Option<Authorization> { (**self).authorization(origin) }

    fn set_authorization(&self, origin: &str, username: &str, password: &str) {
        (**self).set_authorization(origin, username, password)
    }

    fn last_username(&self) -> Option<String> { (**self).last_username() }

    fn last_password(&self) -> Option<String> { (**self).last_password() }
}
