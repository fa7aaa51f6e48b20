use std::fmt;

use crate::Authorization;

pub const AUTHORIZATION: &str = "Authorization";

/// Headers handed to the transport for one request.
///
/// Empty when no credentials apply.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self { Self::default() }

    /// Options carrying a basic `Authorization` header for `auth`.
    pub fn basic(auth: &Authorization) -> Self {
        Self::new().header(AUTHORIZATION, auth.basic_header_value())
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool { self.headers.is_empty() }

    pub fn headers(&self) -> &[(String, String)] { &self.headers }

    /// First value of `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_authorization(&self) -> bool { self.get(AUTHORIZATION).is_some() }

    /// Headers rendered as `Name: value` lines.
    pub fn header_lines(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect()
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (key, value) in &self.headers {
            if key.eq_ignore_ascii_case(AUTHORIZATION) {
                list.entry(&format_args!("{key}: <redacted>"));
            } else {
                list.entry(&format_args!("{key}: {value}"));
            }
        }
        list.finish()
    }
}
