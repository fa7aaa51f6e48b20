//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use bytes::Bytes;
use remotefs_fetch::{
    AuthStore, Authorization, CredentialCache, HttpClient, HttpResponse, Io, RequestOptions,
};

pub const BASIC_LOGIN_PASSWORD: &str = "Basic bG9naW46cGFzc3dvcmQ=";

/// IO collaborator that records progress lines and answers prompts from a queue.
#[derive(Default)]
pub struct RecordingIo {
    pub credentials: CredentialCache,
    pub interactive: bool,
    answers:         Mutex<VecDeque<String>>,
    lines:           Mutex<Vec<String>>,
    questions:       Mutex<Vec<String>>,
}

impl RecordingIo {
    pub fn new() -> Self { Self::default() }

    pub fn interactive(answers: &[&str]) -> Self {
        Self {
            interactive: true,
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> { self.lines.lock().unwrap().clone() }

    pub fn questions(&self) -> Vec<String> { self.questions.lock().unwrap().clone() }

    fn answer(&self, question: &str) -> io::Result<String> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no answer queued"))
    }
}

impl AuthStore for RecordingIo {
    fn has_authorization(&self, origin: &str) -> bool { self.credentials.has_authorization(origin) }

    fn authorization(&self, origin: &str) -> Option<Authorization> {
        self.credentials.authorization(origin)
    }

    fn set_authorization(&self, origin: &str, username: &str, password: &str) {
        self.credentials.set_authorization(origin, username, password)
    }

    fn last_username(&self) -> Option<String> { self.credentials.last_username() }

    fn last_password(&self) -> Option<String> { self.credentials.last_password() }
}

impl Io for RecordingIo {
    fn is_interactive(&self) -> bool { self.interactive }

    fn overwrite(&self, message: &str) { self.lines.lock().unwrap().push(message.to_string()); }

    fn ask(&self, question: &str) -> io::Result<String> { self.answer(question) }

    fn ask_and_hide_answer(&self, question: &str) -> io::Result<String> { self.answer(question) }
}

#[derive(Debug)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl std::error::Error for MockError {}

/// Canned resource served by [`MockClient`].
#[derive(Debug, Clone)]
pub struct Route {
    pub status:        u16,
    pub body:          Vec<u8>,
    pub chunk_size:    usize,
    pub announce_size: bool,
    /// `Authorization` value the route insists on; anything else gets a 401.
    pub credentials:   Option<String>,
    /// Number of chunks delivered before the connection "drops".
    pub break_after:   Option<usize>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status:        200,
            body:          body.into(),
            chunk_size:    4,
            announce_size: true,
            credentials:   None,
            break_after:   None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::ok(Vec::new())
        }
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn without_size(mut self) -> Self {
        self.announce_size = false;
        self
    }

    pub fn protected(mut self, authorization: &str) -> Self {
        self.credentials = Some(authorization.to_string());
        self
    }

    pub fn break_after(mut self, chunks: usize) -> Self {
        self.break_after = Some(chunks);
        self
    }
}

/// In-memory HTTP client. Unknown URLs answer 404.
#[derive(Default)]
pub struct MockClient {
    routes:   HashMap<String, Route>,
    requests: Mutex<Vec<(String, Option<String>)>>,
}

impl MockClient {
    pub fn new() -> Self { Self::default() }

    pub fn route(mut self, url: &str, route: Route) -> Self {
        self.routes.insert(url.to_string(), route);
        self
    }

    /// Requests seen so far with the `Authorization` header each carried.
    pub fn requests(&self) -> Vec<(String, Option<String>)> { self.requests.lock().unwrap().clone() }
}

fn empty_response(status: u16, reason: &str) -> HttpResponse<MockError> {
    HttpResponse {
        status,
        reason: reason.to_string(),
        content_length: Some(0),
        body: Box::pin(futures_util::stream::empty::<Result<Bytes, MockError>>()),
    }
}

impl HttpClient for MockClient {
    type Error = MockError;

    async fn get(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse<MockError>, MockError> {
        let authorization = options.get("Authorization").map(str::to_owned);
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), authorization.clone()));

        let Some(route) = self.routes.get(url) else {
            return Ok(empty_response(404, "Not Found"));
        };

        if let Some(expected) = &route.credentials
            && authorization.as_deref() != Some(expected.as_str())
        {
            return Ok(empty_response(401, "Unauthorized"));
        }

        if route.status != 200 {
            return Ok(empty_response(route.status, ""));
        }

        let mut chunks: Vec<Result<Bytes, MockError>> = route
            .body
            .chunks(route.chunk_size.max(1))
            .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
            .collect();
        if let Some(delivered) = route.break_after {
            chunks.truncate(delivered);
            chunks.push(Err(MockError("connection reset by peer".into())));
        }

        Ok(HttpResponse {
            status:         200,
            reason:         "OK".into(),
            content_length: route.announce_size.then_some(route.body.len() as u64),
            body:           Box::pin(futures_util::stream::iter(chunks)),
        })
    }
}
