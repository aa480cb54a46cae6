//! Shared test fixtures for the client module.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::time::Sleeper;

use super::{Request, Response, Transport, TransportError};

/// Builds a response with the given status and body.
pub(super) fn response(status: u16, body: &[u8]) -> Response {
    Response::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.to_vec(),
    )
}

/// Mock transport that returns a configurable sequence of outcomes.
///
/// Panics if more sends occur than the script allows, so tests can
/// assert that responses beyond the budget are never consulted.
#[derive(Debug)]
pub(super) struct ScriptedTransport {
    script: Mutex<Vec<Result<Response, TransportError>>>,
    requests: Mutex<Vec<Request>>,
    call_count: AtomicUsize,
}

impl ScriptedTransport {
    pub(super) fn new(script: Vec<Result<Response, TransportError>>) -> Self {
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Script of plain status responses with empty bodies.
    pub(super) fn statuses(statuses: &[u16]) -> Self {
        Self::new(statuses.iter().map(|s| Ok(response(*s, b""))).collect())
    }

    /// Script that times out on every send.
    pub(super) fn always_timeout(len: usize) -> Self {
        Self::new((0..len).map(|_| Err(TransportError::Timeout)).collect())
    }

    pub(super) fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub(super) fn captured_requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, req: Request) -> Result<Response, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        let mut script = self.script.lock().unwrap();
        assert!(!script.is_empty(), "transport sent more often than scripted");
        script.remove(0)
    }
}

impl Transport for std::sync::Arc<ScriptedTransport> {
    async fn send(&self, req: Request) -> Result<Response, TransportError> {
        (**self).send(req).await
    }
}

/// Sleeper that records requested delays and returns immediately.
#[derive(Debug, Default)]
pub(super) struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

impl Sleeper for std::sync::Arc<RecordingSleeper> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// Test URL helper.
pub(super) fn test_url() -> url::Url {
    url::Url::parse("https://api.example.com/users/101").unwrap()
}

/// GET request against [`test_url`].
pub(super) fn test_request() -> Request {
    Request::get(test_url())
}
