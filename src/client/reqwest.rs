//! Production transport implementation using reqwest.

use super::{Request, Response, Transport, TransportError};

/// Production transport backed by `reqwest::Client`.
///
/// A thin wrapper that performs exactly one exchange per
/// [`Transport::send`] call. Connection pooling and TLS stay inside
/// reqwest; the per-attempt timeout from the [`Request`] descriptor is
/// applied to each individual send.
///
/// # Example
///
/// ```no_run
/// use sturdy_http::client::{ReqwestTransport, Transport, Request};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let url = Url::parse("https://api.example.com/users/101")?;
/// let response = transport.send(Request::get(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (proxies, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn map_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connect(Box::new(e))
    } else if e.is_builder() {
        TransportError::Other(e.to_string())
    } else {
        TransportError::Connect(Box::new(e))
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, req: Request) -> Result<Response, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = req.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(map_send_error)?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}
