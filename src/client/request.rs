//! Request descriptor and builder.

use std::time::Duration;

use super::ApiError;

/// An immutable HTTP request descriptor.
///
/// Created once per logical operation and reused verbatim for every
/// retry attempt; the orchestrator never mutates it. Uses standard
/// `http` crate types for method and headers, keeping the descriptor
/// decoupled from the HTTP library that eventually sends it.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
    /// Per-attempt timeout; `None` defers to the transport's default.
    pub timeout: Option<Duration>,
}

impl Request {
    /// Creates a new request with the given method and URL.
    ///
    /// Headers start empty, body is `None`, and no per-attempt timeout
    /// is set.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Builds [`Request`] descriptors against a base URL.
///
/// Holds the service base address, default headers, and the per-attempt
/// timeout applied to every request it produces. Purely a value
/// transformer: no network access, no side effects.
///
/// # Example
///
/// ```
/// use sturdy_http::client::RequestBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), sturdy_http::client::ApiError> {
/// let builder = RequestBuilder::parse("https://api.example.com/")?
///     .with_timeout(Duration::from_secs(10));
/// let request = builder.get("users/101")?;
/// assert_eq!(request.url.as_str(), "https://api.example.com/users/101");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base: url::Url,
    headers: http::HeaderMap,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Creates a builder from an already-parsed base URL.
    #[must_use]
    pub fn new(base: url::Url) -> Self {
        Self {
            base,
            headers: http::HeaderMap::new(),
            timeout: None,
        }
    }

    /// Creates a builder by parsing the base address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the address is empty or
    /// cannot be parsed as an absolute URL.
    pub fn parse(base: &str) -> Result<Self, ApiError> {
        if base.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "base address must not be empty".to_string(),
            ));
        }
        let base = url::Url::parse(base)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid base address: {e}")))?;
        Ok(Self::new(base))
    }

    /// Adds a default header applied to every built request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the per-attempt timeout applied to every built request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base(&self) -> &url::Url {
        &self.base
    }

    /// Builds a GET request for the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the URL cannot be formed.
    pub fn get(&self, path: &str) -> Result<Request, ApiError> {
        self.request(http::Method::GET, path, None)
    }

    /// Builds a DELETE request for the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the URL cannot be formed.
    pub fn delete(&self, path: &str) -> Result<Request, ApiError> {
        self.request(http::Method::DELETE, path, None)
    }

    /// Builds a POST request with the given body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the URL cannot be formed.
    pub fn post(&self, path: &str, body: Vec<u8>) -> Result<Request, ApiError> {
        self.request(http::Method::POST, path, Some(body))
    }

    /// Builds a PUT request with the given body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the URL cannot be formed.
    pub fn put(&self, path: &str, body: Vec<u8>) -> Result<Request, ApiError> {
        self.request(http::Method::PUT, path, Some(body))
    }

    /// Builds a request with an arbitrary method.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when:
    /// - the path cannot be joined onto the base URL, or
    /// - the method requires a body (POST, PUT, PATCH) and none was given.
    pub fn request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request, ApiError> {
        if body.is_none() && Self::requires_body(&method) {
            return Err(ApiError::InvalidRequest(format!(
                "{method} request requires a body"
            )));
        }

        let url = self
            .base
            .join(path)
            .map_err(|e| ApiError::InvalidRequest(format!("cannot form URL for {path:?}: {e}")))?;

        let mut request = Request::new(method, url);
        for (name, value) in &self.headers {
            request.headers.append(name, value.clone());
        }
        request.body = body;
        request.timeout = self.timeout;
        Ok(request)
    }

    fn requires_body(method: &http::Method) -> bool {
        *method == http::Method::POST || *method == http::Method::PUT || *method == http::Method::PATCH
    }
}
