//! JSON resource facade over the retry orchestrator.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::time::{Sleeper, TokioSleeper};

use super::{
    ApiError, Orchestrator, Request, RequestBuilder, RequestObserver, Response, RetryPolicy,
    TracingObserver, Transport,
};

/// A small REST-style client: a [`RequestBuilder`] for a service base
/// URL plus an [`Orchestrator`] carrying the retry policy.
///
/// Convenience methods issue JSON CRUD calls (`GET /users/101`,
/// `POST /users`, ...) with `Content-Type`/`Accept` headers set, and
/// resolve through the full retry pipeline.
///
/// Note that [`post_json`](RestClient::post_json) is retried like any
/// other verb; supply an idempotency key or use it only for idempotent
/// operations if duplicate submissions matter.
///
/// # Example
///
/// ```no_run
/// use sturdy_http::client::{RestClient, ReqwestTransport};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RestClient::parse(ReqwestTransport::new(), "https://api.example.com/")?;
/// let user: User = client.get_json("users/101").await?;
/// println!("{} = {}", user.id, user.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RestClient<T, S = TokioSleeper, O = TracingObserver> {
    builder: RequestBuilder,
    orchestrator: Orchestrator<T, S, O>,
}

impl<T> RestClient<T> {
    /// Creates a client for the given base URL with default retry
    /// policy, sleeper, and observer.
    #[must_use]
    pub fn new(transport: T, base: url::Url) -> Self {
        Self {
            builder: RequestBuilder::new(base),
            orchestrator: Orchestrator::new(transport),
        }
    }

    /// Creates a client by parsing the base address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the address is empty
    /// or not an absolute URL.
    pub fn parse(transport: T, base: &str) -> Result<Self, ApiError> {
        Ok(Self {
            builder: RequestBuilder::parse(base)?,
            orchestrator: Orchestrator::new(transport),
        })
    }
}

impl<T, S, O> RestClient<T, S, O> {
    /// Sets a custom sleeper for backoff delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> RestClient<T, S2, O> {
        RestClient {
            builder: self.builder,
            orchestrator: self.orchestrator.with_sleeper(sleeper),
        }
    }

    /// Sets a custom observability hook.
    #[must_use]
    pub fn with_observer<O2>(self, observer: O2) -> RestClient<T, S, O2> {
        RestClient {
            builder: self.builder,
            orchestrator: self.orchestrator.with_observer(observer),
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.orchestrator = self.orchestrator.with_retry_policy(policy);
        self
    }

    /// Sets the per-attempt timeout applied to every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.builder = self.builder.with_timeout(timeout);
        self
    }

    /// Adds a default header applied to every request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.builder = self.builder.with_header(name, value);
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base(&self) -> &url::Url {
        self.builder.base()
    }
}

impl<T: Transport, S: Sleeper, O: RequestObserver> RestClient<T, S, O> {
    /// Issues a GET and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on a malformed path or a terminal failure.
    pub async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let request = self.builder.get(path)?;
        self.orchestrator.execute(request).await
    }

    /// Issues a GET with `Accept: application/json` and decodes the
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on a malformed path, a terminal failure, or
    /// a body that does not decode into `R` ([`ApiError::Decode`]).
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.builder.get(path)?.with_header(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );
        let response = self.orchestrator.execute(request).await?;
        serde_json::from_slice(&response.body).map_err(ApiError::Decode)
    }

    /// Issues a POST with a JSON body and returns the raw response.
    ///
    /// Retried like any other verb when the failure is transient; the
    /// caller is responsible for idempotency.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the body cannot be
    /// serialized, or any terminal failure from the orchestrator.
    pub async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self.json_request(http::Method::POST, path, body)?;
        self.orchestrator.execute(request).await
    }

    /// Issues a PUT with a JSON body and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the body cannot be
    /// serialized, or any terminal failure from the orchestrator.
    pub async fn put_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self.json_request(http::Method::PUT, path, body)?;
        self.orchestrator.execute(request).await
    }

    /// Issues a DELETE and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on a malformed path or a terminal failure.
    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        let request = self.builder.delete(path)?;
        self.orchestrator.execute(request).await
    }

    fn json_request<B: Serialize>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> Result<Request, ApiError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ApiError::InvalidRequest(format!("cannot serialize body: {e}")))?;
        let request = self.builder.request(method, path, Some(bytes))?.with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        Ok(request)
    }
}
