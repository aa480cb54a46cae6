//! Resilient request client: retrying orchestration over a
//! single-exchange transport.
//!
//! This module provides types and traits for:
//! - Building immutable request descriptors ([`Request`], [`RequestBuilder`])
//! - Abstracting the network exchange ([`Transport`], [`Response`])
//! - Production transport implementation ([`ReqwestTransport`])
//! - Failure classification ([`AttemptFailure`], [`IsRetryable`])
//! - Bounded retries with backoff ([`Orchestrator`], [`RetryPolicy`])
//! - Caller-side cancellation ([`CancelSource`], [`CancelToken`])
//! - Structured observability events ([`RequestObserver`], [`RequestEvent`])
//! - A JSON resource facade ([`RestClient`])

mod cancel;
mod classify;
mod error;
mod observer;
mod orchestrator;
mod request;
mod reqwest;
mod rest;
mod retry;
mod transport;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod observer_tests;
#[cfg(test)]
mod transport_tests;

pub use cancel::{CancelSource, CancelToken};
pub use classify::{AttemptFailure, IsRetryable};
pub use error::{ApiError, TransportError};
pub use observer::{
    EventDetail, NoopObserver, ObserverError, Phase, RequestEvent, RequestObserver,
    TracingObserver,
};
pub use orchestrator::Orchestrator;
pub use request::{Request, RequestBuilder};
pub use self::reqwest::ReqwestTransport;
pub use rest::RestClient;
pub use retry::RetryPolicy;
pub use transport::{Response, Transport};
