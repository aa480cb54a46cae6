//! sturdy-http: a resilient async HTTP request client.
//!
//! Wraps a single-exchange [`Transport`](client::Transport) in a retry
//! orchestrator that classifies failures, backs off between attempts,
//! and delivers exactly one terminal outcome per logical request.

pub mod client;
pub mod time;
