//! Boundary to the AI-insight collaborator.
//!
//! The simulation core does not depend on this module.  It defines what
//! the collaborator receives ([`InsightRequest`]), what it returns
//! ([`InsightReport`]), how its failures are classified
//! ([`InsightError`]), and how often it is retried ([`RetryPolicy`]).
//!
//! With the `insight` feature, [`InsightClient`] drives an
//! [`InsightProvider`](crate::traits::InsightProvider) and
//! [`spawn_analysis`] runs it on a tokio task so simulation output can be
//! rendered before the insight resolves, fails, or times out.

#[cfg(feature = "insight")]
mod client;
mod error;
mod report;
mod request;
mod retry;

#[cfg(feature = "insight")]
pub use client::{API_KEY_ENV, InsightClient, spawn_analysis};
pub use error::{InsightError, InsightNotice, ProviderFailure, TOO_MANY_REQUESTS};
pub use report::InsightReport;
pub use request::InsightRequest;
pub use retry::RetryPolicy;
