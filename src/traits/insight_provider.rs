//! Seam to the hosted text-generation service behind the insight feature.
//!
//! The crate ships no HTTP client.  An application implements
//! [`InsightProvider`] over whatever service it uses and hands it to an
//! [`InsightClient`](crate::insight::InsightClient), which owns credential
//! checks, response parsing, error classification and retries.
//!
//! # Contract
//!
//! - `generate` performs exactly one remote call; it must not retry.
//! - On success it returns the raw response body, expected to be a JSON
//!   object matching
//!   [`InsightRequest::response_schema`](crate::insight::InsightRequest::response_schema).
//! - On failure it reports the HTTP status (if any) and the provider
//!   message so the client can tell quota exhaustion apart from other
//!   failures.

use async_trait::async_trait;

use crate::insight::ProviderFailure;

/// One-shot text generation against a hosted model.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Sends `prompt` authenticated with `api_key` and returns the
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderFailure`] describing the transport or HTTP
    /// error.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ProviderFailure>;
}
