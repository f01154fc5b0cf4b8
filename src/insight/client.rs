//! Credentialed, retrying client over an [`InsightProvider`].

use std::sync::Arc;

use log::{debug, error, warn};
use tokio::task::JoinHandle;

use super::{InsightError, InsightReport, InsightRequest, RetryPolicy};
use crate::traits::InsightProvider;

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Runs insight requests against a provider.
///
/// The client never touches simulation state: its failures are reported
/// as [`InsightError`]s for the presentation layer to show as a notice.
#[derive(Debug, Clone)]
pub struct InsightClient<P> {
    provider: P,
    api_key: Option<String>,
    policy: RetryPolicy,
}

impl<P: InsightProvider> InsightClient<P> {
    /// Creates a client with the default [`RetryPolicy`].
    ///
    /// An empty key is treated as missing.
    #[must_use]
    pub fn new(provider: P, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            policy: RetryPolicy::default(),
        }
    }

    /// Creates a client reading its key from [`API_KEY_ENV`].
    #[must_use]
    pub fn from_env(provider: P) -> Self {
        Self::new(provider, std::env::var(API_KEY_ENV).ok())
    }

    /// Replaces the retry policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Returns `true` if an API key is configured.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Requests an analysis, retrying quota failures per the policy.
    ///
    /// # Errors
    ///
    /// - [`InsightError::MissingCredentials`] without calling the provider
    ///   when no key is configured.
    /// - [`InsightError::QuotaExceeded`] once the retry budget is spent.
    /// - [`InsightError::Generic`] / [`InsightError::MalformedResponse`]
    ///   immediately, without retrying.
    pub async fn analyze(&self, request: &InsightRequest) -> Result<InsightReport, InsightError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("insight skipped: {API_KEY_ENV} is not set");
            return Err(InsightError::MissingCredentials);
        };

        let prompt = request.prompt();
        let mut retries = 0;
        loop {
            let outcome = match self.provider.generate(api_key, &prompt).await {
                Ok(body) => InsightReport::from_json(&body),
                Err(failure) => Err(InsightError::from(failure)),
            };

            match outcome {
                Ok(report) => {
                    debug!("insight ready after {} attempt(s)", retries + 1);
                    return Ok(report);
                }
                Err(err) if self.policy.should_retry(retries, &err) => {
                    retries += 1;
                    let delay = self.policy.delay_for(retries);
                    warn!(
                        "insight attempt {retries} failed ({err}); retrying in {}ms",
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    error!("insight failed: {err}");
                    return Err(err);
                }
            }
        }
    }
}

/// Runs [`InsightClient::analyze`] on a spawned task.
///
/// The caller keeps rendering simulation output and awaits the handle
/// whenever it is ready to show the insight.  Must be called from within
/// a tokio runtime.
pub fn spawn_analysis<P>(
    client: Arc<InsightClient<P>>,
    request: InsightRequest,
) -> JoinHandle<Result<InsightReport, InsightError>>
where
    P: InsightProvider + 'static,
{
    tokio::spawn(async move { client.analyze(&request).await })
}
