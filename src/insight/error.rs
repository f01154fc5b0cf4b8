//! Failure taxonomy for the insight collaborator.
//!
//! | Variant | Code | Retryable |
//! |---------|------|-----------|
//! | [`MissingCredentials`](InsightError::MissingCredentials) | `missing_key` | no |
//! | [`QuotaExceeded`](InsightError::QuotaExceeded) | `quota_exceeded` | yes |
//! | [`Generic`](InsightError::Generic) | `generic_error` | no |
//! | [`MalformedResponse`](InsightError::MalformedResponse) | `generic_error` | no |

use serde::Serialize;
use thiserror::Error;

/// HTTP status returned by rate-limited providers.
pub const TOO_MANY_REQUESTS: u16 = 429;

const QUOTA_MARKERS: [&str; 2] = ["429", "RESOURCE_EXHAUSTED"];

/// Raw failure reported by an
/// [`InsightProvider`](crate::traits::InsightProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    /// HTTP status, when the provider got that far.
    pub status: Option<u16>,
    /// Provider-supplied message.
    pub message: String,
}

impl ProviderFailure {
    /// Creates a failure with an HTTP status.
    #[must_use]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a failure without an HTTP status (transport errors).
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Returns `true` if the failure signals an exhausted quota.
    #[must_use]
    pub fn is_quota(&self) -> bool {
        self.status == Some(TOO_MANY_REQUESTS)
            || QUOTA_MARKERS.iter().any(|m| self.message.contains(m))
    }
}

/// Classified failure of an insight request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightError {
    /// No API key is configured; the provider is never called.
    #[error("insight credentials are not configured")]
    MissingCredentials,

    /// The provider is rate limiting; worth retrying later.
    #[error("insight quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other provider failure.
    #[error("insight request failed: {0}")]
    Generic(String),

    /// The provider answered but the body is not a valid report.
    #[error("insight response is malformed: {0}")]
    MalformedResponse(String),
}

impl InsightError {
    /// Returns `true` for errors the retry policy may retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_))
    }

    /// Returns the stable error code shown to the presentation layer.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_key",
            Self::QuotaExceeded(_) => "quota_exceeded",
            Self::Generic(_) | Self::MalformedResponse(_) => "generic_error",
        }
    }

    /// Returns the user-visible notice for this error.
    #[must_use]
    pub fn notice(&self) -> InsightNotice {
        let situation = match self {
            Self::MissingCredentials => "Chave de API não configurada no ambiente.",
            Self::QuotaExceeded(_) => {
                "IA temporariamente indisponível (Limite de Quota atingido)."
            }
            Self::Generic(_) | Self::MalformedResponse(_) => {
                "Não foi possível gerar o insight da IA no momento."
            }
        };
        InsightNotice {
            error: self.code(),
            situation: situation.to_owned(),
            retryable: self.is_retryable(),
        }
    }
}

impl From<ProviderFailure> for InsightError {
    fn from(failure: ProviderFailure) -> Self {
        if failure.is_quota() {
            Self::QuotaExceeded(failure.message)
        } else {
            Self::Generic(failure.message)
        }
    }
}

/// Non-blocking notice rendered in place of a report when the
/// collaborator fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightNotice {
    /// Stable error code.
    pub error: &'static str,
    /// Message shown to the user.
    #[serde(rename = "situacao")]
    pub situation: String,
    /// Whether waiting and retrying may help.
    pub retryable: bool,
}
