//! Structured narrative returned by the insight collaborator.

use serde::{Deserialize, Serialize};

use super::InsightError;

/// Analyst narrative for a statistics snapshot.
///
/// Field names on the wire follow the dashboard's JSON contract
/// (`situacao`, `pontosFortes`, `pontosFracos`, `recomendacoes`,
/// `alertaRealismo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Short summary of the token's current health.
    #[serde(rename = "situacao")]
    pub situation: String,
    /// Strong points.
    #[serde(rename = "pontosFortes")]
    pub strengths: Vec<String>,
    /// Weak points and real risks.
    #[serde(rename = "pontosFracos")]
    pub weaknesses: Vec<String>,
    /// What the manager should do next.
    #[serde(rename = "recomendacoes")]
    pub recommendations: Vec<String>,
    /// Warning when the figures look unrealistic.
    #[serde(rename = "alertaRealismo")]
    pub realism_warning: String,
}

impl InsightReport {
    /// Parses a provider response body.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::MalformedResponse`] if the body is not a
    /// JSON object with all five fields.
    pub fn from_json(body: &str) -> Result<Self, InsightError> {
        serde_json::from_str(body).map_err(|e| InsightError::MalformedResponse(e.to_string()))
    }
}
