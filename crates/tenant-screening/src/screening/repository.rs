use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicantId, ScreeningId, ScreeningStatus, VerificationSnapshot};
use super::scoring::{RiskTier, ScreeningResult};

/// Persisted screening: the latest snapshot, its workflow status, and the last result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub screening_id: ScreeningId,
    pub applicant_id: ApplicantId,
    pub snapshot: VerificationSnapshot,
    pub status: ScreeningStatus,
    pub opened_at: DateTime<Utc>,
    pub evaluated_at: Option<DateTime<Utc>>,
    pub result: Option<ScreeningResult>,
}

impl ScreeningRecord {
    pub fn recommendation(&self) -> String {
        match &self.result {
            Some(result) => result.recommendation.clone(),
            None => "pending evaluation".to_string(),
        }
    }

    pub fn status_view(&self) -> ScreeningStatusView {
        ScreeningStatusView {
            screening_id: self.screening_id.clone(),
            applicant_id: self.applicant_id.clone(),
            status: self.status.label(),
            recommendation: self.recommendation(),
            total_score: self.result.as_ref().map(|result| result.total_score),
            risk_tier: self.result.as_ref().map(|result| result.risk_tier),
            evaluated_at: self.evaluated_at,
        }
    }
}

/// Storage abstraction owned by the persistence layer.
pub trait ScreeningRepository: Send + Sync {
    fn applicant_exists(&self, id: &ApplicantId) -> Result<bool, RepositoryError>;
    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError>;
    fn update(&self, record: ScreeningRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError>;
    /// Screenings whose snapshot changed since the last evaluation.
    fn pending(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("screening already exists")]
    Conflict,
    #[error("screening not found")]
    ScreeningNotFound,
    #[error("applicant not found")]
    ApplicantNotFound,
    #[error("screening storage unavailable: {0}")]
    Storage(String),
}

/// Outbound notification hook (e-mail, chat, property management system).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: ScreeningAlert) -> Result<(), AlertError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningAlert {
    pub template: String,
    pub screening_id: ScreeningId,
    pub risk_tier: RiskTier,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Public projection of a screening record.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningStatusView {
    pub screening_id: ScreeningId,
    pub applicant_id: ApplicantId,
    pub status: &'static str,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<DateTime<Utc>>,
}
