use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{ApplicantId, ScreeningId, ScreeningStatus, VerificationSnapshot};
use super::repository::{
    AlertError, AlertPublisher, RepositoryError, ScreeningAlert, ScreeningRecord,
    ScreeningRepository,
};
use super::scoring::{FlagSeverity, ScoringEngine, ScoringError, ScreeningResult};
use crate::config::ScreeningConfig;

/// Service composing the scoring engine with persistence and alerting.
pub struct ScreeningService<R, A> {
    repository: Arc<R>,
    alerts: Arc<A>,
    engine: ScoringEngine,
    config: ScreeningConfig,
}

static SCREENING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_screening_id() -> ScreeningId {
    let id = SCREENING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ScreeningId(format!("scr-{id:06}"))
}

impl<R, A> ScreeningService<R, A>
where
    R: ScreeningRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, config: ScreeningConfig) -> Self {
        Self {
            repository,
            alerts,
            engine: ScoringEngine::new(),
            config,
        }
    }

    /// Open a screening for a known applicant with an empty snapshot.
    pub fn open(&self, applicant_id: ApplicantId) -> Result<ScreeningRecord, ScreeningServiceError> {
        if !self.repository.applicant_exists(&applicant_id)? {
            return Err(RepositoryError::ApplicantNotFound.into());
        }

        let record = ScreeningRecord {
            screening_id: next_screening_id(),
            applicant_id,
            snapshot: VerificationSnapshot::default(),
            status: ScreeningStatus::Pending,
            opened_at: Utc::now(),
            evaluated_at: None,
            result: None,
        };

        let stored = self.repository.insert(record)?;
        info!(
            screening_id = %stored.screening_id.0,
            applicant_id = %stored.applicant_id.0,
            "screening opened"
        );
        Ok(stored)
    }

    /// Replace the verification snapshot. Any earlier result is discarded until re-evaluated.
    pub fn record_verification(
        &self,
        screening_id: &ScreeningId,
        snapshot: VerificationSnapshot,
    ) -> Result<ScreeningRecord, ScreeningServiceError> {
        let mut record = self.fetch_existing(screening_id)?;

        record.snapshot = snapshot;
        record.status = ScreeningStatus::UnderReview;
        record.result = None;
        record.evaluated_at = None;

        self.repository.update(record.clone())?;
        debug!(screening_id = %screening_id.0, "verification snapshot recorded");
        Ok(record)
    }

    /// Score the stored snapshot and persist the result.
    pub fn evaluate(
        &self,
        screening_id: &ScreeningId,
    ) -> Result<ScreeningResult, ScreeningServiceError> {
        let mut record = self.fetch_existing(screening_id)?;

        let result = self.engine.evaluate(&record.snapshot);
        debug!(
            screening_id = %screening_id.0,
            breakdown = ?result.breakdown,
            "screening scored"
        );

        record.status = ScreeningStatus::Completed;
        record.evaluated_at = Some(Utc::now());
        record.result = Some(result.clone());
        self.repository.update(record)?;

        info!(
            screening_id = %screening_id.0,
            total_score = result.total_score,
            risk_tier = result.risk_tier.label(),
            "screening completed"
        );

        if result.risk_tier >= self.config.alert_threshold {
            self.publish_risk_alert(screening_id, &result)?;
        }

        Ok(result)
    }

    /// Score a snapshot supplied directly by the caller without touching storage.
    pub fn assess(
        &self,
        snapshot: Option<VerificationSnapshot>,
    ) -> Result<ScreeningResult, ScreeningServiceError> {
        let result = self.engine.try_evaluate(snapshot.as_ref())?;
        Ok(result)
    }

    pub fn get(&self, screening_id: &ScreeningId) -> Result<ScreeningRecord, ScreeningServiceError> {
        self.fetch_existing(screening_id)
    }

    pub fn pending(&self, limit: usize) -> Result<Vec<ScreeningRecord>, ScreeningServiceError> {
        Ok(self.repository.pending(limit)?)
    }

    fn fetch_existing(
        &self,
        screening_id: &ScreeningId,
    ) -> Result<ScreeningRecord, ScreeningServiceError> {
        let record = self
            .repository
            .fetch(screening_id)?
            .ok_or(RepositoryError::ScreeningNotFound)?;
        Ok(record)
    }

    fn publish_risk_alert(
        &self,
        screening_id: &ScreeningId,
        result: &ScreeningResult,
    ) -> Result<(), ScreeningServiceError> {
        let mut details = BTreeMap::new();
        details.insert("total_score".to_string(), result.total_score.to_string());
        details.insert(
            "high_severity_flags".to_string(),
            result
                .flags_with(FlagSeverity::High)
                .count()
                .to_string(),
        );

        self.alerts
            .publish(ScreeningAlert {
                template: "screening_risk_alert".to_string(),
                screening_id: screening_id.clone(),
                risk_tier: result.risk_tier,
                details,
            })
            .map_err(|err| {
                warn!(screening_id = %screening_id.0, error = %err, "risk alert not delivered");
                ScreeningServiceError::from(err)
            })
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
