use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tenant_screening::screening::{
    AlertError, AlertPublisher, ApplicantId, RepositoryError, ScreeningAlert, ScreeningId,
    ScreeningRecord, ScreeningRepository, ScreeningStatus,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store used by the demo and the standalone server.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScreeningRepository {
    records: Arc<Mutex<HashMap<ScreeningId, ScreeningRecord>>>,
}

impl ScreeningRepository for InMemoryScreeningRepository {
    // Applicant records live in the intake system; any non-blank id is accepted here.
    fn applicant_exists(&self, id: &ApplicantId) -> Result<bool, RepositoryError> {
        Ok(!id.0.trim().is_empty())
    }

    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.screening_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.screening_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ScreeningRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.screening_id) {
            guard.insert(record.screening_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::ScreeningNotFound)
        }
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut pending: Vec<_> = guard
            .values()
            .filter(|record| record.status == ScreeningStatus::UnderReview)
            .cloned()
            .collect();
        pending.sort_by_key(|record| record.opened_at);
        pending.truncate(limit);
        Ok(pending)
    }
}

/// Records alerts and mirrors them to the log in place of a real notification channel.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAlertPublisher {
    events: Arc<Mutex<Vec<ScreeningAlert>>>,
}

impl AlertPublisher for InMemoryAlertPublisher {
    fn publish(&self, alert: ScreeningAlert) -> Result<(), AlertError> {
        info!(
            template = %alert.template,
            screening_id = %alert.screening_id.0,
            risk_tier = alert.risk_tier.label(),
            "screening alert queued"
        );
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryAlertPublisher {
    pub(crate) fn events(&self) -> Vec<ScreeningAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}
