use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::ScreeningConfig;
use crate::screening::domain::{
    ApplicantId, BackgroundChecks, EmploymentChecks, FinancialChecks, IdentityChecks,
    ReferenceChecks, ScreeningId, ScreeningStatus, VerificationSnapshot,
};
use crate::screening::repository::{
    AlertError, AlertPublisher, RepositoryError, ScreeningAlert, ScreeningRecord,
    ScreeningRepository,
};
use crate::screening::scoring::{FlagSeverity, RiskFlag};
use crate::screening::{screening_router, ScreeningService};

pub(super) const KNOWN_APPLICANT: &str = "applicant-001";

/// Every check verified, strong affordability, three references of each kind.
pub(super) fn clean_snapshot() -> VerificationSnapshot {
    VerificationSnapshot {
        identity: IdentityChecks {
            identity_verified: true,
        },
        employment: EmploymentChecks {
            contract_verified: true,
            payslips_verified: true,
            payslip_months: 6,
            employer_contacted: true,
        },
        financial: FinancialChecks {
            income_verified: true,
            income_to_rent_ratio: Some(4.5),
            bank_account_verified: true,
            savings_verified: true,
        },
        references: ReferenceChecks {
            personal: 3,
            employment: 3,
            prior_landlord: 3,
            contacted: 9,
            positive: 9,
        },
        background: BackgroundChecks::default(),
    }
}

/// The clean profile with a delinquency registry hit.
pub(super) fn delinquent_snapshot() -> VerificationSnapshot {
    let mut snapshot = clean_snapshot();
    snapshot.background.delinquency_registry_hit = true;
    snapshot
}

pub(super) fn flag_descriptions(flags: &[RiskFlag], severity: FlagSeverity) -> Vec<&str> {
    flags
        .iter()
        .filter(|flag| flag.severity == severity)
        .map(|flag| flag.description.as_str())
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    applicants: Arc<Mutex<HashSet<ApplicantId>>>,
    records: Arc<Mutex<HashMap<ScreeningId, ScreeningRecord>>>,
}

impl MemoryRepository {
    pub(super) fn with_applicant(id: &str) -> Self {
        let repository = Self::default();
        repository
            .applicants
            .lock()
            .expect("lock")
            .insert(ApplicantId(id.to_string()));
        repository
    }
}

impl ScreeningRepository for MemoryRepository {
    fn applicant_exists(&self, id: &ApplicantId) -> Result<bool, RepositoryError> {
        Ok(self.applicants.lock().expect("lock").contains(id))
    }

    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.screening_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.screening_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ScreeningRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if !guard.contains_key(&record.screening_id) {
            return Err(RepositoryError::ScreeningNotFound);
        }
        guard.insert(record.screening_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("lock")
            .values()
            .filter(|record| record.status == ScreeningStatus::UnderReview)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl ScreeningRepository for UnavailableRepository {
    fn applicant_exists(&self, _id: &ApplicantId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Storage("database offline".to_string()))
    }

    fn insert(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        Err(RepositoryError::Storage("database offline".to_string()))
    }

    fn update(&self, _record: ScreeningRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Storage("database offline".to_string()))
    }

    fn fetch(&self, _id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Storage("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Storage("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<ScreeningAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<ScreeningAlert> {
        self.events.lock().expect("lock").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: ScreeningAlert) -> Result<(), AlertError> {
        self.events.lock().expect("lock").push(alert);
        Ok(())
    }
}

pub(super) struct FailingAlerts;

impl AlertPublisher for FailingAlerts {
    fn publish(&self, _alert: ScreeningAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("smtp relay down".to_string()))
    }
}

pub(super) fn build_service() -> (
    ScreeningService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::with_applicant(KNOWN_APPLICANT));
    let alerts = Arc::new(MemoryAlerts::default());
    let service = ScreeningService::new(
        repository.clone(),
        alerts.clone(),
        ScreeningConfig::default(),
    );
    (service, repository, alerts)
}

pub(super) fn router_with_service(
    service: ScreeningService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    screening_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
