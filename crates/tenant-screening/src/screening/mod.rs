//! Applicant screening: verification snapshots, the scoring engine, and the workflow service
//! that opens, updates, and evaluates screening records.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, BackgroundChecks, EmploymentChecks, FinancialChecks, IdentityChecks,
    ReferenceChecks, ScreeningCategory, ScreeningId, ScreeningStatus, VerificationSnapshot,
};
pub use repository::{
    AlertError, AlertPublisher, RepositoryError, ScreeningAlert, ScreeningRecord,
    ScreeningRepository, ScreeningStatusView,
};
pub use router::screening_router;
pub use scoring::{
    evaluate, FlagSeverity, RiskFlag, RiskTier, ScoreBreakdown, ScoringEngine, ScoringError,
    ScreeningResult, Verdict,
};
pub use service::{ScreeningService, ScreeningServiceError};
