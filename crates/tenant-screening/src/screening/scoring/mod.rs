mod flags;
pub(crate) mod policy;
pub(crate) mod recommendation;
mod rules;

pub use flags::{FlagSeverity, RiskFlag};
pub use policy::RiskTier;
pub use recommendation::Verdict;

use super::domain::{ScreeningCategory, VerificationSnapshot};
use serde::{Deserialize, Serialize};

/// Stateless scorer turning a verification snapshot into a screening decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, snapshot: &VerificationSnapshot) -> ScreeningResult {
        let breakdown = ScoreBreakdown {
            identity: rules::identity_points(&snapshot.identity),
            employment: rules::employment_points(&snapshot.employment),
            financial: rules::financial_points(&snapshot.financial),
            references: rules::reference_points(&snapshot.references),
            background: rules::background_points(&snapshot.background),
        };
        let total_score = breakdown.total();

        let risk_flags = flags::detect_flags(snapshot);
        let risk_tier = policy::classify(total_score, &risk_flags);
        let recommendation = recommendation::render(total_score, risk_tier, &risk_flags);

        ScreeningResult {
            total_score,
            breakdown,
            risk_flags,
            risk_tier,
            verdict: Verdict::for_score(total_score),
            recommendation,
        }
    }

    /// Evaluate a snapshot that may be absent from the caller's payload.
    pub fn try_evaluate(
        &self,
        snapshot: Option<&VerificationSnapshot>,
    ) -> Result<ScreeningResult, ScoringError> {
        snapshot
            .map(|snapshot| self.evaluate(snapshot))
            .ok_or(ScoringError::InvalidSnapshot)
    }
}

/// Score a snapshot with the fixed screening rubric.
pub fn evaluate(snapshot: &VerificationSnapshot) -> ScreeningResult {
    ScoringEngine.evaluate(snapshot)
}

/// Integer points per evaluation area; the fields always sum to the total score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub identity: u8,
    pub employment: u8,
    pub financial: u8,
    pub references: u8,
    pub background: u8,
}

impl ScoreBreakdown {
    pub fn get(&self, category: ScreeningCategory) -> u8 {
        match category {
            ScreeningCategory::Identity => self.identity,
            ScreeningCategory::Employment => self.employment,
            ScreeningCategory::Financial => self.financial,
            ScreeningCategory::References => self.references,
            ScreeningCategory::Background => self.background,
        }
    }

    pub fn total(&self) -> u8 {
        ScreeningCategory::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }
}

/// Decision artifact for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub total_score: u8,
    pub breakdown: ScoreBreakdown,
    pub risk_flags: Vec<RiskFlag>,
    pub risk_tier: RiskTier,
    pub verdict: Verdict,
    pub recommendation: String,
}

impl ScreeningResult {
    pub fn flags_with(&self, severity: FlagSeverity) -> impl Iterator<Item = &RiskFlag> {
        self.risk_flags
            .iter()
            .filter(move |flag| flag.severity == severity)
    }

    pub fn summary(&self) -> String {
        format!(
            "score {}/100, {} risk ({} flag(s))",
            self.total_score,
            self.risk_tier.label(),
            self.risk_flags.len()
        )
    }
}

/// Errors raised by the scoring engine itself.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("screening snapshot is missing")]
    InvalidSnapshot,
}
