use serde::{Deserialize, Serialize};

/// Identifier wrapper for screening records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningId(pub String);

/// Identifier wrapper for applicants owned by the intake system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Operator-verified facts about one applicant at one point in time.
///
/// `Default` yields the empty snapshot recorded when a screening is opened: nothing verified,
/// no references, no adverse findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationSnapshot {
    pub identity: IdentityChecks,
    pub employment: EmploymentChecks,
    pub financial: FinancialChecks,
    pub references: ReferenceChecks,
    pub background: BackgroundChecks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityChecks {
    pub identity_verified: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentChecks {
    pub contract_verified: bool,
    pub payslips_verified: bool,
    pub payslip_months: u32,
    pub employer_contacted: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialChecks {
    pub income_verified: bool,
    /// Monthly income divided by monthly rent, when the operator could compute it.
    pub income_to_rent_ratio: Option<f64>,
    pub bank_account_verified: bool,
    pub savings_verified: bool,
}

impl FinancialChecks {
    /// Ratio eligible for the affordability bonus. Zero, negative, and non-finite values earn
    /// nothing but are still flagged.
    pub fn usable_ratio(&self) -> Option<f64> {
        self.income_to_rent_ratio
            .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
    }
}

/// Reference counts. Expected to satisfy `positive <= contacted <= supplied()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceChecks {
    pub personal: u32,
    pub employment: u32,
    pub prior_landlord: u32,
    pub contacted: u32,
    pub positive: u32,
}

impl ReferenceChecks {
    pub fn supplied(&self) -> u32 {
        self.personal
            .saturating_add(self.employment)
            .saturating_add(self.prior_landlord)
    }

    /// Share of contacted references that came back positive, if it is meaningful.
    pub fn positive_rate(&self) -> Option<f64> {
        if self.contacted == 0 {
            return None;
        }

        let rate = f64::from(self.positive) / f64::from(self.contacted);
        (0.0..=1.0).contains(&rate).then_some(rate)
    }
}

/// Adverse findings from registry and history checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundChecks {
    pub delinquency_registry_hit: bool,
    pub prior_rental_default: bool,
    pub prior_legal_claim: bool,
}

/// Evaluation areas contributing to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningCategory {
    Identity,
    Employment,
    Financial,
    References,
    Background,
}

impl ScreeningCategory {
    pub const ALL: [ScreeningCategory; 5] = [
        ScreeningCategory::Identity,
        ScreeningCategory::Employment,
        ScreeningCategory::Financial,
        ScreeningCategory::References,
        ScreeningCategory::Background,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScreeningCategory::Identity => "identity",
            ScreeningCategory::Employment => "employment",
            ScreeningCategory::Financial => "financial",
            ScreeningCategory::References => "references",
            ScreeningCategory::Background => "background",
        }
    }

    /// Ceiling of the category's contribution to the total score.
    pub const fn max_points(self) -> u8 {
        match self {
            ScreeningCategory::Identity => 20,
            ScreeningCategory::Employment => 25,
            ScreeningCategory::Financial => 25,
            ScreeningCategory::References => 15,
            ScreeningCategory::Background => 15,
        }
    }
}

/// Coarse workflow status of a screening record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    Pending,
    UnderReview,
    Completed,
}

impl ScreeningStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ScreeningStatus::Pending => "pending",
            ScreeningStatus::UnderReview => "under_review",
            ScreeningStatus::Completed => "completed",
        }
    }
}
