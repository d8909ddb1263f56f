use serde::{Deserialize, Serialize};

use super::super::domain::{ScreeningCategory, VerificationSnapshot};

const MIN_PAYSLIP_MONTHS: u32 = 3;
const MIN_AFFORDABLE_RATIO: f64 = 2.5;
const MIN_REFERENCES: u32 = 2;

/// Qualitative severity attached to a risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Low,
    Medium,
    High,
}

impl FlagSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            FlagSeverity::Low => "low",
            FlagSeverity::Medium => "medium",
            FlagSeverity::High => "high",
        }
    }
}

/// Advisory observation about a snapshot. Flags never change the numeric score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub category: ScreeningCategory,
    pub description: String,
    pub severity: FlagSeverity,
}

impl RiskFlag {
    fn new(category: ScreeningCategory, severity: FlagSeverity, description: &str) -> Self {
        Self {
            category,
            description: description.to_string(),
            severity,
        }
    }
}

/// Inspect the snapshot and emit every flag whose rule fires, in category order.
pub(crate) fn detect_flags(snapshot: &VerificationSnapshot) -> Vec<RiskFlag> {
    use FlagSeverity::{High, Low, Medium};
    use ScreeningCategory::{Background, Employment, Financial, Identity, References};

    let mut flags = Vec::new();
    let mut raise = |fired: bool, category, severity, description: &str| {
        if fired {
            flags.push(RiskFlag::new(category, severity, description));
        }
    };

    raise(
        !snapshot.identity.identity_verified,
        Identity,
        High,
        "identity document not verified",
    );

    let employment = &snapshot.employment;
    raise(
        !employment.contract_verified,
        Employment,
        Medium,
        "employment contract not verified",
    );
    raise(
        !employment.payslips_verified,
        Employment,
        Medium,
        "payslips not verified",
    );
    raise(
        employment.payslip_months < MIN_PAYSLIP_MONTHS,
        Employment,
        Low,
        "less than three months of payslip history",
    );

    let financial = &snapshot.financial;
    let ratio = financial.income_to_rent_ratio;
    raise(
        ratio.is_some_and(|ratio| ratio.is_finite() && ratio < MIN_AFFORDABLE_RATIO),
        Financial,
        High,
        "income-to-rent ratio below 2.5",
    );
    raise(
        ratio.is_some_and(|ratio| !ratio.is_finite()),
        Financial,
        High,
        "income-to-rent ratio unusable",
    );
    raise(
        !financial.bank_account_verified,
        Financial,
        Low,
        "bank account not verified",
    );

    let references = &snapshot.references;
    raise(
        references.supplied() < MIN_REFERENCES,
        References,
        Medium,
        "fewer than two references supplied",
    );
    raise(
        references.contacted == 0,
        References,
        Low,
        "no references contacted",
    );

    let background = &snapshot.background;
    raise(
        background.delinquency_registry_hit,
        Background,
        High,
        "listed in a non-payment delinquency registry",
    );
    raise(
        background.prior_rental_default,
        Background,
        High,
        "prior rental payment default",
    );
    raise(
        background.prior_legal_claim,
        Background,
        Medium,
        "prior legal claim on record",
    );

    flags
}

/// Number of flags raised at the given severity.
pub(crate) fn count_severity(flags: &[RiskFlag], severity: FlagSeverity) -> usize {
    flags.iter().filter(|flag| flag.severity == severity).count()
}
