use super::super::domain::{
    BackgroundChecks, EmploymentChecks, FinancialChecks, IdentityChecks, ReferenceChecks,
    ScreeningCategory,
};

const IDENTITY_POINTS: f64 = 20.0;

const CONTRACT_POINTS: f64 = 10.0;
const PAYSLIP_POINTS: f64 = 8.0;
const PAYSLIP_POINTS_PER_MONTH: f64 = 0.5;
const PAYSLIP_HISTORY_CAP: f64 = 3.0;
const EMPLOYER_CONTACT_POINTS: f64 = 4.0;

const INCOME_POINTS: f64 = 10.0;
const BANK_ACCOUNT_POINTS: f64 = 4.0;
const SAVINGS_POINTS: f64 = 3.0;

const REFERENCE_POINTS_EACH: f64 = 1.5;
const REFERENCE_VOLUME_CAP: f64 = 8.0;
const CONTACT_POINTS_EACH: f64 = 2.0;
const CONTACT_CAP: f64 = 4.0;
const QUALITY_POINTS: f64 = 3.0;

const REGISTRY_HIT_PENALTY: f64 = 10.0;
const RENTAL_DEFAULT_PENALTY: f64 = 8.0;
const LEGAL_CLAIM_PENALTY: f64 = 5.0;

/// Affordability steps as `(minimum ratio, bonus)`, best first. Lower bounds are inclusive.
const RATIO_STEPS: [(f64, f64); 3] = [(4.0, 8.0), (3.0, 6.0), (2.5, 4.0)];
const RATIO_FLOOR_BONUS: f64 = 1.0;

pub(crate) fn identity_points(checks: &IdentityChecks) -> u8 {
    let raw = if checks.identity_verified {
        IDENTITY_POINTS
    } else {
        0.0
    };
    to_points(raw, ScreeningCategory::Identity)
}

pub(crate) fn employment_points(checks: &EmploymentChecks) -> u8 {
    let mut raw = 0.0;

    if checks.contract_verified {
        raw += CONTRACT_POINTS;
    }
    if checks.payslips_verified {
        let history = f64::from(checks.payslip_months) * PAYSLIP_POINTS_PER_MONTH;
        raw += PAYSLIP_POINTS + history.min(PAYSLIP_HISTORY_CAP);
    }
    if checks.employer_contacted {
        raw += EMPLOYER_CONTACT_POINTS;
    }

    to_points(raw, ScreeningCategory::Employment)
}

pub(crate) fn financial_points(checks: &FinancialChecks) -> u8 {
    let mut raw = 0.0;

    if checks.income_verified {
        raw += INCOME_POINTS;
        if let Some(ratio) = checks.usable_ratio() {
            raw += affordability_bonus(ratio);
        }
    }
    if checks.bank_account_verified {
        raw += BANK_ACCOUNT_POINTS;
    }
    if checks.savings_verified {
        raw += SAVINGS_POINTS;
    }

    to_points(raw, ScreeningCategory::Financial)
}

pub(crate) fn affordability_bonus(ratio: f64) -> f64 {
    RATIO_STEPS
        .iter()
        .find(|(minimum, _)| ratio >= *minimum)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(RATIO_FLOOR_BONUS)
}

pub(crate) fn reference_points(checks: &ReferenceChecks) -> u8 {
    let volume =
        (f64::from(checks.supplied()) * REFERENCE_POINTS_EACH).min(REFERENCE_VOLUME_CAP);
    let contact = (f64::from(checks.contacted) * CONTACT_POINTS_EACH).min(CONTACT_CAP);
    let quality = checks
        .positive_rate()
        .map(|rate| rate * QUALITY_POINTS)
        .unwrap_or(0.0);

    to_points(volume + contact + quality, ScreeningCategory::References)
}

pub(crate) fn background_points(checks: &BackgroundChecks) -> u8 {
    let mut raw = f64::from(ScreeningCategory::Background.max_points());

    if checks.delinquency_registry_hit {
        raw -= REGISTRY_HIT_PENALTY;
    }
    if checks.prior_rental_default {
        raw -= RENTAL_DEFAULT_PENALTY;
    }
    if checks.prior_legal_claim {
        raw -= LEGAL_CLAIM_PENALTY;
    }

    to_points(raw, ScreeningCategory::Background)
}

/// Round half away from zero, then clamp into the category bounds.
fn to_points(raw: f64, category: ScreeningCategory) -> u8 {
    let ceiling = f64::from(category.max_points());
    raw.round().clamp(0.0, ceiling) as u8
}
