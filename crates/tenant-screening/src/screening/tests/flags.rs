use super::common::*;
use crate::screening::domain::{ScreeningCategory, VerificationSnapshot};
use crate::screening::scoring::{evaluate, FlagSeverity};

#[test]
fn empty_snapshot_raises_every_verification_flag() {
    let result = evaluate(&VerificationSnapshot::default());
    let raised: Vec<_> = result
        .risk_flags
        .iter()
        .map(|flag| (flag.category, flag.severity))
        .collect();

    assert_eq!(
        raised,
        vec![
            (ScreeningCategory::Identity, FlagSeverity::High),
            (ScreeningCategory::Employment, FlagSeverity::Medium),
            (ScreeningCategory::Employment, FlagSeverity::Medium),
            (ScreeningCategory::Employment, FlagSeverity::Low),
            (ScreeningCategory::Financial, FlagSeverity::Low),
            (ScreeningCategory::References, FlagSeverity::Medium),
            (ScreeningCategory::References, FlagSeverity::Low),
        ]
    );
}

#[test]
fn clean_snapshot_raises_no_flags() {
    assert!(evaluate(&clean_snapshot()).risk_flags.is_empty());
}

#[test]
fn short_payslip_history_is_low_severity() {
    let mut snapshot = clean_snapshot();
    snapshot.employment.payslip_months = 2;

    let result = evaluate(&snapshot);

    assert_eq!(
        flag_descriptions(&result.risk_flags, FlagSeverity::Low),
        vec!["less than three months of payslip history"]
    );
}

#[test]
fn non_positive_ratio_is_still_unaffordable() {
    for ratio in [0.0, -1.0] {
        let mut snapshot = clean_snapshot();
        snapshot.financial.income_to_rent_ratio = Some(ratio);

        let result = evaluate(&snapshot);

        assert_eq!(
            flag_descriptions(&result.risk_flags, FlagSeverity::High),
            vec!["income-to-rent ratio below 2.5"],
            "ratio {ratio}"
        );
    }
}

#[test]
fn non_finite_ratio_is_flagged_unusable() {
    for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut snapshot = clean_snapshot();
        snapshot.financial.income_to_rent_ratio = Some(ratio);

        let result = evaluate(&snapshot);

        assert_eq!(
            flag_descriptions(&result.risk_flags, FlagSeverity::High),
            vec!["income-to-rent ratio unusable"],
            "ratio {ratio}"
        );
        assert_eq!(result.breakdown.financial, 17);
    }
}

#[test]
fn unaffordable_ratio_is_high_severity_even_when_income_unverified() {
    let mut snapshot = clean_snapshot();
    snapshot.financial.income_verified = false;
    snapshot.financial.income_to_rent_ratio = Some(1.8);

    let result = evaluate(&snapshot);

    assert_eq!(
        flag_descriptions(&result.risk_flags, FlagSeverity::High),
        vec!["income-to-rent ratio below 2.5"]
    );
}

#[test]
fn background_findings_each_raise_their_own_flag() {
    let mut snapshot = clean_snapshot();
    snapshot.background.delinquency_registry_hit = true;
    snapshot.background.prior_rental_default = true;
    snapshot.background.prior_legal_claim = true;

    let result = evaluate(&snapshot);

    assert_eq!(result.breakdown.background, 0);
    assert_eq!(
        flag_descriptions(&result.risk_flags, FlagSeverity::High),
        vec![
            "listed in a non-payment delinquency registry",
            "prior rental payment default",
        ]
    );
    assert_eq!(
        flag_descriptions(&result.risk_flags, FlagSeverity::Medium),
        vec!["prior legal claim on record"]
    );
}

#[test]
fn single_reference_is_flagged_even_when_contacted() {
    let mut snapshot = clean_snapshot();
    snapshot.references.personal = 1;
    snapshot.references.employment = 0;
    snapshot.references.prior_landlord = 0;
    snapshot.references.contacted = 1;
    snapshot.references.positive = 1;

    let result = evaluate(&snapshot);

    assert_eq!(
        flag_descriptions(&result.risk_flags, FlagSeverity::Medium),
        vec!["fewer than two references supplied"]
    );
    assert!(flag_descriptions(&result.risk_flags, FlagSeverity::Low).is_empty());
}

#[test]
fn flags_do_not_change_the_score() {
    let mut snapshot = clean_snapshot();
    snapshot.employment.payslip_months = 2;

    let result = evaluate(&snapshot);

    // 10 + 8 + 1 + 4 employment; every other category at its ceiling
    assert_eq!(result.breakdown.employment, 23);
    assert_eq!(result.total_score, 98);
}
