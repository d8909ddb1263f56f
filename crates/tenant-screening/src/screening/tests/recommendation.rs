use super::common::*;
use crate::screening::domain::ScreeningCategory;
use crate::screening::scoring::recommendation::render;
use crate::screening::scoring::{evaluate, FlagSeverity, RiskFlag, RiskTier};

fn high_flag(description: &str) -> RiskFlag {
    RiskFlag {
        category: ScreeningCategory::Background,
        description: description.to_string(),
        severity: FlagSeverity::High,
    }
}

#[test]
fn headline_tracks_score_band() {
    assert!(render(85, RiskTier::Low, &[]).starts_with("Approve"));
    assert!(render(72, RiskTier::Medium, &[]).starts_with("Acceptable"));
    assert!(render(55, RiskTier::High, &[]).starts_with("Review"));
    assert!(render(12, RiskTier::Critical, &[]).starts_with("Not recommended"));
}

#[test]
fn text_mentions_score_and_tier() {
    let text = render(55, RiskTier::High, &[]);
    assert!(text.contains("Score 55/100, high risk."));
}

#[test]
fn critical_alerts_list_only_high_severity_flags() {
    let flags = vec![
        high_flag("prior rental payment default"),
        RiskFlag {
            category: ScreeningCategory::Financial,
            description: "bank account not verified".to_string(),
            severity: FlagSeverity::Low,
        },
    ];

    let text = render(90, RiskTier::Medium, &flags);

    assert!(text.contains("Critical alerts:\n- prior rental payment default"));
    assert!(!text.contains("bank account not verified"));
}

#[test]
fn mid_band_scores_get_mitigation_suggestions() {
    for score in [60, 65, 79] {
        let text = render(score, RiskTier::Medium, &[]);
        assert!(text.contains("Suggestions:"), "score {score}");
        assert!(text.contains("co-signer"));
        assert!(text.contains("higher security deposit"));
        assert!(text.contains("rent default insurance"));
    }

    for score in [59, 80] {
        assert!(!render(score, RiskTier::High, &[]).contains("Suggestions:"));
    }
}

#[test]
fn alerts_precede_suggestions() {
    let text = render(70, RiskTier::Medium, &[high_flag("identity document not verified")]);

    let alerts = text.find("Critical alerts:").expect("alerts section");
    let suggestions = text.find("Suggestions:").expect("suggestions section");
    assert!(alerts < suggestions);
}

#[test]
fn engine_recommendation_matches_renderer() {
    let result = evaluate(&delinquent_snapshot());

    assert_eq!(
        result.recommendation,
        render(result.total_score, result.risk_tier, &result.risk_flags)
    );
}
