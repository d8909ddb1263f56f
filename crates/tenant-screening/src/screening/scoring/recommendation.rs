use serde::{Deserialize, Serialize};

use super::flags::{FlagSeverity, RiskFlag};
use super::policy::RiskTier;

const MITIGATIONS: [&str; 3] = [
    "request a co-signer or guarantor",
    "request a higher security deposit",
    "require rent default insurance",
];

/// Score band behind the recommendation headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approve,
    Acceptable,
    Review,
    NotRecommended,
}

impl Verdict {
    pub fn for_score(total_score: u8) -> Self {
        match total_score {
            80..=u8::MAX => Verdict::Approve,
            70..=79 => Verdict::Acceptable,
            50..=69 => Verdict::Review,
            _ => Verdict::NotRecommended,
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Verdict::Approve => "Approve: excellent profile.",
            Verdict::Acceptable => "Acceptable: good profile.",
            Verdict::Review => "Review: average profile, detailed analysis recommended.",
            Verdict::NotRecommended => "Not recommended: high-risk profile.",
        }
    }
}

/// Render the operator-facing recommendation text.
pub(crate) fn render(total_score: u8, tier: RiskTier, flags: &[RiskFlag]) -> String {
    let mut lines = vec![
        Verdict::for_score(total_score).headline().to_string(),
        format!("Score {total_score}/100, {} risk.", tier.label()),
    ];

    let critical: Vec<&str> = flags
        .iter()
        .filter(|flag| flag.severity == FlagSeverity::High)
        .map(|flag| flag.description.as_str())
        .collect();
    if !critical.is_empty() {
        lines.push(String::new());
        lines.push("Critical alerts:".to_string());
        lines.extend(critical.iter().map(|description| format!("- {description}")));
    }

    if (60..80).contains(&total_score) {
        lines.push(String::new());
        lines.push("Suggestions:".to_string());
        lines.extend(MITIGATIONS.iter().map(|mitigation| format!("- {mitigation}")));
    }

    lines.join("\n")
}
