use serde::{Deserialize, Serialize};

use super::flags::{count_severity, FlagSeverity, RiskFlag};

/// Ordinal risk scale, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
            RiskTier::Critical => "critical",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskTier::Low),
            "medium" => Some(RiskTier::Medium),
            "high" => Some(RiskTier::High),
            "critical" => Some(RiskTier::Critical),
            _ => None,
        }
    }
}

/// Guards evaluated worst tier first; the first match wins.
pub(crate) fn classify(total_score: u8, flags: &[RiskFlag]) -> RiskTier {
    let high = count_severity(flags, FlagSeverity::High);
    let medium = count_severity(flags, FlagSeverity::Medium);

    if high >= 3 || total_score < 40 {
        return RiskTier::Critical;
    }

    if high >= 2 || total_score < 60 {
        return RiskTier::High;
    }

    if high >= 1 || medium >= 3 || total_score < 80 {
        return RiskTier::Medium;
    }

    RiskTier::Low
}
