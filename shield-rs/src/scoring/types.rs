//! Verdict types for the scam signal scorer

use serde::{Deserialize, Serialize};

/// Classification label for an analyzed solicitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// The text carries enough fraud signals to flag
    #[serde(rename = "Likely Scam")]
    LikelyScam,
    /// The text reads as a legitimate solicitation
    #[serde(rename = "Likely Legitimate")]
    LikelyLegitimate,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::LikelyScam => write!(f, "Likely Scam"),
            Label::LikelyLegitimate => write!(f, "Likely Legitimate"),
        }
    }
}

/// Result of scoring one solicitation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Classification label
    pub label: Label,
    /// Aggregated signal score, clamped to 0-100
    pub score: i64,
    /// Why the verdict came out this way, in rule order; never empty
    pub reasons: Vec<String>,
}

impl Verdict {
    /// Whether the verdict flags the text as a scam
    pub fn is_scam(&self) -> bool {
        self.label == Label::LikelyScam
    }
}
