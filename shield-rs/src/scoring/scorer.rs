//! Scam scoring engine
//!
//! Evaluates the risk/trust rule tables against a solicitation text and
//! aggregates matched weights into a clamped 0-100 score with a verdict.

use regex::Regex;

use super::rules::RuleSet;
use super::types::{Label, Verdict};
use crate::error::{Result, ShieldError};

/// Default decision threshold; scores at or above it are labeled scams
pub const DEFAULT_SCAM_THRESHOLD: i64 = 45;

/// Word count below which the short-text nudge applies
const SHORT_TEXT_WORDS: usize = 6;
/// Ceiling for the short-text nudge; it alone cannot push a text past this
const SHORT_TEXT_CEILING: i64 = 60;
/// Bonus for very short texts (too little content to trust)
const SHORT_TEXT_BONUS: i64 = 10;
/// Bonus for a run of shouting capitals
const CAPS_RUN_BONUS: i64 = 6;

/// Scam scorer engine
///
/// Pure and stateless: scoring is a function of the input text alone, so a
/// single instance is safe to share across any number of concurrent callers.
pub struct ScamScorer {
    rules: RuleSet,
    caps_run: Regex,
    threshold: i64,
}

impl ScamScorer {
    /// Create a scorer with the standard rule tables
    pub fn new(threshold: i64) -> Self {
        Self::with_rules(RuleSet::standard(), threshold)
    }

    /// Create a scorer with custom rule tables
    pub fn with_rules(rules: RuleSet, threshold: i64) -> Self {
        Self {
            rules,
            caps_run: Regex::new(r"[A-Z]{6,}").expect("invalid caps-run pattern"),
            threshold,
        }
    }

    /// Decision threshold in use
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Score a solicitation text
    ///
    /// Every matching rule applies exactly once, in table order. Returns
    /// `InvalidInput` for empty or whitespace-only text; callers treat that
    /// as "nothing to analyze".
    pub fn score(&self, text: &str) -> Result<Verdict> {
        if text.trim().is_empty() {
            return Err(ShieldError::InvalidInput(
                "no text to analyze".to_string(),
            ));
        }

        // Rules match case-insensitively via a lowered copy; the caps-run
        // nudge needs the original casing.
        let lowered = text.to_lowercase();

        let mut score: i64 = 0;
        let mut reasons = Vec::new();

        for rule in &self.rules.risk {
            if rule.pattern.is_match(&lowered) {
                score += rule.weight;
                reasons.push(rule.reason.to_string());
            }
        }

        for rule in &self.rules.trust {
            if rule.pattern.is_match(&lowered) {
                score -= rule.weight;
                reasons.push(format!("Counter-signal: {}", rule.reason));
            }
        }

        // Surface nudges, each with its own ceiling
        if lowered.split_whitespace().count() < SHORT_TEXT_WORDS {
            score = (score + SHORT_TEXT_BONUS).min(SHORT_TEXT_CEILING);
        }
        if self.caps_run.is_match(text) {
            score = (score + CAPS_RUN_BONUS).min(100);
        }

        let score = score.clamp(0, 100);
        let label = if score >= self.threshold {
            Label::LikelyScam
        } else {
            Label::LikelyLegitimate
        };

        if reasons.is_empty() {
            reasons.push("No strong signals detected".to_string());
        }

        Ok(Verdict {
            label,
            score,
            reasons,
        })
    }
}

impl Default for ScamScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SCAM_THRESHOLD)
    }
}
