//! Scam scoring module
//!
//! Weighted rule-based scoring of charity solicitation texts.

pub mod rules;
pub mod scorer;
pub mod types;

pub use rules::{RuleSet, SignalRule};
pub use scorer::{ScamScorer, DEFAULT_SCAM_THRESHOLD};
pub use types::{Label, Verdict};
