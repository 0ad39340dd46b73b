//! shield-rs: Charity solicitation scam analyzer
//!
//! Classifies free-text charity/fundraising solicitations as likely scams or
//! likely legitimate using a weighted keyword/regex signal aggregator. The
//! engine is a deterministic, stateless, explainable rule evaluator; the HTTP
//! endpoint and the remote-first client are thin boundaries over it.
//!
//! # Features
//!
//! - Pure scoring engine: rule tables, weighted aggregation, 0-100 score
//! - HTTP `analyze` endpoint performing the identical computation
//! - Remote-first client with bounded timeout and local fallback
//! - Explainable verdicts: every fired signal is reported as a reason
//!
//! # Example
//!
//! ```
//! use shield_rs::scoring::ScamScorer;
//!
//! let scorer = ScamScorer::default();
//! let verdict = scorer.score("URGENT! Send gift cards now.").unwrap();
//!
//! assert!(verdict.is_scam());
//! assert!(!verdict.reasons.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`scoring`]: the scam signal scorer and its rule tables
//! - [`api`]: HTTP analyze endpoint
//! - [`client`]: remote-first analyzer with local fallback
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod scoring;

// Re-export commonly used types
pub use client::RemoteAnalyzer;
pub use config::ShieldConfig;
pub use error::{Result, ShieldError};
pub use scoring::{Label, RuleSet, ScamScorer, Verdict};
