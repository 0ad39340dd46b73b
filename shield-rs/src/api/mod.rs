//! REST API module for shield-rs
//!
//! Provides the HTTP analyze endpoint over the scoring engine

pub mod analyze;
pub mod server;

pub use server::ApiServer;
