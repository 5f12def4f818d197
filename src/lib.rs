//! Poliscan — locally-run insurance policy document analyzer.
//!
//! Extracts text from a policy document (PDF, scanned image, or plain
//! text), scans it for the clause categories a policyholder cares about,
//! triages sentences into pros / cons / hidden details, and assembles a
//! bounded summary ready for display or export.

pub mod config;
pub mod pipeline;
pub mod report;

pub use pipeline::analyzer::{DocumentAnalysis, PolicyAnalyzer};
pub use pipeline::summary::Summary;
