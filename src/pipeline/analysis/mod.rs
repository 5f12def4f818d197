pub mod types;
pub mod keywords;
pub mod mentions;
pub mod clauses;

pub use clauses::find_clauses;
pub use types::{AnalysisResult, ClauseCategory, Findings, Mention};
