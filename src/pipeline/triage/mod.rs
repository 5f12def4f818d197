pub mod types;
pub mod classify;

pub use classify::triage;
pub use types::{TriageLabel, TriageResult};
