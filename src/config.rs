use std::path::{Path, PathBuf};

/// Application-level constants
pub const APP_NAME: &str = "Poliscan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "poliscan=info".to_string()
}

/// Where the plain-text report for a given input document lands:
/// `<stem>_analysis.txt` in the current working directory.
pub fn analysis_output_path(document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    PathBuf::from(format!("{stem}_analysis.txt"))
}
