use std::path::Path;

use serde::{Deserialize, Serialize};

/// Document kinds the extractor dispatches on, inferred from the file
/// extension (case-insensitive). Extensions are the contract here — the
/// analyzer trusts what the user handed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DocumentKind {
    Pdf,
    Image,
    PlainText,
    /// No extension at all: try PDF first, then fall back to a raw text read.
    NoExtension,
    Unsupported(String),
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::PlainText => "plain_text",
            Self::NoExtension => "no_extension",
            Self::Unsupported(_) => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

/// Infer the document kind from the path's extension.
pub fn detect_kind(path: &Path) -> DocumentKind {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return DocumentKind::NoExtension,
    };

    match ext.as_str() {
        "pdf" => DocumentKind::Pdf,
        "png" | "jpg" | "jpeg" | "tiff" | "bmp" => DocumentKind::Image,
        "txt" | "doc" | "docx" => DocumentKind::PlainText,
        other => DocumentKind::Unsupported(other.to_string()),
    }
}
