use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// How text was pulled out of the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ExtractionMethod {
    PdfText,
    Ocr,
    PlainTextRead,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PdfText => "pdf_text",
            Self::Ocr => "ocr",
            Self::PlainTextRead => "plain_text_read",
        }
    }
}

/// PDF text-layer extraction abstraction.
pub trait PdfSource {
    /// Extract the text layer of a PDF. `password` unlocks encrypted
    /// documents; `Err(PasswordRequired)` signals that one is needed.
    fn extract_text(
        &self,
        pdf_bytes: &[u8],
        password: Option<&str>,
    ) -> Result<String, ExtractionError>;
}

/// OCR engine abstraction (allows mocking for tests).
pub trait OcrEngine {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// One-shot interactive password request for encrypted PDFs.
/// Returns `None` when the user declines; asked at most once per document.
pub trait PasswordPrompt {
    fn request_password(&self, path: &Path) -> Option<String>;
}

/// Prompt that always declines — the default for non-interactive use.
pub struct NoPasswordPrompt;

impl PasswordPrompt for NoPasswordPrompt {
    fn request_password(&self, _path: &Path) -> Option<String> {
        None
    }
}
