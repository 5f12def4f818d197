pub mod types;
pub mod format;
pub mod sanitize;
pub mod column_detect;
pub mod pdf;
pub mod ocr;
pub mod text_only;
pub mod orchestrator;

pub use types::*;
pub use format::*;
pub use sanitize::*;
pub use orchestrator::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("PDF is password-protected")]
    PasswordRequired,

    #[error("Wrong password for encrypted PDF")]
    InvalidPassword,

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("OCR initialization failed: {0}")]
    OcrInit(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}
