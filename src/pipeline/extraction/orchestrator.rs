use std::path::Path;

use super::format::{detect_kind, DocumentKind};
use super::ocr::default_ocr_engine;
use super::pdf::PdfTextSource;
use super::sanitize::sanitize_extracted_text;
use super::text_only::read_text_file;
use super::types::{
    ExtractionMethod, NoPasswordPrompt, OcrEngine, PasswordPrompt, PdfSource,
};
use super::ExtractionError;

/// Text extraction front door.
///
/// Engines are trait objects so the PDF reader, OCR engine, and password
/// prompt can all be swapped or mocked. `extract` never fails: every
/// extraction error is logged and degrades to empty text, which the
/// pipeline treats as a defined terminal state.
pub struct DocumentExtractor {
    pdf: Box<dyn PdfSource + Send + Sync>,
    ocr: Box<dyn OcrEngine + Send + Sync>,
    prompt: Box<dyn PasswordPrompt + Send + Sync>,
}

impl DocumentExtractor {
    pub fn new(
        pdf: Box<dyn PdfSource + Send + Sync>,
        ocr: Box<dyn OcrEngine + Send + Sync>,
        prompt: Box<dyn PasswordPrompt + Send + Sync>,
    ) -> Self {
        Self { pdf, ocr, prompt }
    }

    /// Default engine wiring: real PDF reader, the build's OCR engine,
    /// and a prompt that declines (non-interactive).
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(PdfTextSource),
            default_ocr_engine(),
            Box::new(NoPasswordPrompt),
        )
    }

    /// Swap in an interactive password prompt.
    pub fn with_password_prompt(
        mut self,
        prompt: Box<dyn PasswordPrompt + Send + Sync>,
    ) -> Self {
        self.prompt = prompt;
        self
    }

    /// Extract text from the document at `path`. Always returns a string;
    /// failures are logged and produce empty text.
    pub fn extract(&self, path: &Path) -> String {
        let kind = detect_kind(path);
        match self.extract_inner(path, &kind) {
            Ok((text, method)) => {
                let text = sanitize_extracted_text(&text);
                tracing::info!(
                    path = %path.display(),
                    kind = kind.as_str(),
                    method = method.as_str(),
                    text_length = text.len(),
                    "Text extraction complete"
                );
                text
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    kind = kind.as_str(),
                    error = %e,
                    "Extraction failed, continuing with empty text"
                );
                String::new()
            }
        }
    }

    fn extract_inner(
        &self,
        path: &Path,
        kind: &DocumentKind,
    ) -> Result<(String, ExtractionMethod), ExtractionError> {
        match kind {
            DocumentKind::Pdf => {
                Ok((self.extract_pdf(path)?, ExtractionMethod::PdfText))
            }
            DocumentKind::Image => {
                let image = prepare_image(path)?;
                Ok((self.ocr.ocr_image(&image)?, ExtractionMethod::Ocr))
            }
            DocumentKind::PlainText => {
                Ok((read_text_file(path)?, ExtractionMethod::PlainTextRead))
            }
            DocumentKind::NoExtension => match self.extract_pdf(path) {
                Ok(text) => Ok((text, ExtractionMethod::PdfText)),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "No extension and PDF extraction failed, trying plain text"
                    );
                    Ok((read_text_file(path)?, ExtractionMethod::PlainTextRead))
                }
            },
            DocumentKind::Unsupported(ext) => {
                Err(ExtractionError::UnsupportedFormat(ext.clone()))
            }
        }
    }

    /// PDF path with the single-shot password interaction: when the
    /// document turns out to be encrypted, ask once and retry once.
    fn extract_pdf(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        match self.pdf.extract_text(&bytes, None) {
            Err(ExtractionError::PasswordRequired) => {
                match self.prompt.request_password(path) {
                    Some(pwd) => self.pdf.extract_text(&bytes, Some(&pwd)),
                    None => Err(ExtractionError::PasswordRequired),
                }
            }
            other => other,
        }
    }
}

/// Decode and grayscale an image for OCR. Decoding up front catches
/// corrupt files with a proper error instead of feeding garbage to the
/// engine.
fn prepare_image(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    let bytes = std::fs::read(path)?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;
    let gray = image::DynamicImage::ImageLuma8(decoded.to_luma8());

    let mut buf = std::io::Cursor::new(Vec::new());
    gray.write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::super::ocr::MockOcrEngine;
    use super::*;

    /// PDF source that simulates an encrypted document: succeeds only
    /// when handed the right password.
    struct MockPdfSource {
        text: String,
        password: Option<String>,
    }

    impl MockPdfSource {
        fn open(text: &str) -> Self {
            Self {
                text: text.to_string(),
                password: None,
            }
        }

        fn locked(text: &str, password: &str) -> Self {
            Self {
                text: text.to_string(),
                password: Some(password.to_string()),
            }
        }
    }

    impl PdfSource for MockPdfSource {
        fn extract_text(
            &self,
            _pdf_bytes: &[u8],
            password: Option<&str>,
        ) -> Result<String, ExtractionError> {
            match (&self.password, password) {
                (None, _) => Ok(self.text.clone()),
                (Some(expected), Some(given)) if expected == given => Ok(self.text.clone()),
                (Some(_), Some(_)) => Err(ExtractionError::InvalidPassword),
                (Some(_), None) => Err(ExtractionError::PasswordRequired),
            }
        }
    }

    /// Prompt that counts how many times it was asked.
    struct CountingPrompt {
        answer: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl PasswordPrompt for CountingPrompt {
        fn request_password(&self, _path: &Path) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    fn extractor_with(
        pdf: MockPdfSource,
        prompt_answer: Option<&str>,
    ) -> (DocumentExtractor, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let extractor = DocumentExtractor::new(
            Box::new(pdf),
            Box::new(MockOcrEngine::new("unused")),
            Box::new(CountingPrompt {
                answer: prompt_answer.map(str::to_string),
                calls: calls.clone(),
            }),
        );
        (extractor, calls)
    }

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn plain_text_file_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "policy.txt", b"Deductible: $1,500 per year.");
        let extractor = DocumentExtractor::with_defaults();
        let text = extractor.extract(&path);
        assert!(text.contains("$1,500"));
    }

    #[test]
    fn unsupported_extension_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "policy.xlsx", b"whatever");
        let extractor = DocumentExtractor::with_defaults();
        assert_eq!(extractor.extract(&path), "");
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let extractor = DocumentExtractor::with_defaults();
        assert_eq!(extractor.extract(Path::new("/nonexistent/policy.pdf")), "");
    }

    #[test]
    fn image_goes_through_ocr_engine() {
        let dir = tempfile::tempdir().unwrap();
        let img = image::GrayImage::from_pixel(32, 32, image::Luma([200u8]));
        let path = dir.path().join("scan.png");
        img.save(&path).unwrap();

        let extractor = DocumentExtractor::new(
            Box::new(MockPdfSource::open("unused")),
            Box::new(MockOcrEngine::new("Copay of $40 applies to each visit.")),
            Box::new(NoPasswordPrompt),
        );
        let text = extractor.extract(&path);
        assert!(text.contains("$40"));
    }

    #[test]
    fn corrupt_image_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "scan.png", b"not an image");
        let extractor = DocumentExtractor::new(
            Box::new(MockPdfSource::open("unused")),
            Box::new(MockOcrEngine::new("never reached")),
            Box::new(NoPasswordPrompt),
        );
        assert_eq!(extractor.extract(&path), "");
    }

    #[test]
    fn encrypted_pdf_prompts_once_and_retries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "locked.pdf", b"fake pdf bytes");
        let (extractor, calls) = extractor_with(
            MockPdfSource::locked("Coverage includes dental.", "sesame"),
            Some("sesame"),
        );
        let text = extractor.extract(&path);
        assert!(text.contains("dental"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn declined_password_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "locked.pdf", b"fake pdf bytes");
        let (extractor, calls) = extractor_with(MockPdfSource::locked("secret text", "sesame"), None);
        assert_eq!(extractor.extract(&path), "");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn wrong_password_degrades_to_empty_without_second_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "locked.pdf", b"fake pdf bytes");
        let (extractor, calls) = extractor_with(
            MockPdfSource::locked("secret text", "sesame"),
            Some("wrong-guess"),
        );
        assert_eq!(extractor.extract(&path), "");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unencrypted_pdf_never_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "open.pdf", b"fake pdf bytes");
        let (extractor, calls) = extractor_with(MockPdfSource::open("Benefits summary."), None);
        let text = extractor.extract(&path);
        assert!(text.contains("Benefits"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn no_extension_falls_back_to_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "policy", b"Claims must be filed within 90 days.");
        let extractor = DocumentExtractor::with_defaults();
        let text = extractor.extract(&path);
        assert!(text.contains("90 days"));
    }

    #[test]
    fn extraction_output_is_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "policy.txt", b"Premium: $120\x00 per month\x01");
        let extractor = DocumentExtractor::with_defaults();
        let text = extractor.extract(&path);
        assert!(!text.contains('\x00'));
        assert!(text.contains("$120"));
    }
}
