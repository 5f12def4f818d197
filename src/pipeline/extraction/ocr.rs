use super::types::OcrEngine;
use super::ExtractionError;

/// Bundled Tesseract OCR engine.
/// Only available when compiled with the `ocr` feature flag.
#[cfg(feature = "ocr")]
pub struct TesseractOcr {
    lang: String,
}

#[cfg(feature = "ocr")]
impl TesseractOcr {
    pub fn new() -> Self {
        Self {
            lang: "eng".to_string(),
        }
    }

    /// Set language(s) for OCR (e.g., "eng", "eng+fra").
    pub fn with_languages(mut self, langs: &str) -> Self {
        self.lang = langs.to_string();
        self
    }
}

#[cfg(feature = "ocr")]
impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractOcr {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<String, ExtractionError> {
        let tess = tesseract::Tesseract::new(None, Some(&self.lang))
            .map_err(|e| ExtractionError::OcrInit(format!("{e:?}")))?;

        tess.set_image_from_mem(image_bytes)
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?
            .get_text()
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))
    }
}

/// Stand-in engine for builds without the `ocr` feature: every scanned
/// image degrades to the empty-text path with a logged warning.
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn ocr_image(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        Err(ExtractionError::OcrUnavailable(
            "built without the `ocr` feature".to_string(),
        ))
    }
}

/// Default engine for the current build.
pub fn default_ocr_engine() -> Box<dyn OcrEngine + Send + Sync> {
    #[cfg(feature = "ocr")]
    {
        Box::new(TesseractOcr::new())
    }
    #[cfg(not(feature = "ocr"))]
    {
        Box::new(DisabledOcr)
    }
}

/// Scripted OCR engine for tests.
#[cfg(test)]
pub struct MockOcrEngine {
    pub text: String,
}

#[cfg(test)]
impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
impl OcrEngine for MockOcrEngine {
    fn ocr_image(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_engine_reports_unavailable() {
        let result = DisabledOcr.ocr_image(b"image bytes");
        assert!(matches!(result, Err(ExtractionError::OcrUnavailable(_))));
    }

    #[test]
    fn mock_engine_returns_scripted_text() {
        let engine = MockOcrEngine::new("Copay: $40 per visit");
        let text = engine.ocr_image(b"fake_image_bytes").unwrap();
        assert_eq!(text, "Copay: $40 per visit");
    }
}
