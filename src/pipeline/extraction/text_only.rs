use std::path::Path;

use super::ExtractionError;

/// Raw byte read interpreted as UTF-8 text.
/// Covers `.txt` and the `.doc`/`.docx` dispatch entries — real Word
/// binaries fail UTF-8 decoding and degrade to empty text upstream.
pub fn read_text_file(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ExtractionError::EncodingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.txt");
        std::fs::write(&path, "Premium: $120 per month. Conditions apply.").unwrap();
        let text = read_text_file(&path).unwrap();
        assert!(text.contains("$120"));
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.doc");
        std::fs::write(&path, [0xD0, 0xCF, 0x11, 0xE0, 0xFF, 0xFE]).unwrap();
        let result = read_text_file(&path);
        assert!(matches!(result, Err(ExtractionError::EncodingError(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_text_file(Path::new("/nonexistent/policy.txt"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }
}
