use super::column_detect::reorder_columns;
use super::types::PdfSource;
use super::ExtractionError;

/// PDF text-layer extractor.
///
/// Unencrypted documents go through the pdf-extract crate page by page.
/// Encrypted documents are detected via lopdf and, given a password,
/// decrypted and read page by page — accumulating whatever pages can be
/// read rather than failing the whole document on one bad page.
pub struct PdfTextSource;

impl PdfSource for PdfTextSource {
    fn extract_text(
        &self,
        pdf_bytes: &[u8],
        password: Option<&str>,
    ) -> Result<String, ExtractionError> {
        let mut doc = lopdf::Document::load_mem(pdf_bytes).map_err(|e| {
            let msg = e.to_string();
            if msg.to_lowercase().contains("encrypt") || msg.to_lowercase().contains("password") {
                ExtractionError::PasswordRequired
            } else {
                ExtractionError::PdfParsing(msg)
            }
        })?;

        if doc.is_encrypted() {
            let pwd = match password {
                Some(p) => p,
                None => return Err(ExtractionError::PasswordRequired),
            };
            doc.decrypt(pwd).map_err(|e| {
                let msg = e.to_string().to_lowercase();
                if msg.contains("password") || msg.contains("decrypt") {
                    ExtractionError::InvalidPassword
                } else {
                    ExtractionError::PdfParsing(e.to_string())
                }
            })?;
            return Ok(extract_pages_lopdf(&doc));
        }

        // pdf-extract handles the common unencrypted case; its per-page
        // output also feeds the column reorder pass.
        let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        Ok(join_pages(pages.iter().map(|p| reorder_columns(p))))
    }
}

/// Read every page lopdf can decode, skipping (and logging) the rest.
fn extract_pages_lopdf(doc: &lopdf::Document) -> String {
    let mut pages = Vec::new();
    for (page_no, _) in doc.get_pages() {
        match doc.extract_text(&[page_no]) {
            Ok(text) => pages.push(reorder_columns(&text)),
            Err(e) => {
                tracing::warn!(page = page_no, error = %e, "Skipping unreadable PDF page");
            }
        }
    }
    join_pages(pages.into_iter())
}

fn join_pages(pages: impl Iterator<Item = String>) -> String {
    pages.collect::<Vec<_>>().join("\n")
}
