use lopdf::Document;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Unreadable(String),

    #[error("document is encrypted")]
    Encrypted,

    #[error("no extractable text found in document")]
    NoText,
}

/// Plain text of each page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub pages: Vec<String>,
}

impl ExtractedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages joined, each terminated by a newline.
    pub fn full_text(&self) -> String {
        self.pages.iter().fold(String::new(), |mut text, page| {
            text.push_str(page.trim_end());
            text.push('\n');
            text
        })
    }
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, pdf: &[u8]) -> Result<ExtractedDocument, ExtractionError>;
}

/// Page-by-page extraction with `lopdf`.
///
/// A page whose content cannot be decoded (a scanned image, an unsupported
/// font encoding) contributes an empty string. The document fails only when
/// every page comes back empty.
#[derive(Debug, Default)]
pub struct LopdfExtractor;

impl TextExtractor for LopdfExtractor {
    fn extract(&self, pdf: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
        let document =
            Document::load_mem(pdf).map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

        if document.is_encrypted() {
            return Err(ExtractionError::Encrypted);
        }

        let pages: Vec<String> = document
            .get_pages()
            .into_keys()
            .map(|page_number| {
                document.extract_text(&[page_number]).unwrap_or_else(|e| {
                    log::debug!("No text extracted from page {}: {}", page_number, e);
                    String::new()
                })
            })
            .collect();

        if pages.iter().all(|page| page.trim().is_empty()) {
            return Err(ExtractionError::NoText);
        }

        Ok(ExtractedDocument { pages })
    }
}
