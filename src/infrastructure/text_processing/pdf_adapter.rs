use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-layer extraction for digitally generated PDFs. A scanned PDF has no
/// text layer and comes back as `NoTextFound`, which the corpus loader uses
/// as its cue to fall back to OCR.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_extension().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let filename = document.filename.clone();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(filename));
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
