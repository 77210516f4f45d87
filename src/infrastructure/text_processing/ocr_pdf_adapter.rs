use std::io::Write;
use std::process::Command;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::pdf_rasterizer::rasterize_pages;

const OCR_TIMEOUT: Duration = Duration::from_secs(300);
const TESSERACT_LANG: &str = "eng";

/// Fallback extractor for scanned PDFs: rasterizes every page to a PNG and
/// pipes each one through the `tesseract` CLI, joining the recognized page
/// texts with newlines. Requires a `tesseract` binary on PATH.
#[derive(Default)]
pub struct OcrPdfAdapter;

impl OcrPdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn ocr_png(png: &[u8]) -> Result<String, FileLoaderError> {
    let mut temp_image = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp image: {e}"))
        })?;

    temp_image.write_all(png).map_err(|e| {
        FileLoaderError::ExtractionFailed(format!("failed to write temp image: {e}"))
    })?;

    let output = Command::new("tesseract")
        .arg(temp_image.path())
        .arg("stdout")
        .args(["-l", TESSERACT_LANG])
        .output()
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to run tesseract: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FileLoaderError::ExtractionFailed(format!(
            "tesseract exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[async_trait]
impl FileLoader for OcrPdfAdapter {
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

        let pages = tokio::time::timeout(
            OCR_TIMEOUT,
            tokio::task::spawn_blocking(move || -> Result<Vec<String>, FileLoaderError> {
                let png_pages = rasterize_pages(&bytes)?;
                png_pages.iter().map(|png| ocr_png(png)).collect()
            }),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("OCR extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        tracing::info!(page_count, "OCR extraction complete");

        let text = pages.join("\n");
        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(filename));
        }

        Ok(text)
    }
}
