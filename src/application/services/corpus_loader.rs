use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, QuestionSegmenter};
use crate::domain::{ContentType, Document, Question};

/// Walks an input directory (non-recursive), extracts each supported file's
/// text, segments it into candidate questions, and accumulates the
/// corpus-normalized survivors.
///
/// Ordering is deterministic: files sorted by name, questions in extraction
/// order within each file. Duplicates are kept — identical questions from
/// different papers are exactly what the grouper counts.
pub struct CorpusLoader {
    file_loader: Arc<dyn FileLoader>,
    ocr_fallback: Arc<dyn FileLoader>,
    segmenter: Arc<dyn QuestionSegmenter>,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read input directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CorpusLoader {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        ocr_fallback: Arc<dyn FileLoader>,
        segmenter: Arc<dyn QuestionSegmenter>,
    ) -> Self {
        Self {
            file_loader,
            ocr_fallback,
            segmenter,
        }
    }

    pub async fn load(&self, directory: &Path) -> Result<Vec<Question>, CorpusError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(directory)
            .map_err(|source| CorpusError::DirectoryUnreadable {
                path: directory.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut corpus = Vec::new();

        for path in paths {
            let Some(content_type) = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ContentType::from_extension)
            else {
                tracing::debug!(path = %path.display(), "Skipping unsupported extension");
                continue;
            };

            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            // One bad paper must not void the whole batch: log and move on.
            let text = match self.extract(&path, filename.clone(), content_type).await {
                Ok(text) => text,
                Err(error) => {
                    tracing::warn!(file = %filename, %error, "Skipping unreadable file");
                    continue;
                }
            };

            for candidate in self.segmenter.segment(&text) {
                if let Some(question) = Question::normalize(&candidate) {
                    corpus.push(question);
                }
            }
        }

        Ok(corpus)
    }

    async fn extract(
        &self,
        path: &Path,
        filename: String,
        content_type: ContentType,
    ) -> Result<String, FileLoaderError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read file: {e}")))?;
        let document = Document::new(filename, content_type);

        match self.file_loader.extract_text(&data, &document).await {
            Ok(text) if content_type == ContentType::Pdf && text.trim().is_empty() => {
                self.ocr(&data, &document).await
            }
            Err(FileLoaderError::NoTextFound(_)) if content_type == ContentType::Pdf => {
                self.ocr(&data, &document).await
            }
            other => other,
        }
    }

    async fn ocr(&self, data: &[u8], document: &Document) -> Result<String, FileLoaderError> {
        tracing::info!(file = %document.filename, "No text layer found, trying OCR");
        self.ocr_fallback.extract_text(data, document).await
    }
}
