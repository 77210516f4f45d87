use async_trait::async_trait;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Extracts the text of a word-processor document as its paragraph texts,
/// newline-joined. A .docx file is a zip of XML parts; `docx-rs` exposes the
/// parsed tree as Document -> Paragraph -> Run -> Text nodes.
pub struct DocxAdapter;

#[async_trait]
impl FileLoader for DocxAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_extension().to_string(),
            ));
        }

        let docx = read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse docx: {e}")))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    paragraph
        .children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|run_child| match run_child {
                        RunChild::Text(text) => Some(text.text.as_str()),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}
