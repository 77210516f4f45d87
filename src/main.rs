use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use examdup::application::ports::{FileLoader, QuestionSegmenter};
use examdup::application::services::{CorpusLoader, SimilarityGrouper};
use examdup::domain::ContentType;
use examdup::infrastructure::embeddings::EmbedderFactory;
use examdup::infrastructure::observability::{init_tracing, TracingConfig};
use examdup::infrastructure::text_processing::{
    CompositeFileLoader, DocxAdapter, NumberedBoundarySegmenter, OcrPdfAdapter, PdfAdapter,
    PlainTextAdapter,
};
use examdup::presentation::report::{render_group_report, render_unmatched_report};
use examdup::presentation::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.into_settings();

    init_tracing(TracingConfig::new(settings.logging.json));

    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let docx_adapter: Arc<dyn FileLoader> = Arc::new(DocxAdapter);
    let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::new(vec![
        (ContentType::Text, text_adapter),
        (ContentType::Docx, docx_adapter),
        (ContentType::Pdf, pdf_adapter),
    ]));
    let ocr_fallback: Arc<dyn FileLoader> = Arc::new(OcrPdfAdapter::new());
    let segmenter: Arc<dyn QuestionSegmenter> = Arc::new(NumberedBoundarySegmenter::new());

    let embedder = EmbedderFactory::create(
        settings.embeddings.provider,
        settings.embeddings.model.clone(),
        settings.embeddings.api_key.clone(),
    )
    .await
    .context("failed to initialize embedding backend")?;

    let corpus_loader = CorpusLoader::new(file_loader, ocr_fallback, segmenter);
    let corpus = corpus_loader
        .load(&settings.input.directory)
        .await
        .context("failed to load question corpus")?;
    tracing::info!(questions = corpus.len(), "Corpus loaded");

    let grouper = SimilarityGrouper::new(embedder, settings.grouping.similarity_threshold)
        .context("failed to configure similarity grouper")?;
    let groups = grouper
        .group(&corpus)
        .await
        .context("failed to group questions")?;

    print!("{}", render_group_report(&groups));
    if let Some(unmatched) = render_unmatched_report(&groups, &corpus) {
        println!();
        print!("{unmatched}");
    }

    Ok(())
}
