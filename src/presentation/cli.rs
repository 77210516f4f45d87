use std::path::PathBuf;

use clap::Parser;

use super::config::{
    EmbeddingProvider, EmbeddingsSettings, GroupingSettings, InputSettings, LoggingSettings,
    Settings, DEFAULT_SIMILARITY_THRESHOLD,
};

/// Find repeated exam questions across papers.
///
/// Extracts text from the .txt, .docx, and .pdf papers in a directory
/// (falling back to OCR for scanned PDFs), segments it into individual
/// questions, and groups near-duplicates by embedding similarity to show how
/// often each question repeats.
#[derive(Debug, Parser)]
#[command(name = "examdup", version, about)]
pub struct Cli {
    /// Directory containing the exam papers to analyze
    pub input_dir: PathBuf,

    /// Minimum cosine similarity for a question to join a group's representative
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    pub threshold: f32,

    /// Embedding backend
    #[arg(long, value_enum, default_value_t = EmbeddingProvider::Local)]
    pub embedding_provider: EmbeddingProvider,

    /// Model override for the chosen backend (e.g. an OpenAI model name)
    #[arg(long)]
    pub embedding_model: Option<String>,

    /// API key for the OpenAI backend; falls back to OPENAI_API_KEY
    #[arg(long)]
    pub openai_api_key: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    pub fn into_settings(self) -> Settings {
        Settings {
            input: InputSettings {
                directory: self.input_dir,
            },
            grouping: GroupingSettings {
                similarity_threshold: self.threshold,
            },
            embeddings: EmbeddingsSettings {
                provider: self.embedding_provider,
                model: self.embedding_model,
                api_key: self
                    .openai_api_key
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok()),
            },
            logging: LoggingSettings {
                json: self.json_logs,
            },
        }
    }
}
