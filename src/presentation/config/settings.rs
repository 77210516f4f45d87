use std::path::PathBuf;

use clap::ValueEnum;

/// Default minimum cosine similarity for a question to join a group.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.75;

#[derive(Debug, Clone)]
pub struct Settings {
    pub input: InputSettings,
    pub grouping: GroupingSettings,
    pub embeddings: EmbeddingsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct InputSettings {
    pub directory: PathBuf,
}

#[derive(Debug, Clone)]
pub struct GroupingSettings {
    pub similarity_threshold: f32,
}

#[derive(Debug, Clone)]
pub struct EmbeddingsSettings {
    pub provider: EmbeddingProvider,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    Local,
    #[value(name = "openai")]
    OpenAi,
}

impl std::fmt::Display for EmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json: bool,
}
