mod settings;

pub use settings::{
    EmbeddingProvider, EmbeddingsSettings, GroupingSettings, InputSettings, LoggingSettings,
    Settings, DEFAULT_SIMILARITY_THRESHOLD,
};
