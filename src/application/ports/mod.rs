mod embedder;
mod file_loader;
mod question_segmenter;

pub use embedder::{Embedder, EmbedderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use question_segmenter::QuestionSegmenter;
