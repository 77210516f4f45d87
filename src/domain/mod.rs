mod document;
mod embedding;
mod question;
mod similarity_group;

pub use document::{ContentType, Document};
pub use embedding::Embedding;
pub use question::{Question, MIN_QUESTION_CHARS};
pub use similarity_group::SimilarityGroup;
