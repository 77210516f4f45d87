mod embedder_factory;
mod fastembed_embedder;
mod mock_embedder;
mod openai_embedder;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use fastembed_embedder::FastembedEmbedder;
pub use mock_embedder::MockEmbedder;
pub use openai_embedder::OpenAiEmbedder;
