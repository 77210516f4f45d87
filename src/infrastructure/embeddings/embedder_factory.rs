use std::sync::Arc;

use crate::application::ports::Embedder;
use crate::presentation::config::EmbeddingProvider;

use super::fastembed_embedder::FastembedEmbedder;
use super::openai_embedder::OpenAiEmbedder;

const DEFAULT_OPENAI_MODEL: &str = "text-embedding-3-small";

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: the OpenAI embedder requires --openai-api-key or OPENAI_API_KEY")]
    MissingApiKey,
    #[error("embedding model initialization failed: {0}")]
    InitializationFailed(String),
}

impl EmbedderFactory {
    pub async fn create(
        provider: EmbeddingProvider,
        model: Option<String>,
        api_key: Option<String>,
    ) -> Result<Arc<dyn Embedder>, EmbedderFactoryError> {
        match provider {
            EmbeddingProvider::Local => {
                tracing::info!(
                    model = model.as_deref().unwrap_or("all-MiniLM-L6-v2"),
                    "Loading local embedding model"
                );
                let embedder = FastembedEmbedder::new(model.as_deref())
                    .await
                    .map_err(|e| EmbedderFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(embedder))
            }
            EmbeddingProvider::OpenAi => {
                let key = api_key
                    .filter(|k| !k.is_empty())
                    .ok_or(EmbedderFactoryError::MissingApiKey)?;
                let model = model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
                tracing::info!(model = %model, "Using OpenAI embedding model");
                Ok(Arc::new(OpenAiEmbedder::new(key, model)))
            }
        }
    }
}
