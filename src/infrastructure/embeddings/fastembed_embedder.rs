use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, ModelTrait, TextEmbedding, TextInitOptions};
use tokio::sync::Mutex;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

/// Local sentence-embedding backend. Defaults to all-MiniLM-L6-v2, which
/// maps short question strings into 384-dimensional vectors with no network
/// dependency at inference time.
pub struct FastembedEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
    dimensions: usize,
}

impl FastembedEmbedder {
    /// Loads the embedding model, downloading it on first use. Model setup is
    /// blocking work and runs on the blocking pool.
    pub async fn new(model_override: Option<&str>) -> Result<Self, EmbedderError> {
        let model_name = match model_override {
            Some(code) => EmbeddingModel::from_str(code)
                .map_err(|e| EmbedderError::ModelLoadFailed(e.to_string()))?,
            None => EmbeddingModel::AllMiniLML6V2,
        };

        let (model, dimensions) =
            tokio::task::spawn_blocking(move || -> Result<_, EmbedderError> {
                let model_code = model_name.to_string();
                let options =
                    TextInitOptions::new(model_name.clone()).with_show_download_progress(false);
                let model = TextEmbedding::try_new(options)
                    .map_err(|e| EmbedderError::ModelLoadFailed(e.to_string()))?;
                let info = EmbeddingModel::get_model_info(&model_name).ok_or_else(|| {
                    EmbedderError::ModelLoadFailed(format!(
                        "model metadata missing for {model_code}"
                    ))
                })?;
                Ok((model, info.dim))
            })
            .await
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("task join error: {e}")))??;

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            dimensions,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[async_trait]
impl Embedder for FastembedEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        let results = self.embed_batch(&[text]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| EmbedderError::InvalidResponse("empty embedding batch".to_string()))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let owned: Vec<String> = texts.iter().map(|t| (*t).to_string()).collect();

        let mut guard = self.model.lock().await;
        let vectors = guard
            .embed(owned, None)
            .map_err(|e| EmbedderError::InferenceFailed(e.to_string()))?;

        Ok(vectors.into_iter().map(Embedding::new).collect())
    }
}
