use std::sync::Arc;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::{Embedding, Question, SimilarityGroup};

/// Partitions a question corpus into groups of near-duplicates.
///
/// Greedy single pass in corpus order: each unvisited question seeds a new
/// group and pulls in every later unvisited question whose cosine similarity
/// to that seed clears the threshold. Membership is decided against the seed
/// only — two members of one group need not be similar to each other, and a
/// question similar to a non-seed member is never pulled in. This is not
/// transitive clustering; downstream frequency counts depend on the exact
/// seed-only rule, so do not replace it with connected components without
/// documenting the behavior change.
pub struct SimilarityGrouper {
    embedder: Arc<dyn Embedder>,
    threshold: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum GroupingError {
    #[error("similarity threshold must be within [0.0, 1.0], got {0}")]
    ThresholdOutOfRange(f32),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("embedder returned {actual} vectors for {expected} questions")]
    EmbeddingCountMismatch { expected: usize, actual: usize },
}

impl SimilarityGrouper {
    pub fn new(embedder: Arc<dyn Embedder>, threshold: f32) -> Result<Self, GroupingError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(GroupingError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            embedder,
            threshold,
        })
    }

    pub async fn group(&self, corpus: &[Question]) -> Result<Vec<SimilarityGroup>, GroupingError> {
        if corpus.is_empty() {
            return Ok(Vec::new());
        }

        let texts: Vec<&str> = corpus.iter().map(|q| q.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;
        if embeddings.len() != corpus.len() {
            return Err(GroupingError::EmbeddingCountMismatch {
                expected: corpus.len(),
                actual: embeddings.len(),
            });
        }

        let similarity = pairwise_similarity(&embeddings);

        let mut visited = vec![false; corpus.len()];
        let mut groups = Vec::new();

        for seed in 0..corpus.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;

            let mut group = SimilarityGroup::seeded(corpus[seed].clone());
            for candidate in seed + 1..corpus.len() {
                if !visited[candidate] && similarity[seed][candidate] >= self.threshold {
                    visited[candidate] = true;
                    group.admit(corpus[candidate].clone());
                }
            }
            groups.push(group);
        }

        tracing::debug!(
            questions = corpus.len(),
            groups = groups.len(),
            "Corpus grouped"
        );

        Ok(groups)
    }
}

fn pairwise_similarity(embeddings: &[Embedding]) -> Vec<Vec<f32>> {
    let mut matrix = vec![vec![0.0; embeddings.len()]; embeddings.len()];
    for i in 0..embeddings.len() {
        matrix[i][i] = 1.0;
        for j in i + 1..embeddings.len() {
            let similarity = embeddings[i].cosine_similarity(&embeddings[j]);
            matrix[i][j] = similarity;
            matrix[j][i] = similarity;
        }
    }
    matrix
}
