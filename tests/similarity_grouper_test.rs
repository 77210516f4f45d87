use std::collections::HashMap;
use std::sync::Arc;

use examdup::application::ports::{Embedder, EmbedderError};
use examdup::application::services::{GroupingError, SimilarityGrouper};
use examdup::domain::{Embedding, Question, SimilarityGroup};
use examdup::infrastructure::embeddings::MockEmbedder;

/// Deterministic embedder backed by hand-planted vectors, keyed by the
/// normalized question text.
struct FixtureEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl FixtureEmbedder {
    fn new(entries: &[(&str, Vec<f32>)]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(text, vector)| (text.to_string(), vector.clone()))
                .collect(),
        }
    }

    fn vector_for(&self, text: &str) -> Result<Embedding, EmbedderError> {
        self.vectors
            .get(text)
            .map(|values| Embedding::new(values.clone()))
            .ok_or_else(|| EmbedderError::InvalidResponse(format!("no fixture vector for {text}")))
    }
}

#[async_trait::async_trait]
impl Embedder for FixtureEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        self.vector_for(text)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        texts.iter().map(|text| self.vector_for(text)).collect()
    }
}

/// Embedder that drops one vector from every batch, to exercise the
/// count-mismatch guard.
struct TruncatingEmbedder;

#[async_trait::async_trait]
impl Embedder for TruncatingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, EmbedderError> {
        Ok(Embedding::new(vec![1.0, 0.0]))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts
            .iter()
            .skip(1)
            .map(|_| Embedding::new(vec![1.0, 0.0]))
            .collect())
    }
}

fn question(text: &str) -> Question {
    Question::normalize(text).expect("fixture question must survive normalization")
}

fn flatten(groups: &[SimilarityGroup]) -> Vec<Question> {
    groups
        .iter()
        .flat_map(|group| group.members().to_vec())
        .collect()
}

#[tokio::test]
async fn given_any_corpus_when_grouping_then_groups_partition_the_corpus() {
    let corpus = vec![
        question("define newton's first law of motion"),
        question("state newton's first law"),
        question("explain the carbon cycle"),
        question("define newton's first law of motion"),
    ];
    let embedder = Arc::new(FixtureEmbedder::new(&[
        ("define newton's first law of motion", vec![1.0, 0.0]),
        ("state newton's first law", vec![0.95, 0.312_25]),
        ("explain the carbon cycle", vec![0.0, 1.0]),
    ]));
    let grouper = SimilarityGrouper::new(embedder, 0.75).unwrap();

    let groups = grouper.group(&corpus).await.unwrap();

    let mut grouped = flatten(&groups);
    let mut expected = corpus.clone();
    grouped.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    assert_eq!(grouped, expected);
}

#[tokio::test]
async fn given_seed_similar_pair_dissimilar_to_each_other_when_grouping_then_all_share_one_group() {
    // sim(a, b) = sim(a, c) = 0.9, sim(b, c) = 0.62: membership is decided
    // against the seed only, so b and c land together despite being
    // dissimilar to each other.
    let b_y = 0.19_f32.sqrt();
    let corpus = vec![
        question("what is the boiling point of water"),
        question("at what temperature does water boil"),
        question("describe the boiling process"),
    ];
    let embedder = Arc::new(FixtureEmbedder::new(&[
        ("what is the boiling point of water", vec![1.0, 0.0]),
        ("at what temperature does water boil", vec![0.9, b_y]),
        ("describe the boiling process", vec![0.9, -b_y]),
    ]));
    let grouper = SimilarityGrouper::new(embedder, 0.75).unwrap();

    let groups = grouper.group(&corpus).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
    assert_eq!(
        groups[0].representative(),
        &question("what is the boiling point of water")
    );
}

#[tokio::test]
async fn given_rising_threshold_when_grouping_then_groups_only_fragment() {
    let corpus = vec![
        question("define acceleration due to gravity"),
        question("what is gravitational acceleration"),
        question("state the value of g on earth"),
        question("explain the krebs cycle steps"),
    ];
    let entries = [
        ("define acceleration due to gravity", vec![1.0, 0.0]),
        ("what is gravitational acceleration", vec![0.95, 0.312_25]),
        ("state the value of g on earth", vec![0.8, 0.6]),
        ("explain the krebs cycle steps", vec![0.0, 1.0]),
    ];

    let mut previous_group_count = 0;
    let mut previous_largest = usize::MAX;

    for threshold in [0.5, 0.75, 0.9, 0.99] {
        let embedder = Arc::new(FixtureEmbedder::new(&entries));
        let grouper = SimilarityGrouper::new(embedder, threshold).unwrap();
        let groups = grouper.group(&corpus).await.unwrap();

        let largest = groups.iter().map(SimilarityGroup::len).max().unwrap();
        assert!(groups.len() >= previous_group_count);
        assert!(largest <= previous_largest);

        previous_group_count = groups.len();
        previous_largest = largest;
    }
}

#[tokio::test]
async fn given_identical_embeddings_when_grouping_then_single_group_forms() {
    let corpus = vec![
        question("define photosynthesis for plants"),
        question("explain cellular respiration"),
        question("describe the nitrogen cycle"),
    ];
    let grouper = SimilarityGrouper::new(Arc::new(MockEmbedder), 0.75).unwrap();

    let groups = grouper.group(&corpus).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
}

#[tokio::test]
async fn given_empty_corpus_when_grouping_then_returns_no_groups() {
    let grouper = SimilarityGrouper::new(Arc::new(MockEmbedder), 0.75).unwrap();

    let groups = grouper.group(&[]).await.unwrap();

    assert!(groups.is_empty());
}

#[test]
fn given_threshold_outside_unit_interval_when_constructing_then_rejected() {
    assert!(matches!(
        SimilarityGrouper::new(Arc::new(MockEmbedder), 1.5),
        Err(GroupingError::ThresholdOutOfRange(_))
    ));
    assert!(matches!(
        SimilarityGrouper::new(Arc::new(MockEmbedder), -0.1),
        Err(GroupingError::ThresholdOutOfRange(_))
    ));
    assert!(SimilarityGrouper::new(Arc::new(MockEmbedder), 0.0).is_ok());
    assert!(SimilarityGrouper::new(Arc::new(MockEmbedder), 1.0).is_ok());
}

#[tokio::test]
async fn given_embedder_returning_wrong_count_when_grouping_then_mismatch_error() {
    let corpus = vec![
        question("define the term electric field"),
        question("state coulomb's law precisely"),
    ];
    let grouper = SimilarityGrouper::new(Arc::new(TruncatingEmbedder), 0.75).unwrap();

    let result = grouper.group(&corpus).await;

    assert!(matches!(
        result,
        Err(GroupingError::EmbeddingCountMismatch {
            expected: 2,
            actual: 1
        })
    ));
}
