mod corpus_loader;
mod similarity_grouper;

pub use corpus_loader::{CorpusError, CorpusLoader};
pub use similarity_grouper::{GroupingError, SimilarityGrouper};
