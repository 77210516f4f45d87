/// Splits one document's raw extracted text into candidate question strings.
///
/// Synchronous by design: segmentation is pure CPU work with no await points.
/// Candidates are not yet corpus-normalized; that happens at the loader.
pub trait QuestionSegmenter: Send + Sync {
    fn segment(&self, raw_text: &str) -> Vec<String>;
}
