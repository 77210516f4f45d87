/// Minimum number of characters a normalized question must have. Anything
/// shorter is leaked header/footer metadata, not question text.
pub const MIN_QUESTION_CHARS: usize = 11;

/// A corpus-level question string: lower-cased, trimmed, and long enough to
/// plausibly be a real question. Constructed only through [`Question::normalize`],
/// so every instance in a corpus satisfies those invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question(String);

impl Question {
    /// Normalizes a candidate segment into a corpus question. Returns `None`
    /// when the trimmed, lower-cased text is below [`MIN_QUESTION_CHARS`].
    pub fn normalize(candidate: &str) -> Option<Self> {
        let normalized = candidate.trim().to_lowercase();
        if normalized.chars().count() < MIN_QUESTION_CHARS {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
