use super::question::Question;

/// A non-empty, ordered set of near-duplicate questions. The first member is
/// the representative: every later member was admitted because its similarity
/// to the representative cleared the grouping threshold, not because of any
/// relation to other members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityGroup {
    members: Vec<Question>,
}

impl SimilarityGroup {
    pub fn seeded(representative: Question) -> Self {
        Self {
            members: vec![representative],
        }
    }

    pub fn admit(&mut self, question: Question) {
        self.members.push(question);
    }

    pub fn representative(&self) -> &Question {
        &self.members[0]
    }

    pub fn members(&self) -> &[Question] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
