use std::collections::HashMap;

use crate::domain::{Question, SimilarityGroup};

/// Renders the console report: every group with a 1-based index and its
/// member count (the question's repetition frequency), members in insertion
/// order.
pub fn render_group_report(groups: &[SimilarityGroup]) -> String {
    let mut out = String::from("Similar question groups with frequencies:\n");

    for (index, group) in groups.iter().enumerate() {
        out.push_str(&format!(
            "\nGroup {} (count: {}):\n",
            index + 1,
            group.len()
        ));
        for question in group.members() {
            out.push_str(&format!("- {question}\n"));
        }
    }

    out
}

/// Renders the questions present in the corpus but missing from every group,
/// compared as multisets so duplicate questions are accounted per occurrence.
/// The grouper partitions the corpus exhaustively, so this returns `None`
/// unless a non-exhaustive grouping policy is introduced upstream.
pub fn render_unmatched_report(groups: &[SimilarityGroup], corpus: &[Question]) -> Option<String> {
    let mut grouped: HashMap<&Question, usize> = HashMap::new();
    for group in groups {
        for question in group.members() {
            *grouped.entry(question).or_default() += 1;
        }
    }

    let mut unmatched: Vec<&Question> = Vec::new();
    for question in corpus {
        match grouped.get_mut(question) {
            Some(count) if *count > 0 => *count -= 1,
            _ => unmatched.push(question),
        }
    }

    if unmatched.is_empty() {
        return None;
    }

    let mut out = String::from("Unmatched questions:\n");
    for question in unmatched {
        out.push_str(&format!("- {question}\n"));
    }
    Some(out)
}
