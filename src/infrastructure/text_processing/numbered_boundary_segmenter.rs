use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::application::ports::QuestionSegmenter;
use crate::domain::MIN_QUESTION_CHARS;

// "Section A/B/C" headers and exam-preamble phrases run up to the next
// numbered boundary. The boundary token is captured and re-inserted so the
// split rule still sees it.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)section[- ]?[a-c]\b.*?(\d+\s*[.)])").unwrap());

static INSTRUCTIONAL_PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:this question|students.*?attempt|consists? of|carries|each question|compulsory)\b.*?(\d+\s*[.)])",
    )
    .unwrap()
});

// A run of digits followed by "." or ")" marks the start of a question.
static QUESTION_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*[.)]\s*").unwrap());

static MARK_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(?\s*\d+\s*(?:marks|mark)?\s*\)?").unwrap());

static METADATA_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:total|questions?|code|date|time|roll no|max:instructions|subject)\b.*?:")
        .unwrap()
});

// Segments that are nothing but exam instructions. Matched against the
// lower-cased, trimmed segment.
static INSTRUCTIONAL_JUNK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^hours.*max:instructions$",
        r"^answer all questions.*$",
        r"^part\s?[a-c]\s?(?:and)?\s?part\s?[a-c]?.*$",
        r"^question\s*no\.?\s*is$",
        r"^question\s*no\.?\s*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Splits one document's raw text into candidate questions at numbered
/// boundary tokens ("1.", "23)"), stripping section headers, instructional
/// boilerplate, mark annotations, and administrative metadata along the way.
///
/// The pipeline is an ordered list of named rules. Order matters: each rule
/// operates on the output of the previous one, and the boilerplate rules must
/// run before boundary splitting or the preamble text lands inside the first
/// segment.
#[derive(Default)]
pub struct NumberedBoundarySegmenter;

impl NumberedBoundarySegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl QuestionSegmenter for NumberedBoundarySegmenter {
    fn segment(&self, raw_text: &str) -> Vec<String> {
        let text = fold_unicode(raw_text);
        let text = collapse_line_breaks(&text);
        let text = strip_section_headers(&text);
        let text = strip_instructional_preambles(&text);

        split_on_question_boundaries(&text)
            .filter_map(refine_segment)
            .collect()
    }
}

/// NFKC-fold the text so ligatures from PDF extraction ("ﬁ") compare equal
/// to their plain forms before any pattern matching runs.
pub fn fold_unicode(text: &str) -> String {
    text.nfkc().collect()
}

/// Questions wrapped across lines are reconstructed as single-line strings.
pub fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Deletes "Section A/B/C ..." headers up to (not including) the next
/// numbered boundary token.
pub fn strip_section_headers(text: &str) -> String {
    SECTION_HEADER.replace_all(text, "$1").into_owned()
}

/// Deletes instructional preambles ("this question carries ...", "students
/// must attempt ...") up to (not including) the next numbered boundary token.
/// Must run after [`strip_section_headers`].
pub fn strip_instructional_preambles(text: &str) -> String {
    INSTRUCTIONAL_PREAMBLE.replace_all(text, "$1").into_owned()
}

/// Splits on numbered boundary tokens; the token itself is discarded.
pub fn split_on_question_boundaries(text: &str) -> impl Iterator<Item = &str> + '_ {
    QUESTION_BOUNDARY.split(text)
}

/// Removes mark annotations: a number, optionally parenthesized, optionally
/// suffixed with "mark"/"marks". Idempotent on already-clean text.
pub fn strip_mark_annotations(segment: &str) -> String {
    MARK_ANNOTATION.replace_all(segment, "").into_owned()
}

/// Removes administrative metadata labels ("Time:", "Roll No:", ...) through
/// the colon that follows them. Idempotent on already-clean text.
pub fn strip_metadata_labels(segment: &str) -> String {
    METADATA_LABEL.replace_all(segment, "").into_owned()
}

/// True when the segment is purely instructional ("answer all questions...",
/// a part/section pointer, a bare "question no").
pub fn is_instructional_junk(segment: &str) -> bool {
    let lowered = segment.trim().to_lowercase();
    INSTRUCTIONAL_JUNK
        .iter()
        .any(|pattern| pattern.is_match(&lowered))
}

/// True when the segment carries leaked header/footer metadata rather than
/// question text.
pub fn is_metadata_leak(segment: &str) -> bool {
    let lowered = segment.to_lowercase();
    lowered.contains("b.tech") || lowered.contains("subject")
}

fn refine_segment(segment: &str) -> Option<String> {
    let cleaned = strip_mark_annotations(segment.trim());
    let cleaned = strip_metadata_labels(&cleaned);
    let cleaned = cleaned.trim();

    if is_instructional_junk(cleaned) {
        return None;
    }
    if cleaned.chars().count() < MIN_QUESTION_CHARS || is_metadata_leak(cleaned) {
        return None;
    }

    Some(cleaned.to_string())
}
