//! Section splitting and label classification.
//!
//! The response format uses a single `#` as its heading delimiter. Splitting
//! on that character (rather than parsing proper markdown headings) is what
//! the prompt's output contract assumes: every top-level block starts with
//! `# <label>` and runs until the next `#`. Empty fragments — produced by a
//! leading `#` or by `##` runs inside an appended block — are discarded.

/// Heading delimiter separating top-level response sections.
pub(crate) const HEADING_DELIMITER: char = '#';

/// Which extractor a section's body is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
    Overview,
    Schedule,
    Additional,
}

/// Label keyword → section kind, checked in order by substring containment.
///
/// Containment, not equality: real responses decorate labels (`# 概要`,
/// `1. 概要`, trailing spaces), and the appended budget block introduces
/// labels matching none of these, which are ignored.
const SECTION_KEYWORDS: [(&str, SectionKind); 3] = [
    ("概要", SectionKind::Overview),
    ("詳細日程", SectionKind::Schedule),
    ("補足情報", SectionKind::Additional),
];

/// One heading-delimited block of the raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    /// First line of the block, trimmed.
    pub label: &'a str,
    /// Remaining lines with blank lines removed, otherwise untouched.
    pub body: Vec<&'a str>,
}

impl Section<'_> {
    pub(crate) fn kind(&self) -> Option<SectionKind> {
        SECTION_KEYWORDS
            .iter()
            .find(|(keyword, _)| self.label.contains(keyword))
            .map(|&(_, kind)| kind)
    }
}

/// Split raw response text into labelled sections.
///
/// An empty input, or input with no `#` at all, yields a single unlabelled
/// section (or none for the empty string); classification simply matches
/// nothing and the caller falls through to [`super::ParsedPlan::default`].
pub(crate) fn split_sections(text: &str) -> Vec<Section<'_>> {
    text.split(HEADING_DELIMITER)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let mut lines = fragment.trim().split('\n');
            let label = lines.next().unwrap_or("").trim();
            let body = lines.filter(|line| !line.trim().is_empty()).collect();
            Section { label, body }
        })
        .collect()
}
