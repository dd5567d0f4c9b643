use regex::Regex;
use serde::Serialize;

/// Aggregate line counts for one classified text body.
///
/// `total` is the number of segments produced by splitting the text on
/// `'\n'`: an empty string yields one empty segment, and a trailing newline
/// yields a trailing empty segment. `code` and `comment` are independent
/// tallies over the same lines and do not have to sum to `total`; a blank
/// line counts as neither, a line with a trailing comment counts as both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub total: usize,
    /// Signed because a line matching several decrementing rules at once can
    /// push the tally below zero. That undercount is part of the heuristic's
    /// observable behavior and is not corrected.
    pub code: i64,
    pub comment: usize,
}

impl LineCounts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
        }
    }
}

/// Heuristic line classifier.
///
/// Applies one generic rule set per line regardless of language: a
/// block-comment marker test, an inline double-slash test, and a blank-line
/// test. This is pattern matching, not parsing. It cannot tell a `//` inside
/// a string literal from a real comment and it does not track `/* ... */`
/// state across lines; it only recognizes the per-line visual markers.
pub struct LineClassifier {
    /// Bare `*` continuation at line start (doc-style `* text` included),
    /// or a `*/` close marker anywhere in the line.
    block_marker: Regex,
    /// `//` with whitespace on both sides: a trailing comment after code or
    /// a comment on its own indented line.
    slash_comment: Regex,
    /// Nothing but optional whitespace before the `//`.
    comment_only: Regex,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            block_marker: Regex::new(r"(^\s*\*)|(\*/)").expect("Invalid regex"),
            slash_comment: Regex::new(r"\s+//\s+").expect("Invalid regex"),
            comment_only: Regex::new(r"^\s*//").expect("Invalid regex"),
        }
    }

    /// Classify `text` into total, code, and comment line counts.
    ///
    /// Pure and total over all string inputs; never fails.
    #[must_use]
    pub fn classify(&self, text: &str) -> LineCounts {
        let mut counts = LineCounts::new();

        for line in text.split('\n') {
            counts.total += 1;
            counts.code += 1;
            self.tally(line, &mut counts);
        }

        counts
    }

    /// Apply the ordered rules to one line. Each rule is independent and the
    /// decrements stack: a line matching the block-marker rule and the
    /// comment-only rule loses two from `code`.
    fn tally(&self, line: &str, counts: &mut LineCounts) {
        if self.block_marker.is_match(line) {
            counts.comment += 1;
            counts.code -= 1;
        }

        if self.slash_comment.is_match(line) {
            counts.comment += 1;
            // Comment-only lines lose their code count; code with a trailing
            // comment keeps it.
            if self.comment_only.is_match(line) {
                counts.code -= 1;
            }
        }

        if line.trim().is_empty() {
            counts.code -= 1;
        }
    }
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod tests;
