//! Search-match highlighting.
//!
//! # Responsibility
//! - Split rendered text into plain and highlighted segments for a query.
//!
//! # Invariants
//! - Concatenating the segments reproduces the input text exactly.
//! - The query is matched literally (regex metacharacters escaped) and
//!   case-insensitively.

use regex::Regex;

/// One run of text, either plain or part of a search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub highlighted: bool,
}

/// Segments `text` around case-insensitive literal matches of `query`.
///
/// An empty query (or empty text) produces no highlighted segments.
pub fn highlight_matches(text: &str, query: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![plain(text)];
    }

    let pattern = format!("(?i){}", regex::escape(query));
    let Ok(matcher) = Regex::new(&pattern) else {
        return vec![plain(text)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in matcher.find_iter(text) {
        if found.start() > cursor {
            segments.push(plain(&text[cursor..found.start()]));
        }
        segments.push(HighlightSegment {
            text: found.as_str().to_string(),
            highlighted: true,
        });
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(plain(&text[cursor..]));
    }

    segments
}

fn plain(text: &str) -> HighlightSegment {
    HighlightSegment {
        text: text.to_string(),
        highlighted: false,
    }
}
