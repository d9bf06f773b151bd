//! Heading candidacy classification.
//!
//! A pure predicate over one line and the document's body style. The
//! rejection guards weed out noise (OCR artifacts, list markers, sentence
//! fragments); the acceptance rule is conjunctive: width and size
//! thresholds keep wrapped body paragraphs out, while the bold-or-very-large
//! disjunction lets either strongly emphasized or simply oversized headings
//! through.

use crate::config::OutlineConfig;
use crate::layout::body_style::BodyStyle;
use crate::layout::line::Line;
use crate::utils::alphabetic_ratio;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // List markers: a lone "a)" or "(1)" style label
    static ref LETTER_LIST_MARKER: Regex = Regex::new(r"^[a-zA-Z]\)$").unwrap();
    static ref NUMBER_LIST_MARKER: Regex = Regex::new(r"^\(\d+\)$").unwrap();
    // Dotted numeric outline prefix, e.g. "2" or "2.3"
    static ref NUMERIC_OUTLINE_PREFIX: Regex = Regex::new(r"^\d+(\.\d+)*").unwrap();
}

/// Decide whether a line is a heading candidate.
///
/// A line is rejected when any of the following holds:
/// - fewer than [`OutlineConfig::min_heading_chars`] characters;
/// - alphabetic ratio below [`OutlineConfig::min_alpha_ratio`];
/// - a word character repeated 3+ times consecutively (noise guard);
/// - the whole text is a list marker ("a)" or "(1)");
/// - it ends in sentence-terminal punctuation without starting with a
///   dotted numeric outline prefix.
///
/// Otherwise it is accepted iff it is larger than body text, narrower than
/// [`OutlineConfig::max_width_ratio`] of the page, does not end in a
/// period, and is either bold or larger than
/// [`OutlineConfig::emphatic_size_ratio`] × body size.
///
/// # Examples
///
/// ```
/// # use doc_outline::layout::{is_heading_candidate, BodyStyle, Line, MergedSpan};
/// # use doc_outline::geometry::Rect;
/// # use doc_outline::OutlineConfig;
/// let body = BodyStyle { font_size: 12.0, font_name: "Times".to_string() };
/// let bbox = Rect::new(72.0, 90.0, 180.0, 18.0);
/// let line = Line {
///     text: "Chapter Overview".to_string(),
///     font_size: 15.6,
///     font_name: "Times-Bold".to_string(),
///     page: 1,
///     bbox,
///     page_width: 612.0,
///     spans: vec![MergedSpan {
///         text: "Chapter Overview".to_string(),
///         font_name: "Times-Bold".to_string(),
///         font_size: 15.6,
///         bold: true,
///         bbox,
///     }],
/// };
///
/// assert!(is_heading_candidate(&line, &body, &OutlineConfig::default()));
/// ```
pub fn is_heading_candidate(line: &Line, body: &BodyStyle, config: &OutlineConfig) -> bool {
    let text = line.text.as_str();

    if text.chars().count() < config.min_heading_chars {
        return false;
    }
    if alphabetic_ratio(text) < config.min_alpha_ratio {
        return false;
    }
    if has_noise_run(text) {
        return false;
    }
    if LETTER_LIST_MARKER.is_match(text) || NUMBER_LIST_MARKER.is_match(text) {
        return false;
    }
    if ends_with_sentence_terminal(text) && !NUMERIC_OUTLINE_PREFIX.is_match(text) {
        return false;
    }

    let bold = line.spans.iter().any(|s| s.bold);
    let concise = line.bbox.width < line.page_width * config.max_width_ratio;
    let large = line.font_size > body.font_size * config.large_size_ratio;
    let no_dot = !text.ends_with('.');

    large
        && concise
        && no_dot
        && (bold || line.font_size > body.font_size * config.emphatic_size_ratio)
}

/// A word character (alphanumeric or underscore) repeated 3+ times in a row.
///
/// The regex crate has no backreferences, so this is a linear scan rather
/// than a `(\w)\1{2,}` pattern.
fn has_noise_run(text: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= 3 && (c.is_alphanumeric() || c == '_') {
            return true;
        }
    }
    false
}

/// Sentence-terminal punctuation: period, Arabic full stop, Arabic question mark.
fn ends_with_sentence_terminal(text: &str) -> bool {
    matches!(text.chars().last(), Some('.' | '\u{06D4}' | '\u{061F}'))
}
