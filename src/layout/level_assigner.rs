//! Hierarchy level assignment.
//!
//! Candidates rank into the top three font sizes (H1, H2, H3). An explicit
//! dotted numeric prefix ("2.3.1 Methodology") overrides the size ranking,
//! so deliberately numbered sections keep their authored depth even when
//! their font size would not make the cut.

use crate::layout::line::Line;
use crate::utils::safe_float_cmp;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // One or more digit groups joined by dots, optionally trailing digits:
    // "2.", "2.3", "2.3.1"
    static ref NUMBERED_PREFIX: Regex = Regex::new(r"^(\d+\.)+\d*").unwrap();
}

/// Hierarchy level of an accepted heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
}

impl HeadingLevel {
    /// The serialized label, "H1" through "H3".
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }

    /// Level for a numeric outline prefix with `dots` literal dots,
    /// clamped to H3.
    fn from_dot_count(dots: usize) -> Self {
        match (dots + 1).min(3) {
            1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }
}

/// A heading candidate with its assigned hierarchy level.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCandidate {
    /// The underlying line
    pub line: Line,

    /// The assigned level
    pub level: HeadingLevel,
}

/// Assign hierarchy levels to heading candidates.
///
/// The distinct candidate font sizes sort descending and the top three map
/// to H1–H3. Independently, a leading numbered prefix overrides the
/// size-based level with `H(min(3, dots + 1))`, counting the literal dots
/// in the matched prefix. Candidates that end up with neither a size-based
/// nor a pattern-based level are dropped. Input order is preserved.
pub fn assign_levels(candidates: Vec<Line>) -> Vec<HeadingCandidate> {
    let mut sizes: Vec<f32> = candidates.iter().map(|l| l.font_size).collect();
    sizes.sort_by(|a, b| safe_float_cmp(*b, *a));
    sizes.dedup_by(|a, b| a.to_bits() == b.to_bits());

    let level_of_size = |size: f32| -> Option<HeadingLevel> {
        sizes
            .iter()
            .take(3)
            .position(|s| s.to_bits() == size.to_bits())
            .map(|rank| match rank {
                0 => HeadingLevel::H1,
                1 => HeadingLevel::H2,
                _ => HeadingLevel::H3,
            })
    };

    let mut leveled = Vec::with_capacity(candidates.len());
    for line in candidates {
        let mut level = level_of_size(line.font_size);

        if let Some(m) = NUMBERED_PREFIX.find(&line.text) {
            let dots = m.as_str().matches('.').count();
            level = Some(HeadingLevel::from_dot_count(dots));
        }

        match level {
            Some(level) => leveled.push(HeadingCandidate { line, level }),
            None => log::debug!("candidate without a level dropped"),
        }
    }

    leveled
}
