//! Body style inference.
//!
//! Headings are judged relative to "normal text", so the pipeline first
//! infers the document's dominant (font size, font name) pair. The count is
//! a local insertion-ordered map built and discarded within one call, which
//! keeps equal-count ties deterministic: the first-encountered pair wins.

use crate::error::{Error, Result};
use crate::layout::line::Line;
use indexmap::IndexMap;

/// The inferred "normal paragraph text" style of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    /// Dominant font size
    pub font_size: f32,

    /// Dominant font name
    pub font_name: String,
}

/// Infer the dominant (font size, font name) pair across the lines.
///
/// Lines without a known size (size 0.0) are excluded from counting.
/// Returns [`Error::NoBodyStyle`] when no line carries a usable size; the
/// caller must treat that as a distinct failure, not an empty document.
///
/// # Examples
///
/// ```
/// # use doc_outline::layout::{detect_body_style, Line};
/// # use doc_outline::geometry::Rect;
/// # fn line(size: f32, font: &str) -> Line {
/// #     Line {
/// #         text: "body text".to_string(),
/// #         font_size: size,
/// #         font_name: font.to_string(),
/// #         page: 1,
/// #         bbox: Rect::new(0.0, 0.0, 100.0, 12.0),
/// #         page_width: 612.0,
/// #         spans: vec![],
/// #     }
/// # }
/// let lines = vec![line(12.0, "A"), line(12.0, "A"), line(18.0, "B")];
/// let body = detect_body_style(&lines).unwrap();
/// assert_eq!(body.font_size, 12.0);
/// assert_eq!(body.font_name, "A");
/// ```
pub fn detect_body_style(lines: &[Line]) -> Result<BodyStyle> {
    let mut counts: IndexMap<(u32, &str), usize> = IndexMap::new();

    for line in lines {
        if line.font_size == 0.0 {
            continue;
        }
        *counts
            .entry((line.font_size.to_bits(), line.font_name.as_str()))
            .or_insert(0) += 1;
    }

    let mut best: Option<(&(u32, &str), usize)> = None;
    for (key, &count) in &counts {
        match best {
            // Strictly greater, so the first-encountered pair wins ties
            Some((_, best_count)) if count <= best_count => {},
            _ => best = Some((key, count)),
        }
    }

    let ((size_bits, font_name), count) = best.ok_or(Error::NoBodyStyle)?;
    let body = BodyStyle {
        font_size: f32::from_bits(*size_bits),
        font_name: (*font_name).to_string(),
    };
    log::debug!(
        "body style: {:.1}pt {} ({} of {} lines)",
        body.font_size,
        body.font_name,
        count,
        lines.len()
    );
    Ok(body)
}
