//! Line assembly.
//!
//! Turns the rendering layer's per-page span groups into the document-wide
//! line sequence every later stage consumes. Page order, then encounter
//! order within a page, is the canonical reading order; outline entries are
//! never re-sorted downstream.

use crate::config::OutlineConfig;
use crate::geometry::Rect;
use crate::layout::span::{merge_spans, MergedSpan};
use crate::model::DocumentInput;

/// One visual text line with its dominant style and page context.
///
/// Invariant: `text` is non-empty; lines whose merged text trims to nothing
/// are dropped at assembly time.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Trimmed concatenation of the merged span texts
    pub text: String,

    /// Nominal font size, taken from the first merged span
    pub font_size: f32,

    /// Nominal font name, taken from the first merged span
    pub font_name: String,

    /// 1-based page number
    pub page: u32,

    /// Union of the merged span boxes
    pub bbox: Rect,

    /// Width of the page the line sits on
    pub page_width: f32,

    /// The line's merged spans in left-to-right order
    pub spans: Vec<MergedSpan>,
}

/// Assemble the canonical line sequence for a document.
///
/// Runs span merging per visual line, drops lines with no spans or no text
/// after trimming, and concatenates pages in order. The returned order is
/// the document's reading order used everywhere downstream.
pub fn assemble_lines(doc: &DocumentInput, config: &OutlineConfig) -> Vec<Line> {
    let mut lines = Vec::new();

    for (page_idx, page) in doc.pages.iter().enumerate() {
        let page_num = page_idx as u32 + 1;
        let before = lines.len();

        for raw_line in &page.lines {
            let spans = merge_spans(raw_line, config);
            if spans.is_empty() {
                continue;
            }

            let text: String = spans.iter().map(|s| s.text.as_str()).collect();
            let text = text.trim().to_string();
            if text.is_empty() {
                continue;
            }

            let bbox = spans
                .iter()
                .skip(1)
                .fold(spans[0].bbox, |acc, s| acc.union(&s.bbox));

            lines.push(Line {
                text,
                font_size: spans[0].font_size,
                font_name: spans[0].font_name.clone(),
                page: page_num,
                bbox,
                page_width: page.width,
                spans,
            });
        }

        log::debug!("page {}: {} lines assembled", page_num, lines.len() - before);
    }

    lines
}
