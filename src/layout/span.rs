//! Span coalescing.
//!
//! Rendering layers often split one visual run of text into several raw
//! spans (kerning adjustments, ligature boundaries, OCR artifacts). This
//! stage stitches adjacent compatible fragments back together so the rest
//! of the pipeline sees one span per styled run.

use crate::config::OutlineConfig;
use crate::geometry::Rect;
use crate::model::RawSpan;

/// The coalesced result of one or more raw spans within a visual line.
///
/// Immutable after construction: boldness and the bounding box accumulate
/// only while the span is the open tail of the merge pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSpan {
    /// Concatenated text of the constituent spans
    pub text: String,

    /// Font name, taken from the first constituent
    pub font_name: String,

    /// Font size, taken from the first constituent
    pub font_size: f32,

    /// True if any constituent was marked bold
    pub bold: bool,

    /// Coordinate-wise union of the constituent boxes
    pub bbox: Rect,
}

/// Coalesce adjacent compatible raw spans into merged spans.
///
/// Successive spans merge into the open span while they share a font name,
/// differ in size by less than [`OutlineConfig::merge_size_tolerance`], and
/// sit within [`OutlineConfig::merge_gap`] horizontal units of the open
/// span's right edge. Any mismatch closes the open span and starts a new
/// one. No span is dropped; an empty input yields an empty output.
///
/// # Examples
///
/// ```
/// use doc_outline::layout::merge_spans;
/// use doc_outline::{OutlineConfig, RawSpan};
///
/// let spans = vec![
///     RawSpan {
///         text: "Intro".to_string(),
///         font_name: "Times".to_string(),
///         font_size: 14.0,
///         flags: 0,
///         bbox: [10.0, 10.0, 50.0, 24.0],
///     },
///     RawSpan {
///         text: "duction".to_string(),
///         font_name: "Times".to_string(),
///         font_size: 14.0,
///         flags: 2,
///         bbox: [51.0, 10.0, 110.0, 24.0],
///     },
/// ];
///
/// let merged = merge_spans(&spans, &OutlineConfig::default());
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].text, "Introduction");
/// assert!(merged[0].bold);
/// ```
pub fn merge_spans(spans: &[RawSpan], config: &OutlineConfig) -> Vec<MergedSpan> {
    let mut merged: Vec<MergedSpan> = Vec::with_capacity(spans.len());

    for span in spans {
        let bold = span.is_bold();
        let bbox = span.rect();

        if let Some(open) = merged.last_mut() {
            if open.font_name == span.font_name
                && (span.font_size - open.font_size).abs() < config.merge_size_tolerance
                && (bbox.left() - open.bbox.right()).abs() < config.merge_gap
            {
                open.text.push_str(&span.text);
                open.bbox = open.bbox.union(&bbox);
                open.bold = open.bold || bold;
                continue;
            }
        }

        merged.push(MergedSpan {
            text: span.text.clone(),
            font_name: span.font_name.clone(),
            font_size: span.font_size,
            bold,
            bbox,
        });
    }

    merged
}
