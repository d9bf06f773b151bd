//! Interchange model for rendering-layer handoff.
//!
//! A rendering layer (out of scope for this crate) turns a document's raw
//! bytes into pages of visual lines, each line an ordered run of raw spans
//! with font and position metadata, and serializes the result as JSON in the
//! shape deserialized here. The pipeline consumes these types read-only.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Style-flag bitmask attached to raw spans by the rendering layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpanFlags: u32 {
        /// Bold glyphs
        const BOLD = 1 << 1;
    }
}

/// A contiguous run of text sharing one font, size, and style within a
/// single visual line. Produced by the rendering layer; immutable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    /// The text content of the run
    pub text: String,

    /// Font name/family
    pub font_name: String,

    /// Font size in page units
    pub font_size: f32,

    /// Style-flag bitmask; see [`SpanFlags`] for the known bits
    #[serde(default)]
    pub flags: u32,

    /// Bounding box as `[x0, y0, x1, y1]` in page coordinates
    pub bbox: [f32; 4],
}

impl RawSpan {
    /// Whether the style bitmask marks this span as bold.
    pub fn is_bold(&self) -> bool {
        SpanFlags::from_bits_truncate(self.flags).contains(SpanFlags::BOLD)
    }

    /// The span's bounding box as a [`Rect`].
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.bbox[0], self.bbox[1], self.bbox[2], self.bbox[3])
    }
}

/// One page of a document: dimensions plus its visual lines in encounter
/// order, each line an ordered sequence of raw spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// Page width in page units
    pub width: f32,

    /// Page height in page units
    pub height: f32,

    /// Visual lines, outer order top-to-bottom as encountered
    pub lines: Vec<Vec<RawSpan>>,
}

/// Optional document metadata carried alongside the pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Authoring-tool title, if any
    #[serde(default)]
    pub title: Option<String>,
}

/// A full document as handed over by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Document metadata, if the rendering layer extracted any
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,

    /// Pages in document order
    pub pages: Vec<PageInput>,
}

impl DocumentInput {
    /// The metadata title, if one is present and non-empty.
    pub fn metadata_title(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, flags: u32) -> RawSpan {
        RawSpan {
            text: text.to_string(),
            font_name: "Times".to_string(),
            font_size: 12.0,
            flags,
            bbox: [10.0, 20.0, 60.0, 32.0],
        }
    }

    #[test]
    fn test_bold_flag() {
        assert!(span("x", 2).is_bold());
        assert!(!span("x", 0).is_bold());
        // Unknown bits do not imply boldness
        assert!(!span("x", 4).is_bold());
        assert!(span("x", 6).is_bold());
    }

    #[test]
    fn test_span_rect() {
        let r = span("x", 0).rect();
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.bottom(), 32.0);
    }

    #[test]
    fn test_deserialize_document() {
        let json = r#"{
            "metadata": {"title": "A Report"},
            "pages": [{
                "width": 612.0,
                "height": 792.0,
                "lines": [[
                    {"text": "Hello", "font_name": "Times", "font_size": 12.0,
                     "flags": 2, "bbox": [1.0, 2.0, 3.0, 4.0]}
                ]]
            }]
        }"#;
        let doc: DocumentInput = serde_json::from_str(json).unwrap();
        assert_eq!(doc.metadata_title(), Some("A Report"));
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].lines[0][0].text, "Hello");
        assert!(doc.pages[0].lines[0][0].is_bold());
    }

    #[test]
    fn test_deserialize_without_metadata_or_flags() {
        let json = r#"{
            "pages": [{
                "width": 595.0,
                "height": 842.0,
                "lines": [[
                    {"text": "x", "font_name": "F", "font_size": 9.0,
                     "bbox": [0.0, 0.0, 5.0, 9.0]}
                ]]
            }]
        }"#;
        let doc: DocumentInput = serde_json::from_str(json).unwrap();
        assert_eq!(doc.metadata_title(), None);
        assert_eq!(doc.pages[0].lines[0][0].flags, 0);
    }

    #[test]
    fn test_empty_metadata_title_is_none() {
        let doc = DocumentInput {
            metadata: Some(DocumentMetadata {
                title: Some(String::new()),
            }),
            pages: vec![],
        };
        assert_eq!(doc.metadata_title(), None);
    }
}
