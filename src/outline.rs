//! Outline construction.
//!
//! Orchestrates the pipeline for one document: line assembly, body-style
//! inference, heading classification, level assignment, and title
//! selection, projected into the serializable result.

use crate::config::OutlineConfig;
use crate::error::Result;
use crate::layout::{
    assemble_lines, assign_levels, detect_body_style, is_heading_candidate, select_title,
    HeadingLevel, Line,
};
use crate::model::DocumentInput;
use serde::Serialize;

/// One accepted heading, projected for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    /// Hierarchy level, "H1" through "H3"
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,

    /// 1-based page number
    pub page: u32,
}

/// The derived structure of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentResult {
    /// Selected document title
    pub title: String,

    /// Accepted headings in reading order
    pub outline: Vec<OutlineEntry>,
}

/// Derive the title and heading outline of one document.
///
/// Returns `Ok(None)` when the document yields no lines at all — the
/// caller should skip output for it entirely. Every other outcome is a
/// [`DocumentResult`], possibly with an empty outline. The transformation
/// is a deterministic pure function of its input: identical inputs always
/// reproduce identical results.
///
/// # Errors
///
/// [`crate::Error::NoBodyStyle`] when no assembled line carries a usable
/// font size.
pub fn build_outline(
    doc: &DocumentInput,
    config: &OutlineConfig,
) -> Result<Option<DocumentResult>> {
    let lines = assemble_lines(doc, config);
    if lines.is_empty() {
        log::debug!("document yielded no lines");
        return Ok(None);
    }

    let body = detect_body_style(&lines)?;

    let candidates: Vec<Line> = lines
        .iter()
        .filter(|l| is_heading_candidate(l, &body, config))
        .cloned()
        .collect();
    let leveled = assign_levels(candidates);

    let outline: Vec<OutlineEntry> = leveled
        .iter()
        .map(|c| OutlineEntry {
            level: c.level,
            text: c.line.text.clone(),
            page: c.line.page,
        })
        .collect();

    let title = if leveled.is_empty() {
        select_title(doc.metadata_title(), &lines.iter().collect::<Vec<_>>(), config)
    } else {
        let pool: Vec<&Line> = leveled.iter().map(|c| &c.line).collect();
        select_title(doc.metadata_title(), &pool, config)
    };

    log::info!("derived {} outline entries, title {:?}", outline.len(), title);

    Ok(Some(DocumentResult { title, outline }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageInput, RawSpan};

    fn span(text: &str, size: f32, flags: u32, bbox: [f32; 4]) -> RawSpan {
        RawSpan {
            text: text.to_string(),
            font_name: "Times".to_string(),
            font_size: size,
            flags,
            bbox,
        }
    }

    fn one_page_doc(lines: Vec<Vec<RawSpan>>) -> DocumentInput {
        DocumentInput {
            metadata: None,
            pages: vec![PageInput {
                width: 612.0,
                height: 792.0,
                lines,
            }],
        }
    }

    #[test]
    fn test_empty_document_is_absent_not_empty_outline() {
        let doc = DocumentInput {
            metadata: None,
            pages: vec![],
        };
        let result = build_outline(&doc, &OutlineConfig::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_whitespace_only_document_is_absent() {
        let doc = one_page_doc(vec![vec![span("   ", 12.0, 0, [0.0, 0.0, 20.0, 12.0])]]);
        let result = build_outline(&doc, &OutlineConfig::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_headingless_document_keeps_empty_outline() {
        let mut lines = Vec::new();
        for i in 0..4 {
            let y = 100.0 + i as f32 * 20.0;
            lines.push(vec![span(
                "Plain body text without any heading styling here.",
                11.0,
                0,
                [72.0, y, 540.0, y + 11.0],
            )]);
        }
        let doc = one_page_doc(lines);
        let result = build_outline(&doc, &OutlineConfig::default())
            .unwrap()
            .unwrap();
        assert!(result.outline.is_empty());
        // Falls back to the long-alphabetic-line strategy over all lines
        assert_eq!(result.title, "Plain body text without any heading styling here.");
    }

    #[test]
    fn test_outline_preserves_reading_order() {
        let doc = DocumentInput {
            metadata: None,
            pages: vec![
                PageInput {
                    width: 612.0,
                    height: 792.0,
                    lines: vec![
                        vec![span("First Major Heading", 18.0, 2, [72.0, 80.0, 300.0, 98.0])],
                        vec![span(
                            "Body text that anchors the dominant style of it.",
                            11.0,
                            0,
                            [72.0, 110.0, 540.0, 121.0],
                        )],
                        vec![span(
                            "More body text keeps the baseline at eleven points.",
                            11.0,
                            0,
                            [72.0, 130.0, 540.0, 141.0],
                        )],
                        vec![span(
                            "A third paragraph makes the body style unambiguous.",
                            11.0,
                            0,
                            [72.0, 150.0, 540.0, 161.0],
                        )],
                    ],
                },
                PageInput {
                    width: 612.0,
                    height: 792.0,
                    lines: vec![vec![span(
                        "Second Major Heading",
                        18.0,
                        2,
                        [72.0, 80.0, 300.0, 98.0],
                    )]],
                },
            ],
        };

        let result = build_outline(&doc, &OutlineConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(result.outline.len(), 2);
        assert_eq!(result.outline[0].text, "First Major Heading");
        assert_eq!(result.outline[0].page, 1);
        assert_eq!(result.outline[1].text, "Second Major Heading");
        assert_eq!(result.outline[1].page, 2);
        assert_eq!(result.outline[0].level, HeadingLevel::H1);
    }

    #[test]
    fn test_result_serialization_shape() {
        let result = DocumentResult {
            title: "A Title".to_string(),
            outline: vec![OutlineEntry {
                level: HeadingLevel::H2,
                text: "1.1 Scope".to_string(),
                page: 3,
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "A Title",
                "outline": [
                    {"level": "H2", "text": "1.1 Scope", "page": 3}
                ]
            })
        );
    }
}
