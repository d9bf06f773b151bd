//! # doc_outline
//!
//! Derive a document's semantic structure — a title and a hierarchical
//! heading outline — from a flat sequence of positioned text lines.
//!
//! The crate consumes the page dumps a rendering layer produces (pages of
//! visual lines, each line an ordered run of raw spans with font and
//! bounding-box metadata) and recovers structure purely from geometric and
//! stylistic signals: font size, font family, boldness, line width, page
//! width. No authoring-tool structure tags are required.
//!
//! ## Pipeline
//!
//! 1. **Span merging** — adjacent compatible fragments within a visual line
//!    are coalesced into merged spans with an accumulated boldness flag.
//! 2. **Line assembly** — each visual line becomes a [`layout::Line`] with a
//!    dominant font style, concatenated text, and page metadata.
//! 3. **Body style detection** — the most frequent (size, font) pair across
//!    the document becomes the "normal text" baseline.
//! 4. **Heading classification** — a conjunctive typographic heuristic marks
//!    lines that look like headings rather than wrapped body text.
//! 5. **Level assignment** — candidate font sizes rank into H1–H3, with
//!    explicit numeric prefixes ("2.3.1") overriding the ranking.
//! 6. **Title selection** — a priority chain over document metadata and
//!    first-page line heuristics.
//!
//! ## Quick Start
//!
//! ```
//! use doc_outline::{build_outline, DocumentInput, OutlineConfig};
//!
//! # fn main() -> doc_outline::Result<()> {
//! let json = r#"{
//!     "metadata": {"title": "Annual Engineering Report"},
//!     "pages": [{
//!         "width": 612.0,
//!         "height": 792.0,
//!         "lines": [
//!             [{"text": "1. Introduction", "font_name": "Helvetica-Bold",
//!               "font_size": 18.0, "flags": 2, "bbox": [72.0, 90.0, 260.0, 110.0]}],
//!             [{"text": "Body paragraph text that wraps across the page width.",
//!               "font_name": "Helvetica", "font_size": 11.0, "flags": 0,
//!               "bbox": [72.0, 120.0, 540.0, 132.0]}],
//!             [{"text": "A second paragraph anchors the dominant body style.",
//!               "font_name": "Helvetica", "font_size": 11.0, "flags": 0,
//!               "bbox": [72.0, 140.0, 540.0, 152.0]}]
//!         ]
//!     }]
//! }"#;
//!
//! let doc: DocumentInput = serde_json::from_str(json).unwrap();
//! let result = build_outline(&doc, &OutlineConfig::default())?;
//!
//! let result = result.expect("document has lines");
//! assert_eq!(result.title, "Annual Engineering Report");
//! assert_eq!(result.outline[0].text, "1. Introduction");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometric primitives
pub mod geometry;

// Pipeline configuration
pub mod config;

// Interchange model (rendering-layer input)
pub mod model;

// Typographic line analysis
pub mod layout;

// Outline construction
pub mod outline;

// Batch directory processing
pub mod batch;

// Re-exports
pub use config::OutlineConfig;
pub use error::{Error, Result};
pub use model::{DocumentInput, DocumentMetadata, PageInput, RawSpan, SpanFlags};
pub use outline::{build_outline, DocumentResult, OutlineEntry};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on a NaN comparison.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap(),
        }
    }

    /// Ratio of alphabetic characters over the total character count.
    ///
    /// Counted over characters, not bytes, so multi-byte scripts weigh the
    /// same as ASCII.
    pub fn alphabetic_ratio(text: &str) -> f32 {
        let total = text.chars().count();
        let alphabetic = text.chars().filter(|c| c.is_alphabetic()).count();
        alphabetic as f32 / total.max(1) as f32
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }

        #[test]
        fn test_alphabetic_ratio() {
            assert_eq!(alphabetic_ratio("abcd"), 1.0);
            assert_eq!(alphabetic_ratio("ab12"), 0.5);
            assert_eq!(alphabetic_ratio(""), 0.0);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
