//! Typographic analysis of positioned text lines.
//!
//! This module holds the per-stage building blocks of the pipeline:
//! - Span coalescing (raw fragments → merged spans)
//! - Line assembly (merged spans → canonical reading-order lines)
//! - Body-style inference (the "normal text" baseline)
//! - Heading candidacy classification
//! - Hierarchy level assignment
//! - Title selection

pub mod body_style;
pub mod heading_detector;
pub mod level_assigner;
pub mod line;
pub mod span;
pub mod title;

// Re-export main types
pub use body_style::{detect_body_style, BodyStyle};
pub use heading_detector::is_heading_candidate;
pub use level_assigner::{assign_levels, HeadingCandidate, HeadingLevel};
pub use line::{assemble_lines, Line};
pub use span::{merge_spans, MergedSpan};
pub use title::select_title;
