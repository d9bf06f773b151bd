//! Configuration for the outline extraction pipeline.
//!
//! Every threshold the heuristics use lives here, grouped by stage. The
//! defaults are tuned for single-column documents in the 9–14pt body range
//! (reports, papers, manuals) and are what the batch driver ships with.

/// Thresholds for the outline extraction pipeline.
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    // --- Span merging ---
    /// Maximum font-size difference between spans that still merge.
    pub merge_size_tolerance: f32,

    /// Maximum horizontal gap (page units) between span boxes that still merge.
    pub merge_gap: f32,

    // --- Heading classification ---
    /// Minimum character count for a line to be considered a heading.
    pub min_heading_chars: usize,

    /// Minimum ratio of alphabetic characters in a heading candidate.
    pub min_alpha_ratio: f32,

    /// Maximum line width as a fraction of page width; wider lines are
    /// treated as wrapped body text.
    pub max_width_ratio: f32,

    /// Font size as a multiple of the body size above which a line counts
    /// as "large".
    pub large_size_ratio: f32,

    /// Font size multiple above which a line counts as a heading even
    /// without bold styling.
    pub emphatic_size_ratio: f32,

    // --- Title selection ---
    /// Minimum trimmed character count for a metadata title to be trusted.
    pub metadata_title_min_chars: usize,

    /// Maximum distance of a title line's horizontal midpoint from the page
    /// center, as a fraction of page width.
    pub title_center_tolerance: f32,

    /// Minimum character count for the long-line title fallback.
    pub long_line_min_chars: usize,

    /// Minimum alphabetic ratio for the long-line title fallback.
    pub title_alpha_ratio: f32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            merge_size_tolerance: 0.1,
            merge_gap: 10.0,
            min_heading_chars: 10,
            min_alpha_ratio: 0.6,
            max_width_ratio: 0.9,
            large_size_ratio: 1.1,
            emphatic_size_ratio: 1.2,
            metadata_title_min_chars: 10,
            title_center_tolerance: 0.25,
            long_line_min_chars: 20,
            title_alpha_ratio: 0.5,
        }
    }
}
