//! Title selection.
//!
//! An ordered chain of candidate-producing strategies; the first non-empty
//! result wins. Authoring-tool metadata is trusted first, then a centered
//! bold line on page one, then the first long mostly-alphabetic page-one
//! line, and finally a literal placeholder.

use crate::config::OutlineConfig;
use crate::layout::line::Line;
use crate::utils::{alphabetic_ratio, safe_float_cmp};

/// Fallback title when every strategy comes up empty.
pub const UNTITLED: &str = "Untitled";

/// Pick the document title.
///
/// Priority chain, first match wins:
/// 1. A metadata title whose trimmed length exceeds
///    [`OutlineConfig::metadata_title_min_chars`], returned trimmed.
/// 2. Among page-1 lines of `pool` sorted by descending font size, the
///    first with a bold constituent span whose horizontal midpoint lies
///    within [`OutlineConfig::title_center_tolerance`] × page width of the
///    page center.
/// 3. Among page-1 lines in original order, the first longer than
///    [`OutlineConfig::long_line_min_chars`] with an alphabetic ratio above
///    [`OutlineConfig::title_alpha_ratio`].
/// 4. The literal [`UNTITLED`].
///
/// The pool is whichever line set the orchestrator decided on: the leveled
/// heading candidates when any exist, otherwise every assembled line.
pub fn select_title(
    metadata_title: Option<&str>,
    pool: &[&Line],
    config: &OutlineConfig,
) -> String {
    if let Some(title) = metadata_title {
        let trimmed = title.trim();
        if trimmed.chars().count() > config.metadata_title_min_chars {
            log::debug!("title from metadata");
            return trimmed.to_string();
        }
    }

    let page_one: Vec<&Line> = pool.iter().copied().filter(|l| l.page == 1).collect();

    if let Some(line) = centered_bold_line(&page_one, config) {
        log::debug!("title from centered bold line");
        return line.text.trim().to_string();
    }

    if let Some(line) = long_alphabetic_line(&page_one, config) {
        log::debug!("title from long alphabetic line");
        return line.text.trim().to_string();
    }

    UNTITLED.to_string()
}

/// The largest page-1 line that is bold and horizontally near the page
/// center. The sort is stable, so equal sizes keep reading order.
fn centered_bold_line<'a>(page_one: &[&'a Line], config: &OutlineConfig) -> Option<&'a Line> {
    let mut by_size: Vec<&Line> = page_one.to_vec();
    by_size.sort_by(|a, b| safe_float_cmp(b.font_size, a.font_size));

    by_size
        .into_iter()
        .find(|line| {
            let bold = line.spans.iter().any(|s| s.bold);
            let offset = (line.bbox.center_x() - line.page_width / 2.0).abs();
            bold && offset < line.page_width * config.title_center_tolerance
        })
}

/// The first page-1 line in original order that is long and mostly
/// alphabetic.
fn long_alphabetic_line<'a>(page_one: &[&'a Line], config: &OutlineConfig) -> Option<&'a Line> {
    page_one.iter().copied().find(|line| {
        line.text.chars().count() > config.long_line_min_chars
            && alphabetic_ratio(&line.text) > config.title_alpha_ratio
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::span::MergedSpan;

    fn mock_line(text: &str, size: f32, bold: bool, x0: f32, x1: f32, page: u32) -> Line {
        let bbox = Rect::from_points(x0, 100.0, x1, 100.0 + size);
        Line {
            text: text.to_string(),
            font_size: size,
            font_name: "Times".to_string(),
            page,
            bbox,
            page_width: 612.0,
            spans: vec![MergedSpan {
                text: text.to_string(),
                font_name: "Times".to_string(),
                font_size: size,
                bold,
                bbox,
            }],
        }
    }

    fn refs(lines: &[Line]) -> Vec<&Line> {
        lines.iter().collect()
    }

    #[test]
    fn test_metadata_title_wins_when_long_enough() {
        let lines = vec![mock_line("Centered Bold Title", 24.0, true, 200.0, 412.0, 1)];
        let title = select_title(
            Some("  A Sufficiently Long Title  "),
            &refs(&lines),
            &OutlineConfig::default(),
        );
        assert_eq!(title, "A Sufficiently Long Title");
    }

    #[test]
    fn test_short_metadata_title_skipped() {
        let lines = vec![mock_line("Centered Bold Title", 24.0, true, 200.0, 412.0, 1)];
        let title = select_title(Some("AB"), &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, "Centered Bold Title");
    }

    #[test]
    fn test_centered_bold_prefers_largest() {
        // Page center is 306; both are centered and bold, larger one wins
        let lines = vec![
            mock_line("Smaller Centered Bold", 18.0, true, 206.0, 406.0, 1),
            mock_line("Larger Centered Bold", 28.0, true, 206.0, 406.0, 1),
        ];
        let title = select_title(None, &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, "Larger Centered Bold");
    }

    #[test]
    fn test_off_center_bold_is_skipped() {
        // Midpoint at 100 is 206 units from center, past the 153 tolerance
        let lines = vec![
            mock_line("Margin Note Bold", 30.0, true, 50.0, 150.0, 1),
            mock_line("Centered Bold Title", 20.0, true, 206.0, 406.0, 1),
        ];
        let title = select_title(None, &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, "Centered Bold Title");
    }

    #[test]
    fn test_non_bold_falls_to_long_alphabetic_line() {
        let lines = vec![
            mock_line("short one", 14.0, false, 206.0, 406.0, 1),
            mock_line("A sufficiently long opening line of text", 12.0, false, 72.0, 540.0, 1),
        ];
        let title = select_title(None, &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, "A sufficiently long opening line of text");
    }

    #[test]
    fn test_long_line_requires_alphabetic_ratio() {
        let lines = vec![
            mock_line("0123456789 0123456789 0123456789", 12.0, false, 72.0, 540.0, 1),
            mock_line("The actual descriptive opening line", 12.0, false, 72.0, 540.0, 1),
        ];
        let title = select_title(None, &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, "The actual descriptive opening line");
    }

    #[test]
    fn test_untitled_when_no_strategy_matches() {
        let lines = vec![mock_line("short one", 12.0, false, 72.0, 140.0, 1)];
        let title = select_title(None, &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, UNTITLED);
    }

    #[test]
    fn test_only_page_one_lines_considered() {
        let lines = vec![
            mock_line("short one", 12.0, false, 72.0, 140.0, 1),
            mock_line("A Big Bold Centered Heading Later On", 30.0, true, 206.0, 406.0, 2),
        ];
        let title = select_title(None, &refs(&lines), &OutlineConfig::default());
        assert_eq!(title, UNTITLED);
    }

    #[test]
    fn test_empty_pool_yields_untitled() {
        let title = select_title(None, &[], &OutlineConfig::default());
        assert_eq!(title, UNTITLED);
    }
}
