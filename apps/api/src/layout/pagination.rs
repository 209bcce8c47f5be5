//! Page count and page-break positions from a measured content height.
//!
//! Pure arithmetic over one input, the natural content height `H` in px.
//! With content-scale `s` the scaled height is `T = H * s / 96` inches.
//! Pages are 11in tall and the preview draws a 32px gap between them, so
//! every page after the first advances by `step = 11in - gap`.
//!
//! - `T <= 11`: one page, no breaks.
//! - otherwise the first break sits at 11in and further breaks follow every
//!   `step` while they stay strictly below `T - gap`. The page count is one
//!   more than the number of breaks, so exactly 22in of content is two
//!   pages, not three.
//!
//! An unmeasured height (missing, zero, negative or NaN) reports a single
//! page with `measured: false` until a real measurement arrives.

use serde::{Deserialize, Serialize};

use super::measure::ContentMeasurer;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

pub const PX_PER_IN: f64 = 96.0;
pub const PAGE_WIDTH_IN: f64 = 8.5;
pub const PAGE_HEIGHT_IN: f64 = 11.0;
pub const PAGE_GAP_PX: f64 = 32.0;
pub const PAGE_GAP_IN: f64 = PAGE_GAP_PX / PX_PER_IN;
/// Distance between consecutive breaks after the first.
pub const PAGE_STEP_IN: f64 = PAGE_HEIGHT_IN - PAGE_GAP_IN;

const EPSILON: f64 = 1e-9;

/// Pagination figures for one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationReport {
    pub content_height_px: f64,
    pub scaled_height_in: f64,
    pub total_pages: usize,
    /// Break marker offsets from the top of the scaled content, in inches.
    pub break_positions_in: Vec<f64>,
    /// False while no usable measurement exists.
    pub measured: bool,
}

impl PaginationReport {
    pub fn unmeasured() -> Self {
        Self {
            content_height_px: 0.0,
            scaled_height_in: 0.0,
            total_pages: 1,
            break_positions_in: Vec::new(),
            measured: false,
        }
    }
}

impl Default for PaginationReport {
    fn default() -> Self {
        Self::unmeasured()
    }
}

/// Scaled height in inches.
pub fn scaled_height_in(content_height_px: f64, scale: f64) -> f64 {
    content_height_px * scale / PX_PER_IN
}

pub fn break_positions(scaled_height_in: f64) -> Vec<f64> {
    if !scaled_height_in.is_finite() || scaled_height_in <= PAGE_HEIGHT_IN {
        return Vec::new();
    }
    let limit = scaled_height_in - PAGE_GAP_IN - EPSILON;
    let mut breaks = vec![PAGE_HEIGHT_IN];
    let mut next = PAGE_HEIGHT_IN + PAGE_STEP_IN;
    while next < limit {
        breaks.push(next);
        next += PAGE_STEP_IN;
    }
    breaks
}

pub fn total_pages(scaled_height_in: f64) -> usize {
    if !scaled_height_in.is_finite() || scaled_height_in <= PAGE_HEIGHT_IN {
        return 1;
    }
    let extra = ((scaled_height_in - PAGE_HEIGHT_IN - PAGE_GAP_IN) / PAGE_STEP_IN - EPSILON).ceil();
    1 + extra.max(1.0) as usize
}

/// Vertical shift, in unscaled inches, that brings page `index` (0-based)
/// into a one-page viewport in separate-pages mode.
pub fn page_offset_in(index: usize, scale: f64) -> f64 {
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    index as f64 * PAGE_HEIGHT_IN / scale
}

/// Computes the report for a natural height and content-scale.
pub fn paginate(content_height_px: Option<f64>, scale: f64) -> PaginationReport {
    let Some(height) = content_height_px.filter(|h| h.is_finite() && *h > 0.0) else {
        return PaginationReport::unmeasured();
    };
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    let scaled = scaled_height_in(height, scale);
    PaginationReport {
        content_height_px: height,
        scaled_height_in: scaled,
        total_pages: total_pages(scaled),
        break_positions_in: break_positions(scaled),
        measured: true,
    }
}

pub fn paginate_with(measurer: &dyn ContentMeasurer, scale: f64) -> PaginationReport {
    paginate(measurer.natural_height_px(), scale)
}

// ────────────────────────────────────────────────────────────────────────────
// Page navigation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewMode {
    /// One fixed-height viewport per page.
    #[default]
    Pages,
    /// One scrolling column with break markers.
    Continuous,
}

/// Tracks the active page of the interactive preview.
///
/// Pages are 1-based and always within `[1, total_pages]`; every change to
/// the page count re-clamps the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator {
    current: usize,
    total: usize,
    mode: PreviewMode,
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageNavigator {
    pub fn new() -> Self {
        Self {
            current: 1,
            total: 1,
            mode: PreviewMode::Pages,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current.saturating_add(1))
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn go_to(&mut self, page: usize) -> usize {
        self.current = page.clamp(1, self.total);
        self.current
    }

    /// A page viewport (0-based) scrolled into view. Only separate-pages
    /// mode reports visibility; continuous mode has no page viewports.
    pub fn on_page_visible(&mut self, index: usize) -> usize {
        if self.mode == PreviewMode::Pages {
            self.go_to(index.saturating_add(1));
        }
        self.current
    }

    /// Switching modes keeps the active page.
    pub fn set_mode(&mut self, mode: PreviewMode) {
        self.mode = mode;
        self.clamp();
    }

    pub fn on_measured(&mut self, report: &PaginationReport) {
        self.total = report.total_pages.max(1);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.current = self.current.clamp(1, self.total.max(1));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::FixedMeasurer;

    #[test]
    fn test_exactly_one_page_of_content() {
        let report = paginate(Some(1056.0), 1.0);
        assert_eq!(report.total_pages, 1);
        assert!(report.break_positions_in.is_empty());
        assert!(report.measured);
        assert!((report.scaled_height_in - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_exactly_two_pages_of_content() {
        let report = paginate(Some(2112.0), 1.0);
        assert_eq!(report.total_pages, 2);
        assert_eq!(report.break_positions_in, vec![11.0]);
    }

    #[test]
    fn test_1800px_is_two_pages_with_one_break_at_11in() {
        let report = paginate(Some(1800.0), 1.0);
        assert_eq!(report.total_pages, 2);
        assert_eq!(report.break_positions_in, vec![11.0]);
    }

    #[test]
    fn test_breaks_advance_by_page_minus_gap() {
        let report = paginate(Some(96.0 * 40.0), 1.0);
        assert_eq!(report.total_pages, 4);
        let breaks = &report.break_positions_in;
        assert_eq!(breaks.len(), 3);
        assert!((breaks[1] - (11.0 + PAGE_STEP_IN)).abs() < 1e-9);
        assert!((breaks[2] - (11.0 + 2.0 * PAGE_STEP_IN)).abs() < 1e-9);
    }

    #[test]
    fn test_page_count_matches_break_count() {
        for px in (900..12_000).step_by(37) {
            let report = paginate(Some(px as f64), 1.0);
            let expected = if report.break_positions_in.is_empty() {
                1
            } else {
                report.break_positions_in.len() + 1
            };
            assert_eq!(report.total_pages, expected, "height {px}px");
        }
    }

    #[test]
    fn test_growing_scale_never_reduces_pages() {
        for px in [800.0, 1056.0, 1500.0, 2112.0, 3000.0, 5000.0] {
            let mut last = 0;
            for step in 0..=30 {
                let scale = 0.85 + step as f64 * 0.01;
                let pages = paginate(Some(px), scale).total_pages;
                assert!(pages >= last, "{px}px at scale {scale}");
                last = pages;
            }
        }
    }

    #[test]
    fn test_unmeasured_heights_report_single_page() {
        for h in [None, Some(0.0), Some(-10.0), Some(f64::NAN), Some(f64::INFINITY)] {
            let report = paginate(h, 1.0);
            assert_eq!(report, PaginationReport::unmeasured());
            assert_eq!(report.total_pages, 1);
        }
        assert_eq!(
            paginate_with(&FixedMeasurer(None), 1.0),
            PaginationReport::unmeasured()
        );
    }

    #[test]
    fn test_invalid_scale_is_treated_as_one() {
        assert_eq!(paginate(Some(1800.0), 0.0), paginate(Some(1800.0), 1.0));
        assert_eq!(paginate(Some(1800.0), f64::NAN), paginate(Some(1800.0), 1.0));
    }

    #[test]
    fn test_page_offset_divides_by_scale() {
        assert_eq!(page_offset_in(0, 1.0), 0.0);
        assert_eq!(page_offset_in(2, 1.0), 22.0);
        assert!((page_offset_in(1, 1.1) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(paginate(Some(1800.0), 1.0)).unwrap();
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["breakPositionsIn"][0], 11.0);
        assert_eq!(json["measured"], true);
        assert!(json.get("contentHeightPx").is_some());
    }

    #[test]
    fn test_navigator_is_bounded() {
        let mut nav = PageNavigator::new();
        assert_eq!(nav.next(), 1);
        assert_eq!(nav.prev(), 1);

        nav.on_measured(&paginate(Some(96.0 * 40.0), 1.0));
        assert_eq!(nav.total(), 4);
        assert_eq!(nav.next(), 2);
        assert_eq!(nav.go_to(9), 4);
        assert!(!nav.has_next());
        assert_eq!(nav.go_to(0), 1);
        assert!(!nav.has_prev());
    }

    #[test]
    fn test_navigator_reclamps_when_pages_shrink() {
        let mut nav = PageNavigator::new();
        nav.on_measured(&paginate(Some(96.0 * 40.0), 1.0));
        nav.go_to(4);
        nav.on_measured(&paginate(Some(1800.0), 1.0));
        assert_eq!(nav.current(), 2);
        nav.on_measured(&PaginationReport::unmeasured());
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_visibility_only_tracked_in_pages_mode() {
        let mut nav = PageNavigator::new();
        nav.on_measured(&paginate(Some(96.0 * 40.0), 1.0));
        assert_eq!(nav.on_page_visible(2), 3);

        nav.set_mode(PreviewMode::Continuous);
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.on_page_visible(0), 3);

        nav.set_mode(PreviewMode::Pages);
        assert_eq!(nav.on_page_visible(10), 4);
    }
}
