//! Interactive preview and print documents.
//!
//! [`build_document`] renders the template once. The preview and the print
//! target both embed clones of that one tree and differ only in the chrome
//! around it: the preview adds zoom and either per-page viewports or break
//! markers, while the print target sits at native size and flows across
//! natural page boundaries.

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::pagination::{page_offset_in, PAGE_HEIGHT_IN, PAGE_WIDTH_IN};
use crate::layout::{
    paginate_with, ContentMeasurer, FixedMeasurer, HeadlessMeasurer, PageNavigator,
    PaginationReport, PreviewMode,
};
use crate::models::resume::ResumeData;
use crate::models::settings::ResumeSettings;
use crate::render::node::escape;
use crate::render::{el, Element, Node, RenderContext};
use crate::templates::{self, TemplateInfo};

pub const ZOOM_RANGE: (f64, f64) = (0.5, 2.0);
pub const DEFAULT_ZOOM: f64 = 0.9;
const FOOTER_SEPARATOR: &str = " · ";
/// Distance from a page's bottom edge to its footer baseline box.
const FOOTER_INSET_IN: f64 = 0.25;

/// How the interactive preview should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    #[serde(default)]
    pub zoom: Option<f64>,
    #[serde(default)]
    pub mode: PreviewMode,
    /// 1-based page to show first in separate-pages mode.
    #[serde(default)]
    pub page: Option<usize>,
    /// Height reported by the browser; the headless estimate is used without it.
    #[serde(default)]
    pub content_height_px: Option<f64>,
}

impl ViewOptions {
    pub fn zoom(&self) -> f64 {
        match self.zoom {
            Some(z) if z.is_finite() => z.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1),
            _ => DEFAULT_ZOOM,
        }
    }
}

/// One render of `(data, settings, template)`.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub template: TemplateInfo,
    pub settings: ResumeSettings,
    pub tree: Node,
    pub title: String,
    footer: Footer,
}

#[derive(Debug, Clone, Default)]
struct Footer {
    name: Option<String>,
    email: Option<String>,
    page_numbers: bool,
}

impl Footer {
    fn of(data: &ResumeData, settings: &ResumeSettings) -> Self {
        let present = |enabled: bool, value: String| {
            (enabled && !value.trim().is_empty()).then(|| value.trim().to_string())
        };
        Self {
            name: present(settings.show_footer_name, data.personal_info.full_name()),
            email: present(settings.show_footer_email, data.personal_info.email.clone()),
            page_numbers: settings.show_page_numbers,
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && !self.page_numbers
    }

    fn fixed_parts(&self) -> Vec<&str> {
        self.name.iter().chain(self.email.iter()).map(String::as_str).collect()
    }

    /// Footer line for one preview page.
    fn line(&self, page: usize, total: usize) -> String {
        let mut parts: Vec<String> = self.fixed_parts().into_iter().map(str::to_string).collect();
        if self.page_numbers {
            parts.push(format!("Page {page} of {total}"));
        }
        parts.join(FOOTER_SEPARATOR)
    }
}

/// A rendered interactive preview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub html: String,
    pub pagination: PaginationReport,
    pub active_page: usize,
    pub zoom: f64,
    pub mode: PreviewMode,
}

/// Renders the document tree for a snapshot. Missing or unknown template
/// ids render with `fallback_id`.
pub fn build_document(
    data: &ResumeData,
    template_id: Option<&str>,
    fallback_id: &str,
) -> RenderedDocument {
    let settings = data.resolved_settings();
    let template = templates::resolve_or(template_id, fallback_id);
    let tree = template.render(&RenderContext::new(data, &settings));
    let name = data.personal_info.full_name();
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };
    let footer = Footer::of(data, &settings);
    RenderedDocument {
        template: *template.info(),
        settings,
        tree,
        title,
        footer,
    }
}

impl RenderedDocument {
    pub fn content_scale(&self) -> f64 {
        self.settings.content_scale
    }

    /// Pagination from a browser-reported height, or the headless estimate
    /// when none is given.
    pub fn paginate(&self, reported_height_px: Option<f64>) -> PaginationReport {
        let scale = self.content_scale();
        let reported = FixedMeasurer(reported_height_px);
        let report = if reported.natural_height_px().is_some() {
            paginate_with(&reported, scale)
        } else {
            paginate_with(&HeadlessMeasurer::new(&self.tree, scale), scale)
        };
        debug!(
            template = self.template.id,
            pages = report.total_pages,
            browser_measured = reported_height_px.is_some(),
            "paginated document"
        );
        report
    }

    /// Full HTML page with the interactive preview and the hidden print target.
    pub fn preview(&self, view: &ViewOptions) -> Preview {
        let pagination = self.paginate(view.content_height_px);
        let mut nav = PageNavigator::new();
        nav.set_mode(view.mode);
        nav.on_measured(&pagination);
        if let Some(page) = view.page {
            nav.go_to(page);
        }
        let zoom = view.zoom();

        let surface = match nav.mode() {
            PreviewMode::Pages => self.page_viewports(&nav),
            PreviewMode::Continuous => self.continuous(&pagination),
        };
        let shell = el("div")
            .class("preview-shell")
            .attr("data-mode", mode_name(nav.mode()))
            .attr("data-total-pages", nav.total().to_string())
            .attr("data-active-page", nav.current().to_string())
            .attr("data-zoom", zoom.to_string())
            .child(
                el("div")
                    .class("preview-zoom")
                    .css("transform", format!("scale({zoom})"))
                    .css("transform-origin", "top center")
                    .child(surface),
            );
        let print = self.print_target(&pagination).class("is-offscreen");

        let html = document_html(&self.title, &[shell.into(), print.into()]);
        Preview {
            html,
            pagination,
            active_page: nav.current(),
            zoom,
            mode: nav.mode(),
        }
    }

    /// HTML holding only the print target, visible on screen. Footers are
    /// placed from the same pagination the preview uses.
    pub fn print_html(&self, reported_height_px: Option<f64>) -> String {
        let pagination = self.paginate(reported_height_px);
        document_html(&self.title, &[self.print_target(&pagination).into()])
    }

    /// Applies content-scale to `content`, widening its box and the page
    /// height variable so the scaled result still spans one page width.
    fn scale_wrapper(&self, content: impl Into<Node>) -> Element {
        let s = self.content_scale();
        el("div")
            .class("content-scale")
            .css("--resume-page-height", format!("{}in", PAGE_HEIGHT_IN / s))
            .css("width", format!("calc(100% / {s})"))
            .css("transform", format!("scale({s})"))
            .css("transform-origin", "top left")
            .child(content)
    }

    fn scaled_content(&self) -> Element {
        self.scale_wrapper(self.tree.clone())
    }

    fn page_viewports(&self, nav: &PageNavigator) -> Node {
        let total = nav.total();
        let scale = self.content_scale();
        let pages = (0..total).map(|i| {
            let number = i + 1;
            let slice = el("div")
                .class("page-slice")
                .css("transform", format!("translateY(-{}in)", page_offset_in(i, scale)))
                .child(self.tree.clone());
            let mut viewport = el("div")
                .class("preview-page")
                .attr("data-page", number.to_string())
                .css("position", "relative")
                .css("width", format!("{PAGE_WIDTH_IN}in"))
                .css("height", format!("{PAGE_HEIGHT_IN}in"))
                .css("overflow", "hidden")
                .child(self.scale_wrapper(slice));
            if number == nav.current() {
                viewport = viewport.class("is-active");
            }
            if !self.footer.is_empty() {
                viewport = viewport.child(
                    el("div")
                        .class("page-footer")
                        .text(self.footer.line(number, total)),
                );
            }
            viewport
        });
        el("div").class("preview-stack").children(pages).into()
    }

    fn continuous(&self, pagination: &PaginationReport) -> Node {
        let markers = pagination
            .break_positions_in
            .iter()
            .enumerate()
            .map(|(i, top)| {
                el("div")
                    .class("page-break-marker")
                    .attr("data-page", (i + 2).to_string())
                    .css("top", format!("{top}in"))
                    .child(el("span").class("page-break-label").text(format!("Page {}", i + 2)))
            });
        el("div")
            .class("preview-continuous")
            .css("width", format!("{PAGE_WIDTH_IN}in"))
            .child(self.scaled_content())
            .children(markers)
            .into()
    }

    /// Native-size content on zero-margin letter sheets. Footers are
    /// overlaid at each sheet's bottom edge and take no flow height, so
    /// every printed sheet holds the same 11in the preview assumes.
    fn print_target(&self, pagination: &PaginationReport) -> Element {
        let target = el("div")
            .class("print-target")
            .attr("data-template", self.template.id)
            .css("width", format!("{PAGE_WIDTH_IN}in"))
            .child(self.scaled_content());
        if self.footer.is_empty() {
            return target;
        }
        let total = pagination.total_pages.max(1);
        target.children((1..=total).map(|number| {
            el("div")
                .class("page-footer")
                .class("print-page-footer")
                .attr("data-page", number.to_string())
                .css("top", format!("{}in", number as f64 * PAGE_HEIGHT_IN - FOOTER_INSET_IN))
                .text(self.footer.line(number, total))
        }))
    }
}

fn mode_name(mode: PreviewMode) -> &'static str {
    match mode {
        PreviewMode::Pages => "pages",
        PreviewMode::Continuous => "continuous",
    }
}

const SHELL_CSS: &str = "\
body { margin: 0; background: #e5e7eb; }
.preview-shell { display: flex; justify-content: center; padding: 32px 0; }
.preview-page, .preview-continuous { background: #ffffff; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2); }
.preview-page + .preview-page { margin-top: 32px; }
.preview-continuous { position: relative; }
.page-break-marker { position: absolute; left: 0; right: 0; height: 0; border-top: 2px dashed #9ca3af; pointer-events: none; }
.page-break-label { position: absolute; right: 8px; top: 2px; font: 600 10px sans-serif; color: #6b7280; }
.page-footer { position: absolute; left: 0; right: 0; bottom: 0.25in; text-align: center; font: 8pt sans-serif; color: #9ca3af; }
.print-target { position: relative; }
.print-page-footer { bottom: auto; transform: translateY(-100%); }
.print-target.is-offscreen { position: absolute; left: -10000px; top: 0; opacity: 0; pointer-events: none; }
@page { size: letter; margin: 0; }
@media print {
  body { background: #ffffff; }
  body > :not(.print-target) { display: none !important; }
  .print-target, .print-target.is-offscreen { position: relative; left: auto; opacity: 1; }
  .print-target * { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
}
";

fn document_html(title: &str, body: &[Node]) -> String {
    let mut html = format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title><style>{SHELL_CSS}</style></head><body>",
        escape(title)
    );
    for node in body {
        html.push_str(&node.to_html());
    }
    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, Skill};
    use crate::templates::DEFAULT_TEMPLATE_ID;

    fn sample() -> ResumeData {
        let mut data = ResumeData::blank("ada@example.com");
        data.personal_info.first_name = "Ada".into();
        data.personal_info.last_name = "Lovelace".into();
        for i in 0..3 {
            data.experience.push(Experience {
                id: format!("e{i}"),
                position: format!("Engineer {i}"),
                company: "Analytical Engines".into(),
                ..Experience::default()
            });
        }
        for i in 0..2 {
            data.education.push(Education {
                id: format!("d{i}"),
                school: format!("School {i}"),
                ..Education::default()
            });
        }
        for i in 0..8 {
            data.skills.push(Skill {
                id: format!("s{i}"),
                name: format!("Skill {i}"),
                level: None,
            });
        }
        data
    }

    fn with_settings(mut data: ResumeData, json: &str) -> ResumeData {
        data.settings = Some(serde_json::from_str(json).unwrap());
        data
    }

    #[test]
    fn test_end_to_end_two_pages_with_one_marker() {
        let doc = build_document(&sample(), Some("modern"), DEFAULT_TEMPLATE_ID);
        let preview = doc.preview(&ViewOptions {
            mode: PreviewMode::Continuous,
            content_height_px: Some(1800.0),
            ..ViewOptions::default()
        });
        assert_eq!(preview.pagination.total_pages, 2);
        assert_eq!(preview.pagination.break_positions_in, vec![11.0]);
        assert_eq!(preview.html.matches("class=\"page-break-marker\"").count(), 1);
        assert!(preview.html.contains("top: 11in;"));
    }

    #[test]
    fn test_preview_and_print_embed_the_same_tree() {
        let data = with_settings(sample(), r#"{"contentScale": 0.9}"#);
        let doc = build_document(&data, Some("corporate"), DEFAULT_TEMPLATE_ID);
        let tree_html = doc.tree.to_html();
        let preview = doc.preview(&ViewOptions::default());
        let print = doc.print_html(None);
        assert!(preview.html.contains(&tree_html));
        assert!(print.contains(&tree_html));
        // Both surfaces apply the same content-scale.
        assert!(print.contains("transform: scale(0.9);"));
        assert!(print.contains("--resume-page-height: "));
    }

    #[test]
    fn test_pages_mode_shifts_each_page_by_page_height_over_scale() {
        let data = with_settings(sample(), r#"{"contentScale": 1.1}"#);
        let doc = build_document(&data, None, DEFAULT_TEMPLATE_ID);
        let preview = doc.preview(&ViewOptions {
            content_height_px: Some(96.0 * 30.0),
            ..ViewOptions::default()
        });
        let pages = preview.pagination.total_pages;
        assert_eq!(preview.html.matches("class=\"preview-page").count(), pages);
        let offset = page_offset_in(1, 1.1);
        assert!(preview.html.contains(&format!("translateY(-{offset}in)")));
    }

    #[test]
    fn test_print_target_is_offscreen_in_preview_only() {
        let doc = build_document(&sample(), None, DEFAULT_TEMPLATE_ID);
        let preview = doc.preview(&ViewOptions::default());
        assert!(preview.html.contains("class=\"print-target is-offscreen\""));
        assert!(preview.html.contains("left: -10000px"));
        assert!(preview.html.contains("@media print"));
        let print = doc.print_html(None);
        assert!(!print.contains("class=\"print-target is-offscreen\""));
        assert!(!print.contains("class=\"preview-shell\""));
    }

    #[test]
    fn test_zoom_is_clamped_and_independent_of_scale() {
        assert_eq!(ViewOptions::default().zoom(), DEFAULT_ZOOM);
        let view = |z: f64| ViewOptions {
            zoom: Some(z),
            ..ViewOptions::default()
        };
        assert_eq!(view(5.0).zoom(), 2.0);
        assert_eq!(view(0.1).zoom(), 0.5);
        assert_eq!(view(f64::NAN).zoom(), DEFAULT_ZOOM);

        let doc = build_document(&sample(), None, DEFAULT_TEMPLATE_ID);
        let a = doc.preview(&view(0.5));
        let b = doc.preview(&view(2.0));
        assert_eq!(a.pagination, b.pagination);
    }

    #[test]
    fn test_requested_page_is_clamped() {
        let doc = build_document(&sample(), None, DEFAULT_TEMPLATE_ID);
        let preview = doc.preview(&ViewOptions {
            page: Some(7),
            content_height_px: Some(1800.0),
            ..ViewOptions::default()
        });
        assert_eq!(preview.active_page, 2);
        assert!(preview.html.contains("data-active-page=\"2\""));
    }

    #[test]
    fn test_footer_lines_in_preview_and_print() {
        let data = with_settings(
            sample(),
            r#"{"showPageNumbers": true, "showFooterName": true, "showFooterEmail": true}"#,
        );
        let doc = build_document(&data, None, DEFAULT_TEMPLATE_ID);
        let preview = doc.preview(&ViewOptions {
            content_height_px: Some(1800.0),
            ..ViewOptions::default()
        });
        assert!(preview
            .html
            .contains("Ada Lovelace · ada@example.com · Page 2 of 2"));

        let print = doc.print_html(Some(1800.0));
        assert_eq!(print.matches("class=\"page-footer print-page-footer\"").count(), 2);
        assert!(print.contains("Ada Lovelace · ada@example.com · Page 1 of 2"));
        assert!(print.contains("top: 21.75in;"));
    }

    #[test]
    fn test_footer_takes_no_printed_page_height() {
        let data = with_settings(sample(), r#"{"showPageNumbers": true}"#);
        let doc = build_document(&data, None, DEFAULT_TEMPLATE_ID);
        // 10.8in of content fits one 11in sheet in both surfaces.
        let height = 10.8 * 96.0;
        let preview = doc.preview(&ViewOptions {
            content_height_px: Some(height),
            ..ViewOptions::default()
        });
        assert_eq!(preview.pagination.total_pages, 1);
        assert!(preview.html.contains("Page 1 of 1"));

        let print = doc.print_html(Some(height));
        assert!(print.contains("@page { size: letter; margin: 0; }"));
        assert!(!print.contains("0.4in"));
        assert!(!print.contains("@bottom-center"));
        assert_eq!(print.matches("print-page-footer\" data-page=").count(), 1);
        assert!(print.contains("Page 1 of 1"));
        assert!(!print.contains("Page 1 of 2"));
    }

    #[test]
    fn test_no_footer_without_settings() {
        let doc = build_document(&sample(), None, DEFAULT_TEMPLATE_ID);
        let preview = doc.preview(&ViewOptions::default());
        assert!(!preview.html.contains("class=\"page-footer\""));
        assert!(!preview.html.contains("print-page-footer\""));
    }

    #[test]
    fn test_unknown_template_renders_default() {
        let doc = build_document(&sample(), Some("does-not-exist"), DEFAULT_TEMPLATE_ID);
        assert_eq!(doc.template.id, DEFAULT_TEMPLATE_ID);
        assert_eq!(doc.title, "Ada Lovelace - Resume");
    }

    #[test]
    fn test_headless_pagination_used_without_reported_height() {
        let doc = build_document(&sample(), None, DEFAULT_TEMPLATE_ID);
        let report = doc.paginate(None);
        assert!(report.measured);
        assert!(report.total_pages >= 1);
        assert!(report.content_height_px >= 1056.0 - 1e-6);
    }
}
