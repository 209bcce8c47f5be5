//! Template definitions.
//!
//! A template decides which sections appear, in which column, and draws its
//! own chrome around them. Heading, entry, date and chip styling all come
//! from the shared resolver and section renderers, so a template never
//! re-derives a setting on its own.

pub mod banner;
pub mod registry;
pub mod showcase;
pub mod sidebar;
pub mod single_column;

use serde::Serialize;

use crate::models::settings::Align;
use crate::render::sections::{self, DetailsOptions};
use crate::render::{el, Element, Node, RenderContext};
use crate::style::Style;

pub use registry::{catalogue, resolve_or, DEFAULT_TEMPLATE_ID};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub has_image: bool,
}

/// One visual identity. Rendering is a pure function of the context.
pub trait TemplateDefinition: Send + Sync {
    fn info(&self) -> &TemplateInfo;
    fn render(&self, ctx: &RenderContext<'_>) -> Node;
}

/// A template backed by a plain render function.
pub struct Template {
    info: TemplateInfo,
    render: fn(&RenderContext<'_>) -> Node,
}

impl Template {
    pub const fn new(info: TemplateInfo, render: fn(&RenderContext<'_>) -> Node) -> Self {
        Self { info, render }
    }
}

impl TemplateDefinition for Template {
    fn info(&self) -> &TemplateInfo {
        &self.info
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        (self.render)(ctx)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section kit
// ────────────────────────────────────────────────────────────────────────────

/// Section titles; templates override the ones they rename.
#[derive(Debug, Clone, Copy)]
pub struct Titles {
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
    pub certificates: &'static str,
    pub publications: &'static str,
}

pub const TITLES: Titles = Titles {
    summary: "Summary",
    experience: "Experience",
    education: "Education",
    skills: "Skills",
    languages: "Languages",
    certificates: "Certificates",
    publications: "Publications",
};

/// Section builders bound to one accent and divider choice.
///
/// Experience and education always render. The other collections render
/// only when they have entries, and the summary only when it has text.
pub struct Kit<'c, 'a> {
    pub ctx: &'c RenderContext<'a>,
    pub accent: &'c str,
    pub divider: bool,
    pub titles: Titles,
}

impl<'c, 'a> Kit<'c, 'a> {
    pub fn new(ctx: &'c RenderContext<'a>, accent: &'c str) -> Self {
        Self {
            ctx,
            accent,
            divider: ctx.settings.show_dividers,
            titles: TITLES,
        }
    }

    pub fn titles(mut self, titles: Titles) -> Self {
        self.titles = titles;
        self
    }

    /// Draws dividers under every heading whatever the user chose.
    pub fn always_divided(mut self) -> Self {
        self.divider = true;
        self
    }

    pub fn section(&self, title: &str, content: impl Into<Node>) -> Node {
        sections::section(self.ctx, title, self.accent, self.divider, content)
    }

    pub fn summary(&self) -> Option<Node> {
        self.summary_styled(&Style::new())
    }

    pub fn summary_styled(&self, overrides: &Style) -> Option<Node> {
        sections::summary(self.ctx, overrides).map(|p| self.section(self.titles.summary, p))
    }

    pub fn experience(&self) -> Node {
        self.section(
            self.titles.experience,
            sections::experience_list(self.ctx, self.accent),
        )
    }

    pub fn education(&self) -> Node {
        self.section(
            self.titles.education,
            sections::education_list(self.ctx, self.accent),
        )
    }

    pub fn skills(&self) -> Option<Node> {
        let skills = &self.ctx.data.skills;
        (!skills.is_empty()).then(|| {
            self.section(
                self.titles.skills,
                sections::skills(self.ctx, skills, self.accent),
            )
        })
    }

    pub fn languages(&self) -> Option<Node> {
        let languages = &self.ctx.data.languages;
        (!languages.is_empty()).then(|| {
            self.section(
                self.titles.languages,
                sections::languages(self.ctx, languages, self.accent),
            )
        })
    }

    pub fn certificates(&self, two_columns: bool) -> Option<Node> {
        (!self.ctx.data.certificates.is_empty()).then(|| {
            self.section(
                self.titles.certificates,
                sections::certificate_list(self.ctx, self.accent, two_columns),
            )
        })
    }

    pub fn publications(&self) -> Option<Node> {
        (!self.ctx.data.publications.is_empty()).then(|| {
            self.section(
                self.titles.publications,
                sections::publication_list(self.ctx, self.accent),
            )
        })
    }

    /// Skills and languages side by side; collapses to whichever exists.
    pub fn skills_and_languages(&self, gap: &'static str) -> Option<Node> {
        let pair: Vec<Node> = [self.skills(), self.languages()]
            .into_iter()
            .flatten()
            .collect();
        (!pair.is_empty()).then(|| grid(2, gap).children(pair).into())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chrome helpers
// ────────────────────────────────────────────────────────────────────────────

/// Page root with margins and the optional border.
pub fn page(ctx: &RenderContext<'_>, template_id: &'static str) -> Element {
    el("div")
        .class("resume-page")
        .attr("data-template", template_id)
        .style(&ctx.styles.container())
}

/// Vertical stack that drops absent sections.
pub fn stack<I>(nodes: I) -> Element
where
    I: IntoIterator<Item = Option<Node>>,
{
    el("div")
        .class("resume-column")
        .children(nodes.into_iter().flatten())
}

pub fn grid(columns: u32, gap: &'static str) -> Element {
    el("div")
        .css("display", "grid")
        .css(
            "grid-template-columns",
            format!("repeat({columns}, minmax(0, 1fr))"),
        )
        .css("column-gap", gap)
}

/// Contact details in the common header configuration.
pub fn contact_row(
    ctx: &RenderContext<'_>,
    icon_color: &str,
    item_size: &'static str,
    color: &str,
) -> Option<Node> {
    sections::personal_details(
        ctx,
        &DetailsOptions::new(icon_color)
            .item_size(item_size)
            .color(color),
    )
}

/// Contact details one per line.
pub fn contact_column(
    ctx: &RenderContext<'_>,
    icon_color: &str,
    item_size: &'static str,
    align: Align,
) -> Option<Node> {
    sections::personal_details(
        ctx,
        &DetailsOptions::new(icon_color)
            .item_size(item_size)
            .stacked(align),
    )
}

/// Wraps an optional block with a top margin.
pub fn spaced(node: Option<Node>, margin_top: &'static str) -> Option<Element> {
    node.map(|n| el("div").css("margin-top", margin_top).child(n))
}

/// Centred header block used by the conservative single-column templates.
pub fn centred_header() -> Element {
    el("header")
        .class("resume-header")
        .css("text-align", "center")
        .css("margin-bottom", "32px")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Language, ResumeData, Skill};

    #[test]
    fn test_optional_sections_skip_empty_collections() {
        let data = ResumeData::default();
        let s = data.resolved_settings();
        let ctx = RenderContext::new(&data, &s);
        let kit = Kit::new(&ctx, ctx.accent());
        assert!(kit.skills().is_none());
        assert!(kit.languages().is_none());
        assert!(kit.certificates(true).is_none());
        assert!(kit.publications().is_none());
        assert!(kit.summary().is_none());
        assert!(kit.skills_and_languages("32px").is_none());
        assert_eq!(
            kit.experience().find_by_class("resume-section-header").len(),
            1
        );
    }

    #[test]
    fn test_kit_uses_overridden_titles_and_divider() {
        let mut data = ResumeData::default();
        data.settings = Some(serde_json::from_str(r#"{"headingStyle": "line-above"}"#).unwrap());
        data.skills.push(Skill {
            id: "s".into(),
            name: "Rust".into(),
            level: None,
        });
        data.languages.push(Language {
            id: "l".into(),
            name: "Welsh".into(),
            level: None,
        });
        let s = data.resolved_settings();
        let ctx = RenderContext::new(&data, &s);
        let kit = Kit::new(&ctx, "#112233")
            .titles(Titles {
                skills: "Expertise",
                ..TITLES
            })
            .always_divided();
        let pair = kit.skills_and_languages("32px").unwrap();
        let text = pair.text_content();
        assert!(text.contains("Expertise") && text.contains("Languages"));
        let heading = pair.find_by_class("resume-section-header")[0];
        assert_eq!(heading.style.get("border-bottom"), Some("1px solid #11223320"));
    }
}
