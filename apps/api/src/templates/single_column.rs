//! Single full-width column templates.

use crate::models::settings::Align;
use crate::render::sections::{self, DetailsOptions};
use crate::render::{el, Element, Node, RenderContext};
use crate::style::color;
use crate::style::resolver::MUTED_TEXT;
use crate::style::Style;

use super::{centred_header, contact_row, page, spaced, stack, Kit, Titles, TITLES};

fn centred_name() -> Style {
    Style::new().set("text-align", "center")
}

// ── modern / modern-photo ──

fn modern_header_text(ctx: &RenderContext<'_>) -> Element {
    let accent = ctx.accent();
    el("div")
        .class("header-text")
        .css("flex", "1")
        .child(sections::name_display(
            ctx,
            accent,
            &Style::new()
                .set("text-transform", "uppercase")
                .set("letter-spacing", "-0.05em"),
        ))
        .maybe(sections::job_title(
            ctx,
            accent,
            &Style::new().set("font-weight", "700"),
        ))
        .maybe(spaced(contact_row(ctx, accent, "0.9em", MUTED_TEXT), "12px"))
}

/// Two-thirds narrative column, one-third reference column.
fn modern_body(kit: &Kit<'_, '_>) -> Element {
    el("div")
        .class("resume-body")
        .css("display", "grid")
        .css("grid-template-columns", "2fr 1fr")
        .css("column-gap", "40px")
        .child(stack([
            kit.summary(),
            Some(kit.experience()),
            kit.certificates(false),
            kit.publications(),
        ]))
        .child(stack([kit.skills(), Some(kit.education()), kit.languages()]))
}

pub fn modern(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    page(ctx, "modern")
        .child(
            el("header")
                .class("resume-header")
                .css("border-bottom", format!("4px solid {accent}"))
                .css("padding-bottom", "16px")
                .css("margin-bottom", "32px")
                .child(modern_header_text(ctx)),
        )
        .child(modern_body(&kit))
        .into()
}

pub fn modern_photo(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    let frame = color::with_alpha(accent, 0x20);
    page(ctx, "modern-photo")
        .child(
            el("header")
                .class("resume-header")
                .css("display", "flex")
                .css("justify-content", "space-between")
                .css("align-items", "flex-start")
                .css("gap", "24px")
                .css("border-bottom", format!("4px solid {accent}"))
                .css("padding-bottom", "24px")
                .css("margin-bottom", "32px")
                .child(modern_header_text(ctx))
                .maybe(sections::profile_photo(ctx, Some(&frame))),
        )
        .child(modern_body(&kit))
        .into()
}

// ── minimal ──

pub fn minimal(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    let quoted_summary = sections::summary(
        ctx,
        &Style::new()
            .set("font-style", "italic")
            .set("text-align", "center")
            .set("font-size", "1.1em"),
    );
    page(ctx, "minimal")
        .child(
            centred_header()
                .css("margin-bottom", "48px")
                .child(sections::name_display(
                    ctx,
                    accent,
                    &centred_name()
                        .set("text-transform", "uppercase")
                        .set("letter-spacing", "0.1em")
                        .set("margin-bottom", "8px"),
                ))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-size", "0.9em")
                        .set("text-transform", "uppercase")
                        .set("letter-spacing", "0.1em")
                        .set("font-weight", "500"),
                ))
                .maybe(spaced(
                    sections::personal_details(
                        ctx,
                        &DetailsOptions::new(accent)
                            .item_size("0.8em")
                            .color("#4b5563")
                            .align(Align::Center),
                    ),
                    "24px",
                )),
        )
        .child(
            stack([
                quoted_summary.map(|p| {
                    Node::from(
                        el("section")
                            .class("resume-section")
                            .style(&ctx.styles.section())
                            .child(p),
                    )
                }),
                Some(kit.experience()),
                Some(kit.education()),
                kit.skills_and_languages("32px"),
                kit.certificates(true),
                kit.publications(),
            ])
            .css("max-width", "672px")
            .css("margin", "0 auto"),
        )
        .into()
}

// ── classic ──

pub fn classic(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent).titles(Titles {
        summary: "Professional Objective",
        skills: "Technical Skills",
        ..TITLES
    });
    page(ctx, "classic")
        .child(
            centred_header()
                .css("border-bottom", format!("2px solid {accent}"))
                .css("padding-bottom", "16px")
                .child(sections::name_display(
                    ctx,
                    accent,
                    &centred_name()
                        .set("text-decoration", "underline")
                        .set("margin-bottom", "4px"),
                ))
                .maybe(sections::personal_details(
                    ctx,
                    &DetailsOptions::new("#000000").align(Align::Center),
                ))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-size", "0.9em")
                        .set("font-weight", "700")
                        .set("margin-top", "4px"),
                )),
        )
        .child(stack([
            kit.summary(),
            Some(kit.experience()),
            Some(kit.education()),
            kit.skills(),
            kit.languages(),
            kit.certificates(false),
            kit.publications(),
        ]))
        .into()
}

// ── technical ──

pub fn technical(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent).titles(Titles {
        summary: "_SUMMARY",
        experience: "_EXPERIENCE",
        education: "_EDUCATION",
        skills: "_SKILLS",
        languages: "_LANGUAGES",
        certificates: "_CERTIFICATES",
        publications: "_PUBLICATIONS",
    });
    let header = el("header")
        .class("resume-header")
        .css("display", "flex")
        .css("justify-content", "space-between")
        .css("align-items", "center")
        .css("gap", "24px")
        .css("border-bottom", "1px solid #e5e7eb")
        .css("padding-bottom", "16px")
        .css("margin-bottom", "24px")
        .child(
            el("div")
                .child(sections::name_display(ctx, accent, &Style::new()))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new().set("font-weight", "500"),
                )),
        )
        .maybe(sections::personal_details(
            ctx,
            &DetailsOptions::new(accent)
                .item_size("0.85em")
                .stacked(Align::Right)
                .color("#4b5563"),
        ));
    page(ctx, "technical")
        .child(
            el("div")
                .class("terminal-frame")
                .css("border", "1px solid #d1d5db")
                .css("padding", "24px")
                .child(header)
                .child(
                    stack([
                        kit.summary(),
                        kit.skills(),
                        Some(kit.experience()),
                        Some(kit.education()),
                        kit.languages(),
                        kit.certificates(false),
                        kit.publications(),
                    ])
                    .css("padding", "0 8px"),
                ),
        )
        .into()
}

// ── finance / harvard / banking ──

/// Centred name, title and contact line over a rule.
fn formal_header(ctx: &RenderContext<'_>, rule: String, job_title: &Style) -> Element {
    let accent = ctx.accent();
    centred_header()
        .css("border-bottom", rule)
        .css("padding-bottom", "24px")
        .child(sections::name_display(
            ctx,
            accent,
            &centred_name().set("letter-spacing", "0.05em"),
        ))
        .maybe(sections::job_title(
            ctx,
            accent,
            &Style::new().set("margin-top", "4px").merge(job_title),
        ))
        .maybe(spaced(
            sections::personal_details(
                ctx,
                &DetailsOptions::new(accent)
                    .item_size("0.9em")
                    .color("#4b5563")
                    .align(Align::Center),
            ),
            "12px",
        ))
}

pub fn finance(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    page(ctx, "finance")
        .child(formal_header(
            ctx,
            format!("1px solid {}", color::with_alpha(accent, 0x30)),
            &Style::new().set("font-weight", "500"),
        ))
        .child(stack([
            kit.summary_styled(&Style::new().set("color", "#374151")),
            Some(kit.experience()),
            Some(kit.education()),
            kit.skills_and_languages("32px"),
            kit.certificates(true),
            kit.publications(),
        ]))
        .into()
}

pub fn harvard(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent).always_divided();
    page(ctx, "harvard")
        .child(formal_header(
            ctx,
            "2px solid #d1d5db".to_string(),
            &Style::new()
                .set("font-size", "0.9em")
                .set("text-transform", "uppercase")
                .set("letter-spacing", "0.1em")
                .set("color", "inherit"),
        ))
        .child(stack([
            kit.summary(),
            Some(kit.education()),
            Some(kit.experience()),
            kit.skills(),
            kit.languages(),
            kit.certificates(false),
            kit.publications(),
        ]))
        .into()
}

pub fn banking(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent).always_divided().titles(Titles {
        summary: "Profile",
        experience: "Work Experience",
        ..TITLES
    });
    page(ctx, "banking")
        .child(formal_header(
            ctx,
            format!("2px solid {}", color::with_alpha(accent, 0x30)),
            &Style::new()
                .set("font-size", "1em")
                .set("text-transform", "uppercase")
                .set("letter-spacing", "0.2em"),
        ))
        .child(stack([
            kit.summary(),
            Some(kit.experience()),
            Some(kit.education()),
            kit.skills_and_languages("40px"),
            kit.certificates(true),
            kit.publications(),
        ]))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, ResumeData};

    fn sample() -> ResumeData {
        let mut data = ResumeData::blank("ada@example.com");
        data.personal_info.first_name = "Ada".into();
        data.personal_info.last_name = "Lovelace".into();
        data.personal_info.summary = "Analyst".into();
        data.experience.push(Experience {
            id: "e1".into(),
            company: "Engine Co".into(),
            position: "Programmer".into(),
            ..Experience::default()
        });
        data
    }

    #[test]
    fn test_modern_places_experience_in_wide_column() {
        let data = sample();
        let s = data.resolved_settings();
        let node = modern(&RenderContext::new(&data, &s));
        let columns = node.find_by_class("resume-column");
        assert_eq!(columns.len(), 2);
        let wide = Node::Element(columns[0].clone()).text_content();
        assert!(wide.contains("Programmer"));
        assert!(wide.contains("Analyst"));
    }

    #[test]
    fn test_banking_renames_and_always_divides() {
        let mut data = sample();
        data.settings = Some(serde_json::from_str(r#"{"headingStyle": "line-above"}"#).unwrap());
        let s = data.resolved_settings();
        let node = banking(&RenderContext::new(&data, &s));
        let text = node.text_content();
        assert!(text.contains("Work Experience") && text.contains("Profile"));
        for heading in node.find_by_class("resume-section-header") {
            assert_ne!(heading.style.get("border-bottom"), Some("none"));
        }
    }

    #[test]
    fn test_technical_uses_underscore_titles() {
        let data = sample();
        let s = data.resolved_settings();
        let node = technical(&RenderContext::new(&data, &s));
        assert!(node.text_content().contains("_EXPERIENCE"));
    }
}
