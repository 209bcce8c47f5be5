//! Single-column templates with a strong decorative identity.

use crate::models::settings::Align;
use crate::render::sections::{self, DetailsOptions};
use crate::render::{el, Element, Node, RenderContext};
use crate::style::color;
use crate::style::Style;

use super::{centred_header, page, spaced, stack, Kit, Titles, TITLES};

/// Negative margins that pull a band out to the page edges.
fn bleed_margin(ctx: &RenderContext<'_>, bottom: &str) -> String {
    let s = ctx.settings;
    format!("-{}mm -{}mm {bottom} -{}mm", s.margin_tb_mm, s.margin_lr_mm, s.margin_lr_mm)
}

// ── creative ──

/// A label column on the left, content on the right.
fn labelled_row(ctx: &RenderContext<'_>, label: &str, accent: &str, content: impl Into<Node>) -> Node {
    el("section")
        .class("resume-section")
        .style(&ctx.styles.section())
        .css("display", "grid")
        .css("grid-template-columns", "1fr 3fr")
        .css("column-gap", "32px")
        .child(
            el("h2")
                .class("resume-section-header")
                .css("font-size", "1.2em")
                .css("font-weight", "900")
                .css("text-transform", ctx.settings.heading_case.text_transform())
                .css("text-align", "right")
                .css("margin", "0")
                .css("padding-right", "16px")
                .css("border-right", format!("4px solid {accent}"))
                .text(label),
        )
        .child(
            el("div")
                .class("entry-content")
                .style(&ctx.styles.body())
                .child(content),
        )
        .into()
}

pub fn creative(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let data = ctx.data;
    let block = if ctx.settings.accent_targets.name {
        accent
    } else {
        "#000000"
    };
    let block_text = color::contrast_color(block);

    let header = el("header")
        .class("resume-header")
        .css("margin-bottom", "48px")
        .child(
            el("div")
                .class("name-block")
                .css("display", "inline-block")
                .css("padding", "8px 16px")
                .css("margin-bottom", "16px")
                .css("background-color", block)
                .child(sections::name_display(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-weight", "900")
                        .set("color", block_text),
                )),
        )
        .maybe(sections::job_title(
            ctx,
            accent,
            &Style::new()
                .set("font-size", "1.5em")
                .set("font-weight", "700")
                .set("font-style", "italic"),
        ))
        .maybe(spaced(
            sections::personal_details(ctx, &DetailsOptions::new("#000000")),
            "8px",
        ));

    let mut rows = vec![];
    if let Some(summary) = sections::summary(ctx, &Style::new().set("font-size", "1.1em")) {
        rows.push(Some(labelled_row(ctx, "About", accent, summary)));
    }
    rows.push(Some(labelled_row(
        ctx,
        "Work",
        accent,
        sections::experience_list(ctx, accent),
    )));
    rows.push(Some(labelled_row(
        ctx,
        "Education",
        accent,
        sections::education_list(ctx, accent),
    )));
    rows.push((!data.skills.is_empty()).then(|| {
        labelled_row(ctx, "Skills", accent, sections::skills(ctx, &data.skills, accent))
    }));
    rows.push((!data.languages.is_empty()).then(|| {
        labelled_row(
            ctx,
            "Languages",
            accent,
            sections::languages(ctx, &data.languages, accent),
        )
    }));
    rows.push((!data.certificates.is_empty()).then(|| {
        labelled_row(
            ctx,
            "Certified",
            accent,
            sections::certificate_list(ctx, accent, false),
        )
    }));
    rows.push((!data.publications.is_empty()).then(|| {
        labelled_row(
            ctx,
            "Published",
            accent,
            sections::publication_list(ctx, accent),
        )
    }));

    page(ctx, "creative")
        .css("background-color", "#fffbeb")
        .child(
            el("div")
                .class("creative-frame")
                .css("border", "8px solid #000000")
                .css("padding", "32px")
                .child(header)
                .child(stack(rows)),
        )
        .into()
}

// ── elegant ──

pub fn elegant(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent).titles(Titles {
        experience: "Professional Path",
        skills: "Expertise",
        ..TITLES
    });
    let band = centred_header()
        .css("background-color", "#f5f5f4")
        .css("border-bottom", "1px solid #e7e5e4")
        .css("padding", "48px 40px")
        .css("margin", bleed_margin(ctx, "40px"))
        .child(sections::name_display(
            ctx,
            accent,
            &Style::new()
                .set("text-align", "center")
                .set("font-weight", "400")
                .set("font-style", "italic")
                .set("letter-spacing", "0.025em"),
        ))
        .child(
            el("div")
                .class("name-rule")
                .css("height", "1px")
                .css("width", "96px")
                .css("margin", "16px auto")
                .css("background-color", accent),
        )
        .maybe(sections::job_title(
            ctx,
            accent,
            &Style::new()
                .set("font-size", "0.9em")
                .set("font-weight", "500")
                .set("text-transform", "uppercase")
                .set("letter-spacing", "0.3em"),
        ))
        .maybe(spaced(
            sections::personal_details(
                ctx,
                &DetailsOptions::new(accent)
                    .item_size("0.8em")
                    .color("#57534e")
                    .align(Align::Center),
            ),
            "16px",
        ));

    let summary = sections::summary(
        ctx,
        &Style::new()
            .set("font-style", "italic")
            .set("color", "#292524"),
    )
    .map(|p| {
        Node::from(
            el("section")
                .class("resume-summary-block")
                .css("text-align", "center")
                .css("max-width", "512px")
                .css("margin", "0 auto 40px auto")
                .css("padding-bottom", "32px")
                .css("border-bottom", "1px solid #e7e5e4")
                .child(p),
        )
    });

    page(ctx, "elegant")
        .css("background-color", "#fafaf9")
        .child(band)
        .child(stack([
            summary,
            Some(kit.experience()),
            Some(kit.education()),
            kit.skills_and_languages("40px"),
            kit.certificates(true),
            kit.publications(),
        ]))
        .into()
}

// ── startup ──

/// Tinted rounded panel for the side column.
fn panel(ctx: &RenderContext<'_>, title: &str, accent: &str, content: impl Into<Node>) -> Node {
    el("section")
        .class("resume-section")
        .css("background-color", color::with_alpha(accent, 0x10))
        .css("padding", "24px")
        .css("border-radius", "24px")
        .css("margin-bottom", ctx.styles.section_gap())
        .child(
            el("h2")
                .class("resume-section-header")
                .css("font-size", "1.2em")
                .css("font-weight", "900")
                .css("text-transform", ctx.settings.heading_case.text_transform())
                .css("color", accent)
                .css("margin", "0 0 16px 0")
                .text(title),
        )
        .child(
            el("div")
                .class("entry-content")
                .style(&ctx.styles.body())
                .child(content),
        )
        .into()
}

fn startup_banner(ctx: &RenderContext<'_>) -> Element {
    let accent = ctx.accent();
    let text = color::contrast_color(accent);
    el("header")
        .class("resume-header")
        .css("background-color", accent)
        .css("color", text)
        .css("padding", "48px")
        .css("margin", bleed_margin(ctx, "48px"))
        .css("border-radius", "0 0 64px 64px")
        .child(sections::name_display(
            ctx,
            accent,
            &Style::new()
                .set("font-weight", "900")
                .set("letter-spacing", "-0.025em")
                .set("margin-bottom", "8px")
                .set("color", text),
        ))
        .maybe(sections::job_title(
            ctx,
            accent,
            &Style::new()
                .set("font-size", "1.5em")
                .set("font-weight", "500")
                .set("color", color::with_alpha(text, 0xCC)),
        ))
        .maybe(spaced(
            sections::personal_details(
                ctx,
                &DetailsOptions::new(text).color(color::with_alpha(text, 0xE6)),
            ),
            "32px",
        ))
}

pub fn startup(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let data = ctx.data;
    let kit = Kit::new(ctx, accent).titles(Titles {
        summary: "The Story",
        ..TITLES
    });
    let side = stack([
        (!data.skills.is_empty()).then(|| {
            panel(ctx, "Superpowers", accent, sections::skills(ctx, &data.skills, accent))
        }),
        (!data.languages.is_empty()).then(|| {
            panel(
                ctx,
                "Languages",
                accent,
                sections::languages(ctx, &data.languages, accent),
            )
        }),
    ]);
    page(ctx, "startup")
        .child(startup_banner(ctx))
        .child(
            el("div")
                .class("resume-body")
                .css("display", "grid")
                .css("grid-template-columns", "2fr 1fr")
                .css("column-gap", "48px")
                .css("padding", "0 32px")
                .child(stack([
                    kit.summary_styled(
                        &Style::new()
                            .set("font-size", "1.1em")
                            .set("color", "#4b5563"),
                    ),
                    Some(kit.experience()),
                    Some(kit.education()),
                    kit.certificates(false),
                    kit.publications(),
                ]))
                .child(side),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ResumeData, Skill};

    #[test]
    fn test_startup_banner_text_contrasts_with_accent() {
        let mut data = ResumeData::default();
        data.personal_info.first_name = "Grace".into();
        data.settings = Some(serde_json::from_str(r##"{"accentColor": "#fde047"}"##).unwrap());
        let s = data.resolved_settings();
        let node = startup(&RenderContext::new(&data, &s));
        let name = node.find_by_class("resume-name")[0];
        assert_eq!(name.style.get("color"), Some("#000000"));
    }

    #[test]
    fn test_creative_name_block_follows_accent_flag() {
        let mut data = ResumeData::default();
        data.settings = Some(
            serde_json::from_str(r##"{"accentColor": "#1e3a8a", "applyAccentTo": {"name": true}}"##)
                .unwrap(),
        );
        let s = data.resolved_settings();
        let node = creative(&RenderContext::new(&data, &s));
        let block = node.find_by_class("name-block")[0];
        assert_eq!(block.style.get("background-color"), Some("#1e3a8a"));
        let name = node.find_by_class("resume-name")[0];
        assert_eq!(name.style.get("color"), Some("#ffffff"));
    }

    #[test]
    fn test_startup_superpowers_panel_only_with_skills() {
        let mut data = ResumeData::default();
        let s = data.resolved_settings();
        let empty = startup(&RenderContext::new(&data, &s));
        assert!(!empty.text_content().contains("Superpowers"));

        data.skills.push(Skill {
            id: "s".into(),
            name: "Growth".into(),
            level: None,
        });
        let s = data.resolved_settings();
        let filled = startup(&RenderContext::new(&data, &s));
        assert!(filled.text_content().contains("Superpowers"));
    }
}
