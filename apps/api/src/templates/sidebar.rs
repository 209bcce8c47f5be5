//! Two-column templates with a tinted sidebar.
//!
//! Every sidebar tint and the text drawn on it come from the accent through
//! [`color`], so any accent stays legible. The band itself is painted by
//! the page background (see [`StyleResolver::sidebar_container`]) so it
//! repeats on every printed page instead of ending with the content.
//!
//! [`StyleResolver::sidebar_container`]: crate::style::StyleResolver::sidebar_container

use crate::models::settings::Align;
use crate::render::sections::{self, DetailsOptions};
use crate::render::{el, Element, Node, RenderContext};
use crate::style::color;
use crate::style::resolver::{MUTED_TEXT, PAGE_HEIGHT_VAR};
use crate::style::{SidebarSide, SidebarSplit, Style};

use super::{contact_column, contact_row, spaced, stack, Kit, Titles, TITLES};

const WHITE: &str = "#ffffff";

// ────────────────────────────────────────────────────────────────────────────
// Shared pieces
// ────────────────────────────────────────────────────────────────────────────

/// Lays out the sidebar and main column over the split background.
fn two_columns(
    ctx: &RenderContext<'_>,
    template_id: &'static str,
    split: SidebarSplit<'_>,
    sidebar: Element,
    main: Element,
) -> Node {
    let sidebar = sidebar
        .class("resume-sidebar")
        .css("width", format!("{}%", split.width_pct))
        .css("flex-shrink", "0")
        .css("box-sizing", "border-box");
    let main = main
        .class("resume-main")
        .css("flex", "1")
        .css("min-width", "0")
        .css("box-sizing", "border-box");
    let row = el("div")
        .class("resume-columns")
        .css("display", "flex")
        .css("min-height", PAGE_HEIGHT_VAR);
    let row = match split.side {
        SidebarSide::Left => row.child(sidebar).child(main),
        SidebarSide::Right => row.child(main).child(sidebar),
    };
    el("div")
        .class("resume-page")
        .attr("data-template", template_id)
        .style(&ctx.styles.sidebar_container(split))
        .child(row)
        .into()
}

/// Small ruled heading used inside dark sidebars.
fn side_block(title: &str, color: &str, rule: &str, content: impl Into<Node>) -> Node {
    el("div")
        .class("sidebar-block")
        .css("font-size", "0.9em")
        .css("margin-bottom", "32px")
        .child(
            el("h2")
                .class("resume-section-header")
                .css("font-size", "0.75em")
                .css("font-weight", "900")
                .css("text-transform", "uppercase")
                .css("letter-spacing", "0.1em")
                .css("color", color)
                .css("border-bottom", format!("1px solid {rule}"))
                .css("padding-bottom", "8px")
                .css("margin", "0 0 12px 0")
                .text(title),
        )
        .child(content)
        .into()
}

/// Degree, school and dates without the entry chrome; fits narrow columns.
fn compact_education(ctx: &RenderContext<'_>, text: &str) -> Node {
    el("div")
        .class("education-list")
        .css("color", color::with_alpha(text, 0xCC))
        .children(ctx.data.education.iter().map(|edu| {
            let dates = crate::render::dates::date_range(
                &edu.start_date,
                edu.end_date.as_deref(),
                edu.current,
                ctx.settings.date_format,
            );
            el("div")
                .class("resume-entry")
                .attr("data-id", edu.id.as_str())
                .style(&ctx.styles.entry())
                .child(
                    el("p")
                        .css("font-weight", "700")
                        .css("margin", "0")
                        .css("color", text)
                        .text(edu.degree.as_str()),
                )
                .child(el("p").css("font-size", "0.9em").css("margin", "0").text(edu.school.as_str()))
                .maybe((!dates.is_empty()).then(|| {
                    el("p")
                        .css("font-size", "0.85em")
                        .css("margin", "0")
                        .css("opacity", "0.7")
                        .text(dates)
                }))
        }))
        .into()
}

/// Sidebar colours for templates with a dark band.
struct DarkBand {
    color: String,
    text: &'static str,
    accent: String,
}

impl DarkBand {
    /// `lighter` and `darker` shift the accent for text on a dark or light band.
    fn derive(accent: &str, shift: f64, lighter: f64, darker: f64) -> Self {
        let color = color::adjust_brightness(accent, shift);
        let text = color::contrast_color(&color);
        let accent = color::adjust_brightness(accent, color::contrast_shift(text, lighter, darker));
        Self { color, text, accent }
    }
}

fn optional_block(
    items_present: bool,
    build: impl FnOnce() -> Node,
) -> Option<Node> {
    items_present.then(build)
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

pub fn corporate(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let data = ctx.data;
    let band = DarkBand::derive(accent, -60.0, 40.0, -20.0);
    let rule = color::with_alpha(band.text, 0x30);
    let kit = Kit::new(ctx, accent).titles(Titles {
        summary: "Profile",
        ..TITLES
    });

    let sidebar = el("div")
        .css("padding", "32px")
        .css("color", band.text)
        .child(
            el("div")
                .css("margin-bottom", "40px")
                .child(sections::name_display(
                    ctx,
                    accent,
                    &Style::new().set("color", band.text),
                ))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-size", "0.9em")
                        .set("text-transform", "uppercase")
                        .set("letter-spacing", "0.1em")
                        .set("margin-top", "8px")
                        .set("color", band.accent.clone()),
                )),
        )
        .maybe(contact_column(ctx, &band.accent, "0.9em", Align::Left).map(|details| {
            side_block("Contact", &band.accent, &rule, details)
        }))
        .child(side_block(
            "Education",
            &band.accent,
            &rule,
            compact_education(ctx, band.text),
        ))
        .maybe(optional_block(!data.skills.is_empty(), || {
            side_block(
                "Skills",
                &band.accent,
                &rule,
                sections::skills(ctx, &data.skills, &band.accent),
            )
        }))
        .maybe(optional_block(!data.languages.is_empty(), || {
            side_block(
                "Languages",
                &band.accent,
                &rule,
                sections::languages(ctx, &data.languages, &band.accent),
            )
        }));

    let main = stack([
        kit.summary_styled(&Style::new().set("color", "#475569")),
        Some(kit.experience()),
        kit.certificates(true),
        kit.publications(),
    ])
    .css("padding", "48px");

    let width = ctx.settings.sidebar_width(33.0);
    two_columns(
        ctx,
        "corporate",
        SidebarSplit {
            color: &band.color,
            main_bg: "#f8fafc",
            width_pct: width,
            side: SidebarSide::Left,
        },
        sidebar,
        main,
    )
}

pub fn mercury(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let data = ctx.data;
    let band = DarkBand::derive(accent, -60.0, 40.0, -20.0);
    let rule = color::with_alpha(band.text, 0x30);
    let kit = Kit::new(ctx, accent).titles(Titles {
        experience: "Work Experience",
        certificates: "Awards & Certificates",
        ..TITLES
    });

    let identity = el("div")
        .css("display", "flex")
        .css("flex-direction", "column")
        .css("align-items", "center")
        .css("margin-bottom", "32px")
        .maybe(spaced_below(sections::profile_photo(ctx, Some(&rule)), "16px"))
        .child(sections::name_display(
            ctx,
            accent,
            &Style::new()
                .set("color", band.text)
                .set("text-align", "center"),
        ))
        .maybe(sections::job_title(
            ctx,
            accent,
            &Style::new()
                .set("font-size", "0.9em")
                .set("text-align", "center")
                .set("margin-top", "4px")
                .set("color", band.accent.clone()),
        ));

    let profile = sections::summary(
        ctx,
        &Style::new().set("color", color::with_alpha(band.text, 0xCC)),
    );

    let sidebar = el("div")
        .css("padding", "32px")
        .css("color", band.text)
        .child(identity)
        .maybe(contact_column(ctx, &band.accent, "0.85em", Align::Left).map(|details| {
            side_block("Contact", &band.accent, &rule, details)
        }))
        .maybe(profile.map(|p| side_block("Profile", &band.accent, &rule, p)))
        .maybe(optional_block(!data.skills.is_empty(), || {
            side_block(
                "Skills",
                &band.accent,
                &rule,
                sections::skills(ctx, &data.skills, &band.accent),
            )
        }))
        .maybe(optional_block(!data.languages.is_empty(), || {
            side_block(
                "Languages",
                &band.accent,
                &rule,
                sections::languages(ctx, &data.languages, &band.accent),
            )
        }));

    let main = stack([
        Some(kit.experience()),
        Some(kit.education()),
        kit.certificates(true),
        kit.publications(),
    ])
    .css("padding", "32px");

    two_columns(
        ctx,
        "mercury",
        SidebarSplit {
            color: &band.color,
            main_bg: WHITE,
            width_pct: ctx.settings.sidebar_width(35.0),
            side: SidebarSide::Left,
        },
        sidebar,
        main,
    )
}

fn spaced_below(node: Option<Node>, margin: &'static str) -> Option<Element> {
    node.map(|n| el("div").css("margin-bottom", margin).child(n))
}

/// Name, title and contact line at the top of a light main column.
fn main_header(ctx: &RenderContext<'_>, name_color: Option<&str>, job_title: &Style) -> Element {
    let accent = ctx.accent();
    let name_style = match name_color {
        Some(c) => Style::new().set("color", c),
        None => Style::new(),
    };
    el("header")
        .class("resume-header")
        .css("margin-bottom", "24px")
        .child(sections::name_display(ctx, accent, &name_style))
        .maybe(sections::job_title(ctx, accent, job_title))
        .maybe(spaced(contact_row(ctx, accent, "0.8em", MUTED_TEXT), "8px"))
}

pub fn steady_form(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    let tint = color::with_alpha(&color::adjust_brightness(accent, 50.0), 0x20);
    let frame = color::with_alpha(accent, 0x40);

    let main = el("div")
        .css("padding", "32px")
        .child(main_header(
            ctx,
            Some(accent),
            &Style::new().set("font-weight", "500"),
        ))
        .child(stack([
            kit.summary_styled(&Style::new().set("color", "#374151")),
            Some(kit.experience()),
            Some(kit.education()),
            kit.certificates(false),
            kit.publications(),
        ]));

    let sidebar = el("div")
        .css("padding", "24px")
        .css("border-left", format!("4px solid {accent}"))
        .maybe(spaced_below(sections::profile_photo(ctx, Some(&frame)), "24px"))
        .child(stack([kit.skills(), kit.languages()]));

    two_columns(
        ctx,
        "steady-form",
        SidebarSplit {
            color: &tint,
            main_bg: WHITE,
            width_pct: ctx.settings.sidebar_width(35.0),
            side: SidebarSide::Right,
        },
        sidebar,
        main,
    )
}

pub fn simply_blue(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    let deep = color::adjust_brightness(accent, -20.0);

    let profile = sections::summary(ctx, &Style::new().set("color", "#374151")).map(|p| {
        Node::from(
            el("section")
                .class("resume-section")
                .style(&ctx.styles.section())
                .css("padding", "16px")
                .css("border-radius", "8px")
                .css("border-left", format!("4px solid {accent}"))
                .css("background-color", color::with_alpha(accent, 0x10))
                .child(
                    el("h2")
                        .class("resume-section-header")
                        .css("font-size", "0.8em")
                        .css("font-weight", "700")
                        .css("text-transform", "uppercase")
                        .css("color", accent)
                        .css("margin", "0 0 8px 0")
                        .text("Profile"),
                )
                .child(p),
        )
    });

    let experience = kit.section(
        kit.titles.experience,
        el("div").class("experience-list").children(ctx.data.experience.iter().map(|exp| {
            el("div")
                .css("padding-left", "16px")
                .css("border-left", format!("2px solid {}", color::with_alpha(accent, 0x20)))
                .child(sections::experience_entry(ctx, exp, accent))
        })),
    );

    let main = el("div")
        .css("padding", "32px")
        .child(
            main_header(ctx, Some(&deep), &Style::new().set("font-weight", "500"))
                .css("border-bottom", format!("1px solid {}", color::with_alpha(accent, 0x30)))
                .css("padding-bottom", "16px"),
        )
        .child(stack([
            profile,
            Some(experience),
            Some(kit.education()),
            kit.skills_and_languages("32px"),
            kit.certificates(true),
            kit.publications(),
        ]));

    two_columns(
        ctx,
        "simply-blue",
        SidebarSplit {
            color: accent,
            main_bg: WHITE,
            width_pct: 1.5,
            side: SidebarSide::Left,
        },
        el("div"),
        main,
    )
}

pub fn blue_steel(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let kit = Kit::new(ctx, accent);
    let tint = color::with_alpha(accent, 0x10);
    let deep = color::adjust_brightness(accent, -20.0);
    let frame = color::with_alpha(accent, 0x40);

    let main = el("div")
        .css("padding", "32px")
        .child(main_header(
            ctx,
            Some(&deep),
            &Style::new()
                .set("font-size", "0.9em")
                .set("font-weight", "500")
                .set("font-style", "italic"),
        ))
        .child(stack([
            kit.summary_styled(
                &Style::new()
                    .set("font-style", "italic")
                    .set("color", "#374151")
                    .set("padding-left", "16px")
                    .set("border-left", format!("4px solid {frame}")),
            ),
            Some(kit.experience()),
            Some(kit.education()),
            kit.certificates(false),
            kit.publications(),
        ]));

    let sidebar = el("div")
        .css("padding", "24px")
        .maybe(spaced_below(sections::profile_photo(ctx, Some(&frame)), "24px"))
        .child(stack([kit.skills(), kit.languages()]));

    two_columns(
        ctx,
        "blue-steel",
        SidebarSplit {
            color: &tint,
            main_bg: WHITE,
            width_pct: ctx.settings.sidebar_width(32.0),
            side: SidebarSide::Right,
        },
        sidebar,
        main,
    )
}

pub fn hunter_green(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let data = ctx.data;
    let band = DarkBand::derive(accent, -20.0, 80.0, -20.0);
    let rule = color::with_alpha(band.text, 0x30);
    let kit = Kit::new(ctx, accent);

    let latest_role = data.experience.first().map(|exp| {
        el("header")
            .class("resume-header")
            .css("margin-bottom", "24px")
            .child(
                el("p")
                    .css("font-size", "0.75em")
                    .css("font-weight", "700")
                    .css("text-transform", "uppercase")
                    .css("letter-spacing", "0.1em")
                    .css("color", MUTED_TEXT)
                    .css("margin", "0 0 4px 0")
                    .text("Latest Role"),
            )
            .child(
                el("h3")
                    .css("font-size", "1.2em")
                    .css("font-weight", "700")
                    .css("margin", "0")
                    .text(exp.position.as_str()),
            )
            .child(
                el("p")
                    .css("font-weight", "700")
                    .css("margin", "0")
                    .css("color", accent)
                    .text(exp.company.as_str()),
            )
    });

    let main = el("div")
        .css("padding", "32px")
        .maybe(latest_role)
        .child(stack([
            Some(kit.experience()),
            Some(kit.education()),
            kit.certificates(false),
            kit.publications(),
        ]));

    let sidebar = el("div")
        .css("padding", "24px")
        .css("color", band.text)
        .child(
            el("div")
                .css("text-align", "center")
                .css("margin-bottom", "24px")
                .maybe(spaced_below(sections::profile_photo(ctx, Some(&rule)), "16px"))
                .child(sections::name_display(
                    ctx,
                    accent,
                    &Style::new()
                        .set("color", band.text)
                        .set("text-align", "center"),
                ))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-size", "0.9em")
                        .set("font-weight", "500")
                        .set("margin-top", "4px")
                        .set("color", band.accent.clone()),
                )),
        )
        .maybe(spaced_below(
            sections::personal_details(
                ctx,
                &DetailsOptions::new(band.accent.clone())
                    .item_size("0.75em")
                    .stacked(Align::Center),
            ),
            "24px",
        ))
        .maybe(spaced_below(
            sections::summary(
                ctx,
                &Style::new()
                    .set("font-size", "0.75em")
                    .set("color", band.accent.clone()),
            ),
            "24px",
        ))
        .maybe(optional_block(!data.skills.is_empty(), || {
            side_block(
                "Skills",
                &band.accent,
                &rule,
                sections::skills(ctx, &data.skills, &band.accent),
            )
        }))
        .maybe(optional_block(!data.languages.is_empty(), || {
            side_block(
                "Languages",
                &band.accent,
                &rule,
                sections::languages(ctx, &data.languages, &band.accent),
            )
        }));

    two_columns(
        ctx,
        "hunter-green",
        SidebarSplit {
            color: &band.color,
            main_bg: WHITE,
            width_pct: ctx.settings.sidebar_width(35.0),
            side: SidebarSide::Right,
        },
        sidebar,
        main,
    )
}

pub fn refined(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let tint = color::adjust_brightness(accent, 85.0);
    let border = color::adjust_brightness(accent, 40.0);
    let kit = Kit::new(ctx, accent);

    let main = stack([
        kit.summary(),
        Some(kit.experience()),
        Some(kit.education()),
        kit.publications(),
    ])
    .css("padding", "32px");

    let sidebar = el("div")
        .css("padding", "32px")
        .css("border-left", format!("1px solid {border}"))
        .child(
            el("div")
                .css("text-align", "center")
                .css("margin-bottom", "24px")
                .maybe(spaced_below(sections::profile_photo(ctx, Some(&border)), "16px"))
                .child(sections::name_display(
                    ctx,
                    accent,
                    &Style::new().set("text-align", "center"),
                ))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-size", "0.9em")
                        .set("font-weight", "500")
                        .set("margin-top", "4px")
                        .set("color", accent),
                )),
        )
        .maybe(spaced_below(
            contact_column(ctx, accent, "0.85em", Align::Center),
            "32px",
        ))
        .child(stack([kit.skills(), kit.languages(), kit.certificates(false)]));

    two_columns(
        ctx,
        "refined",
        SidebarSplit {
            color: &tint,
            main_bg: WHITE,
            width_pct: ctx.settings.sidebar_width(35.0),
            side: SidebarSide::Right,
        },
        sidebar,
        main,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ResumeData, Skill};

    fn render(template: fn(&RenderContext<'_>) -> Node, settings: &str) -> Node {
        let mut data = ResumeData::default();
        data.personal_info.first_name = "Ada".into();
        data.skills.push(Skill {
            id: "s".into(),
            name: "Rust".into(),
            level: None,
        });
        data.settings = Some(serde_json::from_str(settings).unwrap());
        let s = data.resolved_settings();
        template(&RenderContext::new(&data, &s))
    }

    fn page_background(node: &Node) -> String {
        match node {
            Node::Element(e) => e.style.get("background").unwrap_or_default().to_string(),
            Node::Text(_) => String::new(),
        }
    }

    #[test]
    fn test_corporate_sidebar_derives_from_accent() {
        let node = render(corporate, r##"{"accentColor": "#7c3aed"}"##);
        let band = color::adjust_brightness("#7c3aed", -60.0);
        assert!(page_background(&node).contains(&format!("{band} 33%")));
        let name = node.find_by_class("resume-name")[0];
        assert_eq!(name.style.get("color"), Some(color::contrast_color(&band)));
    }

    #[test]
    fn test_light_accent_gets_dark_sidebar_text() {
        let node = render(hunter_green, r##"{"accentColor": "#fef9c3"}"##);
        let name = node.find_by_class("resume-name")[0];
        assert_eq!(name.style.get("color"), Some("#000000"));
    }

    #[test]
    fn test_column_width_override_and_right_side() {
        let node = render(refined, r#"{"columnWidth": 50}"#);
        let bg = page_background(&node);
        assert!(bg.starts_with("linear-gradient(to left"));
        assert!(bg.contains(" 50%"));
        let sidebar = node.find_by_class("resume-sidebar")[0];
        assert_eq!(sidebar.style.get("width"), Some("50%"));
    }

    #[test]
    fn test_sidebar_band_repeats_per_page() {
        let node = render(mercury, "{}");
        let Node::Element(page) = &node else {
            panic!("page root should be an element");
        };
        assert_eq!(page.style.get("background-repeat"), Some("repeat-y"));
        assert_eq!(
            page.style.get("background-size"),
            Some("100% var(--resume-page-height, 11in)")
        );
    }
}
