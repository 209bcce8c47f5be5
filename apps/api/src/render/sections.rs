//! Section and entry renderers.
//!
//! Every template composes its page from these functions. They take the
//! accent to draw with as a parameter because sidebar templates pass a
//! derived accent for content sitting on a tinted background.

use crate::models::resume::{
    language_dots, language_fill_percent, skill_dots, skill_fill_percent, Certificate, Education,
    Experience, Language, LanguageLevel, PersonalInfo, Publication, Skill, SkillLevel,
};
use crate::models::settings::{
    Align, DetailsArrangement, DisplayMode, EducationOrder, EntryLayout, ExperienceOrder,
    IconStyle, NameArrangement, SubtitlePlacement,
};
use crate::render::dates::{date_range, format_date};
use crate::render::{el, Element, Node, RenderContext};
use crate::style::color;
use crate::style::resolver::{EMPTY_DOT, MUTED_TEXT, TRACK};
use crate::style::Style;

const LEVEL_LABEL: &str = "#9ca3af";
const DOT_COUNT: u32 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Section wrapper
// ────────────────────────────────────────────────────────────────────────────

/// Heading plus body. The heading style comes from the resolver; the body
/// carries the shared body text style.
pub fn section(
    ctx: &RenderContext<'_>,
    title: &str,
    accent: &str,
    show_divider: bool,
    content: impl Into<Node>,
) -> Node {
    el("section")
        .class("resume-section")
        .style(&ctx.styles.section())
        .child(
            el("h2")
                .class("resume-section-header")
                .style(&ctx.styles.heading(accent, show_divider))
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

// ────────────────────────────────────────────────────────────────────────────
// Header pieces
// ────────────────────────────────────────────────────────────────────────────

pub fn name_display(ctx: &RenderContext<'_>, accent: &str, overrides: &Style) -> Node {
    let info = ctx.info();
    let first = info.first_name.trim();
    let last = info.last_name.trim();
    let heading = el("h1")
        .class("resume-name")
        .style(&ctx.styles.name(accent).merge(overrides));
    match ctx.settings.name_arrangement {
        NameArrangement::Row => heading.text(info.full_name()),
        NameArrangement::Stacked => heading.text(first).child(el("br")).text(last),
        NameArrangement::StackedReverse => heading.text(last).child(el("br")).text(first),
    }
    .into()
}

pub fn job_title(ctx: &RenderContext<'_>, accent: &str, overrides: &Style) -> Option<Node> {
    let title = ctx.info().job_title.trim();
    (!title.is_empty()).then(|| {
        el("p")
            .class("resume-job-title")
            .style(&ctx.styles.job_title(accent).merge(overrides))
            .text(title)
            .into()
    })
}

pub fn summary(ctx: &RenderContext<'_>, overrides: &Style) -> Option<Node> {
    let summary = ctx.info().summary.trim();
    (!summary.is_empty()).then(|| {
        el("p")
            .class("resume-summary")
            .style(&ctx.styles.body().set("margin", "0").merge(overrides))
            .text(summary)
            .into()
    })
}

pub fn profile_photo(ctx: &RenderContext<'_>, default_border: Option<&str>) -> Option<Node> {
    let src = ctx.info().profile_image()?;
    Some(
        el("div")
            .class("resume-photo")
            .style(&ctx.styles.photo(default_border))
            .child(
                el("img")
                    .attr("src", src)
                    .attr("alt", "Profile")
                    .css("width", "100%")
                    .css("height", "100%")
                    .css("object-fit", "cover")
                    .css("display", "block"),
            )
            .into(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Personal details
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Address,
    Linkedin,
    Github,
    Website,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Address => "Address",
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Github => "GitHub",
            ContactKind::Website => "Website",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Phone => "✆",
            ContactKind::Address => "⌖",
            ContactKind::Linkedin => "in",
            ContactKind::Github => "⌥",
            ContactKind::Website => "⊕",
        }
    }
}

/// Non-empty contact fields in display order.
pub fn contact_items(info: &PersonalInfo) -> Vec<(ContactKind, &str)> {
    [
        (ContactKind::Email, info.email.as_str()),
        (ContactKind::Phone, info.phone.as_str()),
        (ContactKind::Address, info.address.as_str()),
        (ContactKind::Linkedin, info.linkedin.as_str()),
        (ContactKind::Github, info.github.as_str()),
        (ContactKind::Website, info.website.as_str()),
    ]
    .into_iter()
    .map(|(kind, value)| (kind, value.trim()))
    .filter(|(_, value)| !value.is_empty())
    .collect()
}

#[derive(Debug, Clone)]
pub struct DetailsOptions {
    pub icon_color: String,
    pub item_size: &'static str,
    /// One item per line instead of a wrapping row.
    pub stacked: bool,
    /// Overrides the user's alignment.
    pub align: Option<Align>,
    pub color: Option<String>,
}

impl DetailsOptions {
    pub fn new(icon_color: impl Into<String>) -> Self {
        Self {
            icon_color: icon_color.into(),
            item_size: "0.9em",
            stacked: false,
            align: None,
            color: None,
        }
    }

    pub fn stacked(mut self, align: Align) -> Self {
        self.stacked = true;
        self.align = Some(align);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn item_size(mut self, size: &'static str) -> Self {
        self.item_size = size;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

pub fn personal_details(ctx: &RenderContext<'_>, opts: &DetailsOptions) -> Option<Node> {
    let items = contact_items(ctx.info());
    if items.is_empty() {
        return None;
    }
    let s = ctx.settings;
    let align = opts.align.unwrap_or(s.details_align);
    let (column_gap, row_gap) = match s.details_arrangement {
        DetailsArrangement::Row => ("16px", "0"),
        DetailsArrangement::Wrap => ("16px", "4px"),
        DetailsArrangement::Bullet | DetailsArrangement::Line => ("8px", "4px"),
    };
    let separator = match s.details_arrangement {
        DetailsArrangement::Bullet => Some("•"),
        DetailsArrangement::Line => Some("|"),
        _ => None,
    };
    let icon_color = ctx.styles.icon_color(&opts.icon_color);

    let mut container = el("div")
        .class("personal-details")
        .css("display", "flex")
        .css("flex-wrap", "wrap")
        .css("column-gap", column_gap)
        .css("row-gap", row_gap);
    container = if opts.stacked && separator.is_none() {
        container
            .css("flex-direction", "column")
            .css("align-items", align.justify())
    } else {
        container
            .css("align-items", "center")
            .css("justify-content", align.justify())
    };
    if let Some(color) = &opts.color {
        container = container.css("color", color.clone());
    }

    let last = items.len() - 1;
    for (index, (kind, value)) in items.into_iter().enumerate() {
        let mut item = el("span")
            .class("personal-detail")
            .css("display", "inline-flex")
            .css("align-items", "center")
            .css("gap", "6px")
            .css("font-size", opts.item_size);
        item = match s.details_icon_style {
            IconStyle::Hidden => item,
            IconStyle::Text => item.child(
                el("span")
                    .css("font-weight", "700")
                    .css("opacity", "0.7")
                    .text(format!("{}:", kind.label())),
            ),
            IconStyle::Outline => item.child(
                el("span")
                    .class("contact-icon")
                    .css("color", icon_color.clone())
                    .text(kind.glyph()),
            ),
            IconStyle::Filled => item.child(
                el("span")
                    .class("contact-icon")
                    .css("display", "inline-flex")
                    .css("align-items", "center")
                    .css("justify-content", "center")
                    .css("width", "14px")
                    .css("height", "14px")
                    .css("border-radius", "9999px")
                    .css("font-size", "0.6em")
                    .css("background-color", icon_color.clone())
                    .css("color", color::contrast_color(&icon_color))
                    .text(kind.glyph()),
            ),
        };
        container = container.child(item.child(el("span").css("word-break", "break-all").text(value)));
        if let (Some(sep), true) = (separator, index < last) {
            container = container.child(
                el("span")
                    .class("detail-separator")
                    .css("margin", "0 4px")
                    .css("opacity", "0.4")
                    .text(sep),
            );
        }
    }
    Some(container.into())
}

// ────────────────────────────────────────────────────────────────────────────
// Skills and languages
// ────────────────────────────────────────────────────────────────────────────

struct Rated<'d> {
    id: &'d str,
    name: &'d str,
    label: Option<&'static str>,
    percent: u32,
    dots: u32,
}

fn rated_skills(skills: &[Skill]) -> Vec<Rated<'_>> {
    skills
        .iter()
        .map(|s| Rated {
            id: &s.id,
            name: &s.name,
            label: s.level.map(SkillLevel::label),
            percent: skill_fill_percent(s.level),
            dots: skill_dots(s.level),
        })
        .collect()
}

fn rated_languages(languages: &[Language]) -> Vec<Rated<'_>> {
    languages
        .iter()
        .map(|l| Rated {
            id: &l.id,
            name: &l.name,
            label: l.level.map(LanguageLevel::label),
            percent: language_fill_percent(l.level),
            dots: language_dots(l.level),
        })
        .collect()
}

/// Skills in the user's chosen display mode.
pub fn skills(ctx: &RenderContext<'_>, skills: &[Skill], accent: &str) -> Node {
    let items = rated_skills(skills);
    match ctx.settings.skills_display {
        DisplayMode::Grid => grid(&items),
        DisplayMode::Level => level_bars(&items, accent),
        DisplayMode::Compact => compact(items.iter().map(|i| i.name.to_string())),
        DisplayMode::Text => plain_list(&items),
        DisplayMode::Dots => dot_rows(&items, accent),
        DisplayMode::Bar => bar_rows(&items, accent),
        DisplayMode::Bubble => chips(&items, &ctx.styles.chip(accent)),
    }
}

/// Languages in the user's chosen display mode.
pub fn languages(ctx: &RenderContext<'_>, languages: &[Language], accent: &str) -> Node {
    let items = rated_languages(languages);
    match ctx.settings.languages_display {
        DisplayMode::Grid => grid(&items),
        DisplayMode::Compact => compact(items.iter().map(|i| match i.label {
            Some(level) => format!("{} ({level})", i.name),
            None => i.name.to_string(),
        })),
        DisplayMode::Bubble => chips(&items, &ctx.styles.language_chip(accent)),
        DisplayMode::Dots => dot_rows(&items, accent),
        DisplayMode::Bar => bar_rows(&items, accent),
        DisplayMode::Text | DisplayMode::Level => label_rows(&items),
    }
}

fn item(rated: &Rated<'_>) -> Element {
    el("div")
        .class("rated-item")
        .attr("data-id", rated.id)
        .css("font-size", "0.9em")
}

fn level_label(label: &str) -> Element {
    el("span")
        .css("color", LEVEL_LABEL)
        .css("font-size", "0.8em")
        .text(label)
}

fn column(gap: &'static str) -> Element {
    el("div")
        .css("display", "flex")
        .css("flex-direction", "column")
        .css("gap", gap)
}

fn grid(items: &[Rated<'_>]) -> Node {
    el("div")
        .class("display-grid")
        .css("display", "grid")
        .css("grid-template-columns", "repeat(2, minmax(0, 1fr))")
        .css("gap", "8px")
        .children(items.iter().map(|i| {
            item(i)
                .css("display", "flex")
                .css("justify-content", "space-between")
                .css("align-items", "baseline")
                .child(el("span").text(i.name))
                .maybe(i.label.map(level_label))
        }))
        .into()
}

fn track(percent: u32, accent: &str, height: &'static str, radius: &'static str) -> Element {
    el("div")
        .class("level-track")
        .css("height", height)
        .css("background-color", TRACK)
        .css("border-radius", radius)
        .child(
            el("div")
                .class("level-fill")
                .css("height", "100%")
                .css("width", format!("{percent}%"))
                .css("border-radius", radius)
                .css("background-color", accent),
        )
}

fn level_bars(items: &[Rated<'_>], accent: &str) -> Node {
    column("8px")
        .class("display-level")
        .children(items.iter().map(|i| {
            item(i)
                .child(
                    el("div")
                        .css("display", "flex")
                        .css("justify-content", "space-between")
                        .css("margin-bottom", "4px")
                        .child(el("span").text(i.name))
                        .maybe(i.label.map(level_label)),
                )
                .child(track(i.percent, accent, "6px", "9999px"))
        }))
        .into()
}

fn compact(parts: impl Iterator<Item = String>) -> Node {
    el("p")
        .class("display-compact")
        .css("font-size", "0.9em")
        .css("margin", "0")
        .text(parts.collect::<Vec<_>>().join(", "))
        .into()
}

fn plain_list(items: &[Rated<'_>]) -> Node {
    column("4px")
        .class("display-text")
        .children(items.iter().map(|i| item(i).text(i.name)))
        .into()
}

fn dot_rows(items: &[Rated<'_>], accent: &str) -> Node {
    column("8px")
        .class("display-dots")
        .children(items.iter().map(|i| {
            let dots = (1..=DOT_COUNT).map(|n| {
                el("span")
                    .class("rating-dot")
                    .css("display", "inline-block")
                    .css("width", "8px")
                    .css("height", "8px")
                    .css("border-radius", "9999px")
                    .css(
                        "background-color",
                        if n <= i.dots { accent } else { EMPTY_DOT },
                    )
            });
            item(i)
                .css("display", "flex")
                .css("align-items", "center")
                .css("gap", "8px")
                .child(el("span").text(i.name))
                .child(el("div").css("display", "flex").css("gap", "4px").children(dots))
        }))
        .into()
}

fn bar_rows(items: &[Rated<'_>], accent: &str) -> Node {
    column("8px")
        .class("display-bar")
        .children(items.iter().map(|i| {
            item(i)
                .child(el("span").text(i.name))
                .child(track(i.percent, accent, "8px", "4px").css("margin-top", "4px"))
        }))
        .into()
}

fn chips(items: &[Rated<'_>], chip: &Style) -> Node {
    el("div")
        .class("display-bubble")
        .css("display", "flex")
        .css("flex-wrap", "wrap")
        .css("gap", "8px")
        .children(items.iter().map(|i| {
            el("span")
                .class("chip")
                .attr("data-id", i.id)
                .style(chip)
                .text(i.name)
        }))
        .into()
}

fn label_rows(items: &[Rated<'_>]) -> Node {
    column("8px")
        .class("display-text")
        .children(items.iter().map(|i| {
            item(i)
                .css("display", "flex")
                .css("justify-content", "space-between")
                .css("align-items", "baseline")
                .child(el("span").css("font-weight", "500").text(i.name))
                .maybe(i.label.map(level_label))
        }))
        .into()
}

// ────────────────────────────────────────────────────────────────────────────
// Descriptions
// ────────────────────────────────────────────────────────────────────────────

/// Non-empty description lines with any bullet or hyphen the user typed
/// already stripped.
pub fn description_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .map(|line| {
            line.strip_prefix('•')
                .or_else(|| line.strip_prefix('-'))
                .map(str::trim_start)
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn description(ctx: &RenderContext<'_>, text: &str) -> Option<Node> {
    if text.trim().is_empty() {
        return None;
    }
    let marker = ctx.settings.list_style.marker();
    let wrapper = el("div")
        .class("entry-description")
        .style(&ctx.styles.description().merge(&ctx.styles.body()));
    let body = if marker.is_empty() {
        wrapper.child(el("p").css("margin", "0").text(text.trim()))
    } else {
        wrapper.child(
            el("ul")
                .class("description-list")
                .css("list-style", "none")
                .css("margin", "0")
                .css("padding", "0")
                .css("display", "flex")
                .css("flex-direction", "column")
                .css("gap", "4px")
                .css("white-space", "normal")
                .children(description_lines(text).into_iter().map(|line| {
                    el("li")
                        .css("display", "flex")
                        .css("gap", "8px")
                        .child(el("span").class("list-marker").text(marker))
                        .child(el("span").text(line))
                })),
        )
    };
    Some(body.into())
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

/// The parts every dated entry is drawn from.
pub struct EntryParts<'d> {
    pub id: &'d str,
    pub title: &'d str,
    pub subtitle: &'d str,
    pub dates: String,
    pub location: Option<&'d str>,
    pub description: Option<Node>,
}

/// Draws an entry in the user's entry layout.
pub fn entry(ctx: &RenderContext<'_>, parts: EntryParts<'_>, accent: &str) -> Node {
    let st = &ctx.styles;
    let same_line = ctx.settings.subtitle_placement == SubtitlePlacement::SameLine;
    let has_subtitle = !parts.subtitle.trim().is_empty();

    let mut title_row = el("div").class("entry-title-row");
    if same_line {
        title_row = title_row
            .css("display", "flex")
            .css("align-items", "baseline")
            .css("gap", "8px");
    }
    title_row = title_row.child(el("h3").class("entry-title").style(&st.entry_title()).text(parts.title));
    if same_line && has_subtitle {
        title_row = title_row.child(
            el("span")
                .class("entry-subtitle")
                .style(&st.entry_subtitle(accent))
                .text(parts.subtitle),
        );
    }
    let next_line_subtitle = (!same_line && has_subtitle).then(|| {
        el("p")
            .class("entry-subtitle")
            .style(&st.entry_subtitle(accent))
            .text(parts.subtitle)
    });
    let dates = (!parts.dates.is_empty())
        .then(|| el("span").class("entry-date").style(&st.date(accent)).text(parts.dates.clone()));
    let location = parts
        .location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            el("p")
                .class("entry-location")
                .style(&st.date(accent).set("margin", "0"))
                .text(l)
        });

    let base = el("div")
        .class("resume-entry")
        .attr("data-id", parts.id)
        .style(&st.entry());

    match ctx.settings.entry_layout {
        EntryLayout::Stacked => base
            .child(
                el("div")
                    .class("resume-entry-header")
                    .css("display", "flex")
                    .css("justify-content", "space-between")
                    .css("align-items", "baseline")
                    .css("gap", "8px")
                    .child(title_row)
                    .maybe(dates),
            )
            .maybe(next_line_subtitle)
            .maybe(location)
            .maybe(parts.description),
        EntryLayout::Inline => base
            .css("display", "grid")
            .css("grid-template-columns", "1fr 3fr")
            .css("gap", "16px")
            .child(
                el("div")
                    .class("entry-aside")
                    .maybe(dates.map(|d| d.css("display", "block").css("white-space", "normal")))
                    .maybe(location),
            )
            .child(
                el("div")
                    .class("entry-main")
                    .child(title_row)
                    .maybe(next_line_subtitle)
                    .maybe(parts.description),
            ),
        EntryLayout::Timeline => base
            .css("position", "relative")
            .css("padding-left", "20px")
            .css("border-left", format!("2px solid {}", color::with_alpha(accent, 0x30)))
            .child(
                el("span")
                    .class("timeline-dot")
                    .css("position", "absolute")
                    .css("left", "-6px")
                    .css("top", "4px")
                    .css("width", "10px")
                    .css("height", "10px")
                    .css("border-radius", "9999px")
                    .css("background-color", accent),
            )
            .child(title_row)
            .maybe(next_line_subtitle)
            .maybe(dates.map(|d| d.css("display", "block")))
            .maybe(location)
            .maybe(parts.description),
    }
    .into()
}

pub fn experience_entry(ctx: &RenderContext<'_>, exp: &Experience, accent: &str) -> Node {
    let (title, subtitle) = match ctx.settings.experience_order {
        ExperienceOrder::TitleEmployer => (&exp.position, &exp.company),
        ExperienceOrder::EmployerTitle => (&exp.company, &exp.position),
    };
    entry(
        ctx,
        EntryParts {
            id: &exp.id,
            title,
            subtitle,
            dates: date_range(
                &exp.start_date,
                exp.end_date.as_deref(),
                exp.current,
                ctx.settings.date_format,
            ),
            location: exp.location.as_deref(),
            description: description(ctx, &exp.description),
        },
        accent,
    )
}

pub fn education_entry(ctx: &RenderContext<'_>, edu: &Education, accent: &str) -> Node {
    let (title, subtitle) = match ctx.settings.education_order {
        EducationOrder::DegreeSchool => (&edu.degree, &edu.school),
        EducationOrder::SchoolDegree => (&edu.school, &edu.degree),
    };
    entry(
        ctx,
        EntryParts {
            id: &edu.id,
            title,
            subtitle,
            dates: date_range(
                &edu.start_date,
                edu.end_date.as_deref(),
                edu.current,
                ctx.settings.date_format,
            ),
            location: edu.location.as_deref(),
            description: None,
        },
        accent,
    )
}

pub fn publication_entry(ctx: &RenderContext<'_>, publication: &Publication, accent: &str) -> Node {
    let st = &ctx.styles;
    let date = format_date(&publication.date, ctx.settings.date_format);
    el("div")
        .class("resume-entry")
        .attr("data-id", publication.id.as_str())
        .style(&st.entry())
        .child(
            el("div")
                .class("resume-entry-header")
                .css("display", "flex")
                .css("justify-content", "space-between")
                .css("align-items", "baseline")
                .css("gap", "8px")
                .child(el("h3").class("entry-title").style(&st.entry_title()).text(publication.title.as_str()))
                .maybe((!date.is_empty()).then(|| el("span").class("entry-date").style(&st.date(accent)).text(date))),
        )
        .maybe((!publication.publisher.trim().is_empty()).then(|| {
            el("p")
                .css("font-size", "0.9em")
                .css("margin", "0")
                .css("color", accent)
                .text(publication.publisher.trim())
        }))
        .maybe(
            publication
                .authors
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(|a| {
                    el("p")
                        .class("publication-authors")
                        .css("font-size", "0.85em")
                        .css("margin", "0")
                        .css("color", MUTED_TEXT)
                        .css("font-style", "italic")
                        .text(a)
                }),
        )
        .maybe(
            publication
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| {
                    el("p")
                        .css("margin", "4px 0 0 0")
                        .css("color", "#4b5563")
                        .style(&st.body())
                        .text(d)
                }),
        )
        .into()
}

pub fn certificate_entry(ctx: &RenderContext<'_>, cert: &Certificate, accent: &str) -> Node {
    let date = format_date(&cert.date, ctx.settings.date_format);
    let meta = match (cert.issuer.trim(), date.as_str()) {
        ("", "") => None,
        (issuer, "") => Some(issuer.to_string()),
        ("", date) => Some(date.to_string()),
        (issuer, date) => Some(format!("{issuer} | {date}")),
    };
    el("div")
        .class("resume-entry")
        .attr("data-id", cert.id.as_str())
        .style(&ctx.styles.entry())
        .child(
            el("h4")
                .class("entry-title")
                .css("font-size", "1em")
                .css("font-weight", "700")
                .css("margin", "0")
                .text(cert.name.as_str()),
        )
        .maybe(meta.map(|m| {
            el("p")
                .css("font-size", "0.9em")
                .css("margin", "0")
                .css("color", accent)
                .text(m)
        }))
        .into()
}

// ── Lists ──

pub fn experience_list(ctx: &RenderContext<'_>, accent: &str) -> Node {
    el("div")
        .class("experience-list")
        .children(ctx.data.experience.iter().map(|e| experience_entry(ctx, e, accent)))
        .into()
}

pub fn education_list(ctx: &RenderContext<'_>, accent: &str) -> Node {
    el("div")
        .class("education-list")
        .children(ctx.data.education.iter().map(|e| education_entry(ctx, e, accent)))
        .into()
}

pub fn publication_list(ctx: &RenderContext<'_>, accent: &str) -> Node {
    el("div")
        .class("publication-list")
        .children(ctx.data.publications.iter().map(|p| publication_entry(ctx, p, accent)))
        .into()
}

/// Certificates, optionally in a two-column grid.
pub fn certificate_list(ctx: &RenderContext<'_>, accent: &str, two_columns: bool) -> Node {
    let mut list = el("div").class("certificate-list");
    if two_columns {
        list = list
            .css("display", "grid")
            .css("grid-template-columns", "repeat(2, minmax(0, 1fr))")
            .css("column-gap", "24px");
    }
    list.children(ctx.data.certificates.iter().map(|c| certificate_entry(ctx, c, accent)))
        .into()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
