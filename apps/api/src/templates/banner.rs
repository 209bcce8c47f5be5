//! Banner header over a two-column body.

use crate::render::sections::{self, DetailsOptions};
use crate::render::{el, Node, RenderContext};
use crate::style::color;
use crate::style::resolver::PAGE_HEIGHT_VAR;
use crate::style::{SidebarSide, SidebarSplit, Style};

use super::{spaced, stack, Kit};

const SIDE_TINT: &str = "#f8fafc";

pub fn evergreen_slate(ctx: &RenderContext<'_>) -> Node {
    let accent = ctx.accent();
    let banner = color::adjust_brightness(accent, -20.0);
    let banner_text = color::contrast_color(&banner);
    let subtext = color::adjust_brightness(accent, color::contrast_shift(banner_text, 70.0, -40.0));
    let width = ctx.settings.sidebar_width(35.0);
    let kit = Kit::new(ctx, accent);

    let header = el("header")
        .class("resume-header")
        .css("display", "flex")
        .css("gap", "32px")
        .css("padding", "32px")
        .css("background-color", banner.clone())
        .css("color", banner_text)
        .maybe(sections::profile_photo(
            ctx,
            Some(&color::with_alpha(banner_text, 0x30)),
        ))
        .child(
            el("div")
                .css("flex", "1")
                .child(sections::name_display(
                    ctx,
                    accent,
                    &Style::new().set("color", banner_text),
                ))
                .maybe(sections::job_title(
                    ctx,
                    accent,
                    &Style::new()
                        .set("font-size", "1.2em")
                        .set("font-weight", "500")
                        .set("color", subtext.clone()),
                ))
                .maybe(spaced(
                    sections::personal_details(
                        ctx,
                        &DetailsOptions::new(subtext.clone())
                            .item_size("0.8em")
                            .color(color::with_alpha(banner_text, 0xCC)),
                    ),
                    "16px",
                )),
        );

    let side = stack([
        sections::summary(
            ctx,
            &Style::new()
                .set("font-size", "0.8em")
                .set("color", "#374151")
                .set("margin-bottom", ctx.styles.section_gap()),
        ),
        kit.skills(),
        kit.languages(),
        kit.certificates(false),
    ])
    .class("resume-sidebar")
    .css("width", format!("{width}%"))
    .css("flex-shrink", "0")
    .css("box-sizing", "border-box")
    .css("padding", "32px");

    let main = stack([
        Some(kit.experience()),
        Some(kit.education()),
        kit.publications(),
    ])
    .class("resume-main")
    .css("flex", "1")
    .css("min-width", "0")
    .css("padding", "32px");

    let body = el("div")
        .class("resume-columns")
        .style(&ctx.styles.split_background(SidebarSplit {
            color: SIDE_TINT,
            main_bg: "#ffffff",
            width_pct: width,
            side: SidebarSide::Left,
        }))
        .css("display", "flex")
        .css("min-height", PAGE_HEIGHT_VAR)
        .child(side)
        .child(main);

    el("div")
        .class("resume-page")
        .attr("data-template", "evergreen-slate")
        .style(&ctx.styles.bleed_page())
        .child(header)
        .child(body)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, ResumeData, Skill};

    #[test]
    fn test_banner_colours_and_column_split() {
        let mut data = ResumeData::default();
        data.personal_info.first_name = "Linus".into();
        data.personal_info.summary = "Kernel hacker".into();
        data.experience.push(Experience {
            id: "e".into(),
            position: "Maintainer".into(),
            ..Experience::default()
        });
        data.skills.push(Skill {
            id: "s".into(),
            name: "C".into(),
            level: None,
        });
        let s = data.resolved_settings();
        let node = evergreen_slate(&RenderContext::new(&data, &s));

        let header = node.find_by_class("resume-header")[0];
        let banner = color::adjust_brightness(&s.accent, -20.0);
        assert_eq!(header.style.get("background-color"), Some(banner.as_str()));

        let side = Node::Element(node.find_by_class("resume-sidebar")[0].clone()).text_content();
        assert!(side.contains("Kernel hacker") && side.contains("C"));
        let main = Node::Element(node.find_by_class("resume-main")[0].clone()).text_content();
        assert!(main.contains("Maintainer"));
    }
}
