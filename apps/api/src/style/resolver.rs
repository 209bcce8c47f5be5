//! Per-element style resolution.
//!
//! Each method reads the resolved settings plus the accent the caller is
//! drawing with (templates pass sidebar-derived accents for sidebar content)
//! and returns concrete CSS. Templates layer their own chrome on top with
//! [`Style::merge`]; they never recompute these values themselves.

use crate::models::settings::{
    Align, HeadingStyle, NameFont, PhotoShape, ResumeSettings, SizeTier, SubtitleStyle,
    CREATIVE_NAME_FONT,
};
use crate::style::color;
use crate::style::css::Style;

pub const BODY_TEXT: &str = "#1f2937";
pub const MUTED_TEXT: &str = "#6b7280";
pub const TITLE_TEXT: &str = "#111827";
pub const NEUTRAL_CHIP: &str = "#f3f4f6";
pub const NEUTRAL_CHIP_TEXT: &str = "#374151";
pub const EMPTY_DOT: &str = "#e5e7eb";
pub const TRACK: &str = "#e5e7eb";
pub const PAGE_HEIGHT_VAR: &str = "var(--resume-page-height, 11in)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSide {
    Left,
    Right,
}

/// Two-tone page background for sidebar templates.
#[derive(Debug, Clone, Copy)]
pub struct SidebarSplit<'b> {
    pub color: &'b str,
    pub main_bg: &'b str,
    pub width_pct: f64,
    pub side: SidebarSide,
}

#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    settings: &'a ResumeSettings,
}

impl<'a> StyleResolver<'a> {
    pub fn new(settings: &'a ResumeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &'a ResumeSettings {
        self.settings
    }

    fn accent_if(&self, enabled: bool, accent: &str) -> String {
        if enabled {
            accent.to_string()
        } else {
            "inherit".to_string()
        }
    }

    // ── Header ──

    pub fn name(&self, accent: &str) -> Style {
        let s = self.settings;
        Style::new()
            .set("font-size", format!("{}em", s.name_size.em()))
            .set("font-weight", if s.name_bold { "800" } else { "400" })
            .set("line-height", "1.1")
            .set("margin", "0")
            .set("color", self.accent_if(s.accent_targets.name, accent))
            .set("text-align", s.name_align.as_css())
            .set_if(
                s.name_font == NameFont::Creative,
                "font-family",
                CREATIVE_NAME_FONT,
            )
    }

    pub fn job_title(&self, accent: &str) -> Style {
        Style::new()
            .set("font-size", "1.2em")
            .set("font-weight", "600")
            .set("line-height", "1.2")
            .set("margin", "0")
            .set(
                "color",
                self.accent_if(self.settings.accent_targets.job_title, accent),
            )
    }

    // ── Sections ──

    /// Section heading, including the divider fallback for styles that
    /// leave the bottom border free.
    pub fn heading(&self, accent: &str, show_divider: bool) -> Style {
        let s = self.settings;
        let size = match s.heading_size {
            SizeTier::Small => "1.1em",
            SizeTier::Medium => "1.3em",
            SizeTier::Large => "1.6em",
        };
        let line = if s.accent_targets.headings_line {
            format!("2px solid {accent}")
        } else {
            "2px solid currentColor".to_string()
        };

        let mut style = Style::new()
            .set("font-size", size)
            .set("font-weight", "900")
            .set("letter-spacing", "0.05em")
            .set("text-transform", s.heading_case.text_transform())
            .set("margin", "0 0 16px 0");

        match s.heading_style {
            HeadingStyle::LineBelow => {
                style.insert("border-bottom", line);
                style.insert("padding-bottom", "4px");
            }
            HeadingStyle::LineAbove => {
                style.insert("border-top", line);
                style.insert("padding-top", "4px");
            }
            HeadingStyle::LineBoth => {
                style.insert("border-top", line.clone());
                style.insert("border-bottom", line);
                style.insert("padding-top", "4px");
                style.insert("padding-bottom", "4px");
            }
            HeadingStyle::Box => {
                let bg = if s.accent_targets.headings_line {
                    color::with_alpha(accent, 0x15)
                } else {
                    NEUTRAL_CHIP.to_string()
                };
                style.insert("background-color", bg);
                style.insert("padding", "4px 8px");
                style.insert("border-radius", "4px");
            }
            HeadingStyle::Plain => {
                style.insert("border-top", "none");
                style.insert("border-bottom", "none");
                style.insert("border-left", "none");
                style.insert("border-right", "none");
            }
        }

        style.insert("color", self.accent_if(s.accent_targets.headings, accent));
        if !style.contains("border-bottom") {
            let divider = if show_divider {
                format!("1px solid {}", color::with_alpha(accent, 0x20))
            } else {
                "none".to_string()
            };
            style.insert("border-bottom", divider);
        }
        style
    }

    pub fn section(&self) -> Style {
        Style::new().set(
            "margin-bottom",
            format!("{}px", self.settings.section_spacing.gap_px()),
        )
    }

    /// Vertical gap used between stacked sections inside a column.
    pub fn section_gap(&self) -> String {
        format!("{}px", self.settings.section_spacing.gap_px())
    }

    // ── Entries ──

    pub fn entry(&self) -> Style {
        Style::new().set(
            "margin-bottom",
            format!("{}px", self.settings.entry_spacing_px),
        )
    }

    pub fn entry_title(&self) -> Style {
        let size = match self.settings.entry_title_size {
            SizeTier::Small => "1em",
            SizeTier::Medium => "1.1em",
            SizeTier::Large => "1.25em",
        };
        Style::new()
            .set("font-size", size)
            .set("font-weight", "700")
            .set("color", TITLE_TEXT)
            .set("margin", "0")
    }

    pub fn entry_subtitle(&self, accent: &str) -> Style {
        let s = self.settings;
        Style::new()
            .set("font-size", "0.9em")
            .set("margin", "0")
            .set_if(s.subtitle_style == SubtitleStyle::Bold, "font-weight", "600")
            .set_if(
                s.subtitle_style == SubtitleStyle::Italic,
                "font-style",
                "italic",
            )
            .set("color", self.accent_if(s.accent_targets.job_title, accent))
    }

    /// Dates and locations.
    pub fn date(&self, accent: &str) -> Style {
        let s = self.settings;
        let color = if s.accent_targets.dates {
            accent
        } else {
            MUTED_TEXT
        };
        Style::new()
            .set("font-size", "0.8em")
            .set("color", color)
            .set("white-space", "nowrap")
            .set_if(s.reduce_date_opacity, "opacity", "0.6")
    }

    pub fn body(&self) -> Style {
        Style::new()
            .set("font-size", "0.85em")
            .set("line-height", "inherit")
            .set("white-space", "pre-line")
    }

    pub fn description(&self) -> Style {
        Style::new()
            .set("margin-top", "8px")
            .set("color", "#4b5563")
            .set_if(self.settings.description_indent, "padding-left", "16px")
    }

    // ── Page containers ──

    fn page_base(&self) -> Style {
        let s = self.settings;
        Style::new()
            .set("font-family", s.font_family.clone())
            .set("font-size", format!("{}pt", s.font_size_pt))
            .set("line-height", s.line_height.to_string())
            .set("background-color", "white")
            .set("color", BODY_TEXT)
            .set("position", "relative")
            .set("box-sizing", "border-box")
            .set("font-variant-numeric", "tabular-nums")
            .set("min-height", PAGE_HEIGHT_VAR)
    }

    /// Single-column page: margins as padding plus the optional accent border.
    pub fn container(&self) -> Style {
        let s = self.settings;
        let mut style = self
            .page_base()
            .set("padding", format!("{}mm {}mm", s.margin_tb_mm, s.margin_lr_mm));
        if s.show_border {
            let border = format!("4px solid {}", s.accent);
            let sides = s.border_sides;
            for (enabled, property) in [
                (sides.top, "border-top"),
                (sides.bottom, "border-bottom"),
                (sides.left, "border-left"),
                (sides.right, "border-right"),
            ] {
                if enabled {
                    style.insert(property, border.clone());
                }
            }
        }
        style
    }

    /// Sidebar page: the split is painted as a gradient one page tall and
    /// repeated, so every printed page carries its own sidebar band.
    pub fn sidebar_container(&self, split: SidebarSplit<'_>) -> Style {
        self.bleed_page().merge(&self.split_background(split))
    }

    /// Page without margin padding, for templates that paint to the edge.
    pub fn bleed_page(&self) -> Style {
        self.page_base().set("padding", "0")
    }

    /// One-page-tall two-tone band, repeated down the element.
    pub fn split_background(&self, split: SidebarSplit<'_>) -> Style {
        let direction = match split.side {
            SidebarSide::Left => "to right",
            SidebarSide::Right => "to left",
        };
        let w = split.width_pct;
        Style::new()
            .set(
                "background",
                format!(
                    "linear-gradient({direction}, {c} {w}%, {m} {w}%)",
                    c = split.color,
                    m = split.main_bg
                ),
            )
            .set("background-size", format!("100% {PAGE_HEIGHT_VAR}"))
            .set("background-repeat", "repeat-y")
    }

    // ── Photo ──

    /// `default_border` is the template's own frame colour, used when the
    /// user has not asked for a border.
    pub fn photo(&self, default_border: Option<&str>) -> Style {
        let s = self.settings;
        let px = s.photo_size.px();
        let radius = match s.photo_shape {
            PhotoShape::Circle => "9999px",
            PhotoShape::Rounded => "12px",
            PhotoShape::Square => "0",
        };
        let margin = match s.photo_position {
            Align::Left => "0 auto 0 0",
            Align::Center => "0 auto",
            Align::Right => "0 0 0 auto",
        };
        let border = if s.photo_border {
            Some(format!("4px solid {}", s.photo_border_color))
        } else {
            default_border.map(|c| format!("4px solid {c}"))
        };
        let mut style = Style::new()
            .set("width", format!("{px}px"))
            .set("height", format!("{px}px"))
            .set("border-radius", radius)
            .set("overflow", "hidden")
            .set("flex-shrink", "0")
            .set("box-sizing", "border-box")
            .set("margin", margin);
        if let Some(border) = border {
            style.insert("border", border);
        }
        style
    }

    // ── Collections ──

    /// Chip colours for bubble-mode skills.
    pub fn chip(&self, accent: &str) -> Style {
        let (bg, fg) = if self.settings.accent_targets.icons_bars {
            (color::with_alpha(accent, 0x15), accent.to_string())
        } else {
            (NEUTRAL_CHIP.to_string(), NEUTRAL_CHIP_TEXT.to_string())
        };
        chip_style("700", bg, fg)
    }

    /// Language bubbles are always tinted with the accent.
    pub fn language_chip(&self, accent: &str) -> Style {
        chip_style("500", color::with_alpha(accent, 0x15), accent.to_string())
    }

    /// Colour for contact icons.
    pub fn icon_color(&self, template_color: &str) -> String {
        let targets = self.settings.accent_targets;
        if targets.link_icons || targets.header_icons {
            self.settings.accent.clone()
        } else {
            template_color.to_string()
        }
    }
}

fn chip_style(weight: &'static str, bg: String, fg: String) -> Style {
    Style::new()
        .set("display", "inline-block")
        .set("padding", "4px 8px")
        .set("border-radius", "4px")
        .set("font-weight", weight)
        .set("font-size", "0.75em")
        .set("background-color", bg)
        .set("color", fg)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::RawSettings;

    fn settings(json: &str) -> ResumeSettings {
        let raw: RawSettings = serde_json::from_str(json).unwrap();
        ResumeSettings::resolve(&raw)
    }

    #[test]
    fn test_language_chip_ignores_accent_targets() {
        let s = settings("{}");
        let resolver = StyleResolver::new(&s);
        assert_eq!(resolver.chip("#7c3aed").get("background-color"), Some(NEUTRAL_CHIP));
        let chip = resolver.language_chip("#7c3aed");
        assert_eq!(chip.get("background-color"), Some("#7c3aed15"));
        assert_eq!(chip.get("color"), Some("#7c3aed"));
        assert_eq!(chip.get("font-weight"), Some("500"));
    }

    #[test]
    fn test_name_inherits_colour_without_accent_flag() {
        let s = settings("{}");
        let style = StyleResolver::new(&s).name("#ff0000");
        assert_eq!(style.get("color"), Some("inherit"));
        assert_eq!(style.get("font-size"), Some("2.5em"));
        assert_eq!(style.get("font-weight"), Some("800"));
        assert_eq!(style.get("font-family"), None);
    }

    #[test]
    fn test_name_takes_accent_and_creative_font() {
        let s = settings(
            r#"{"applyAccentTo": {"name": true}, "nameFont": "creative", "nameBold": false}"#,
        );
        let style = StyleResolver::new(&s).name("#ff0000");
        assert_eq!(style.get("color"), Some("#ff0000"));
        assert_eq!(style.get("font-family"), Some(CREATIVE_NAME_FONT));
        assert_eq!(style.get("font-weight"), Some("400"));
    }

    #[test]
    fn test_heading_none_clears_every_border() {
        let s = settings(r#"{"headingStyle": "none", "showDividers": true}"#);
        let style = StyleResolver::new(&s).heading("#7c3aed", true);
        for side in ["border-top", "border-bottom", "border-left", "border-right"] {
            assert_eq!(style.get(side), Some("none"), "{side}");
        }
    }

    #[test]
    fn test_heading_line_below_uses_current_colour_by_default() {
        let s = settings("{}");
        let style = StyleResolver::new(&s).heading("#7c3aed", false);
        assert_eq!(style.get("border-bottom"), Some("2px solid currentColor"));
        assert_eq!(style.get("color"), Some("inherit"));
        assert_eq!(style.get("font-size"), Some("1.3em"));
        assert_eq!(style.get("text-transform"), Some("uppercase"));
    }

    #[test]
    fn test_heading_line_above_gets_divider_when_enabled() {
        let s = settings(r#"{"headingStyle": "line-above"}"#);
        let r = StyleResolver::new(&s);
        assert_eq!(
            r.heading("#7c3aed", true).get("border-bottom"),
            Some("1px solid #7c3aed20")
        );
        assert_eq!(r.heading("#7c3aed", false).get("border-bottom"), Some("none"));
    }

    #[test]
    fn test_heading_box_tints_with_accent_line_flag() {
        let s = settings(
            r#"{"headingStyle": "box", "applyAccentTo": {"headingsLine": true, "headings": true}}"#,
        );
        let style = StyleResolver::new(&s).heading("#7c3aed", false);
        assert_eq!(style.get("background-color"), Some("#7c3aed15"));
        assert_eq!(style.get("color"), Some("#7c3aed"));
    }

    #[test]
    fn test_date_style_opacity_and_accent() {
        let s = settings(r#"{"reduceDateLocationOpacity": true, "applyAccentTo": {"dates": true}}"#);
        let style = StyleResolver::new(&s).date("#123456");
        assert_eq!(style.get("opacity"), Some("0.6"));
        assert_eq!(style.get("color"), Some("#123456"));
    }

    #[test]
    fn test_container_borders_follow_sides() {
        let s = settings(
            r##"{"showBorder": true, "accentColor": "#112233",
                "borderSides": {"top": true, "bottom": false, "left": false, "right": false}}"##,
        );
        let style = StyleResolver::new(&s).container();
        assert_eq!(style.get("border-top"), Some("4px solid #112233"));
        assert_eq!(style.get("border-bottom"), None);
        assert_eq!(style.get("padding"), Some("15mm 20mm"));
        assert_eq!(style.get("font-size"), Some("10pt"));
    }

    #[test]
    fn test_sidebar_gradient_is_one_page_tall() {
        let s = settings("{}");
        let style = StyleResolver::new(&s).sidebar_container(SidebarSplit {
            color: "#112233",
            main_bg: "white",
            width_pct: 35.0,
            side: SidebarSide::Right,
        });
        assert_eq!(
            style.get("background"),
            Some("linear-gradient(to left, #112233 35%, white 35%)")
        );
        assert_eq!(
            style.get("background-size"),
            Some("100% var(--resume-page-height, 11in)")
        );
        assert_eq!(style.get("background-repeat"), Some("repeat-y"));
    }

    #[test]
    fn test_photo_border_prefers_user_setting() {
        let s = settings(r##"{"photoBorder": true, "photoBorderColor": "#00ff00", "photoSize": "large"}"##);
        let style = StyleResolver::new(&s).photo(Some("#ffffff"));
        assert_eq!(style.get("border"), Some("4px solid #00ff00"));
        assert_eq!(style.get("width"), Some("128px"));

        let plain = settings("{}");
        let r = StyleResolver::new(&plain);
        assert_eq!(r.photo(None).get("border"), None);
        assert_eq!(r.photo(Some("#ffffff")).get("border"), Some("4px solid #ffffff"));
    }
}
