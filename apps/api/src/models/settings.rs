//! Visual settings for a resume document.
//!
//! Two layers:
//! - [`RawSettings`] mirrors the stored JSON record. Every field is optional
//!   and wrong-typed values become `None` instead of failing the document.
//! - [`ResumeSettings`] is the fully-populated struct produced once at the
//!   render boundary by [`ResumeSettings::resolve`]. Renderers never see an
//!   absent or out-of-range value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::lenient::{lenient, lenient_or_default};
use crate::style::color;

pub const DEFAULT_ACCENT: &str = "#7c3aed";
pub const DEFAULT_FONT_FAMILY: &str = "\"Inter\", sans-serif";
pub const CREATIVE_NAME_FONT: &str = "\"Playfair Display\", serif";

// ────────────────────────────────────────────────────────────────────────────
// Enumerated settings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionSpacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

impl SectionSpacing {
    /// Vertical gap between sections, in px.
    pub fn gap_px(self) -> u32 {
        match self {
            SectionSpacing::Compact => 12,
            SectionSpacing::Normal => 24,
            SectionSpacing::Relaxed => 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingStyle {
    #[default]
    LineBelow,
    LineAbove,
    LineBoth,
    Box,
    #[serde(rename = "none")]
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingCase {
    Capitalize,
    #[default]
    Uppercase,
    Lowercase,
}

impl HeadingCase {
    pub fn text_transform(self) -> &'static str {
        match self {
            HeadingCase::Capitalize => "capitalize",
            HeadingCase::Uppercase => "uppercase",
            HeadingCase::Lowercase => "lowercase",
        }
    }
}

/// Three-step size scale shared by headings and entry titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTier {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameSize {
    Small,
    Medium,
    #[default]
    Large,
    Xlarge,
}

impl NameSize {
    pub fn em(self) -> f64 {
        match self {
            NameSize::Small => 1.5,
            NameSize::Medium => 2.0,
            NameSize::Large => 2.5,
            NameSize::Xlarge => 3.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    /// Flexbox equivalent for rows of items.
    pub fn justify(self) -> &'static str {
        match self {
            Align::Left => "flex-start",
            Align::Center => "center",
            Align::Right => "flex-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailsArrangement {
    #[default]
    Row,
    Wrap,
    Bullet,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    #[default]
    #[serde(rename = "none")]
    Hidden,
    Outline,
    Filled,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameFont {
    #[default]
    Body,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameArrangement {
    #[default]
    Row,
    Stacked,
    StackedReverse,
}

/// How a skills or languages collection is drawn. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Grid,
    Level,
    Compact,
    Bubble,
    Text,
    Dots,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationOrder {
    #[default]
    DegreeSchool,
    SchoolDegree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceOrder {
    #[default]
    TitleEmployer,
    EmployerTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryLayout {
    #[default]
    Stacked,
    Inline,
    Timeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubtitleStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubtitlePlacement {
    SameLine,
    #[default]
    NextLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyle {
    #[default]
    Bullet,
    Hyphen,
    #[serde(rename = "none")]
    Bare,
}

impl ListStyle {
    pub fn marker(self) -> &'static str {
        match self {
            ListStyle::Bullet => "•",
            ListStyle::Hyphen => "-",
            ListStyle::Bare => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "MM/YYYY")]
    NumericMonth,
    #[serde(rename = "YYYY")]
    YearOnly,
    #[serde(rename = "MMM YYYY")]
    ShortMonth,
    #[serde(rename = "MMMM YYYY")]
    LongMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoSize {
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl PhotoSize {
    pub fn px(self) -> u32 {
        match self {
            PhotoSize::Small => 64,
            PhotoSize::Medium => 96,
            PhotoSize::Large => 128,
            PhotoSize::Xlarge => 160,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

// ────────────────────────────────────────────────────────────────────────────
// Nested flag groups
// ────────────────────────────────────────────────────────────────────────────

/// Which semantic elements take the accent colour. All off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentTargets {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub job_title: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub headings: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub dates: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub link_icons: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub icons_bars: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub headings_line: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub header_icons: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawBorderSides {
    #[serde(default, deserialize_with = "lenient")]
    pub top: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub bottom: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub left: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub right: Option<bool>,
}

/// Page border sides; a side left unspecified is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl From<RawBorderSides> for BorderSides {
    fn from(raw: RawBorderSides) -> Self {
        Self {
            top: raw.top.unwrap_or(true),
            bottom: raw.bottom.unwrap_or(true),
            left: raw.left.unwrap_or(true),
            right: raw.right.unwrap_or(true),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    // Spacing
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub left_right_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub top_bottom_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<SectionSpacing>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_spacing: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub content_scale: Option<f64>,

    // Layout
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub column_width: Option<f64>,

    // Font
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    // Colours
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_border: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub border_sides: Option<RawBorderSides>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub apply_accent_to: Option<AccentTargets>,

    // Section headings
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading_style: Option<HeadingStyle>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading_capitalization: Option<HeadingCase>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading_size: Option<SizeTier>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_dividers: Option<bool>,

    // Personal details
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub personal_details_align: Option<Align>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub personal_details_arrangement: Option<DetailsArrangement>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub personal_details_icon_style: Option<IconStyle>,

    // Name
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name_size: Option<NameSize>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name_bold: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name_font: Option<NameFont>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name_align: Option<Align>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name_arrangement: Option<NameArrangement>,

    // Collections
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub skills_display: Option<DisplayMode>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub languages_display: Option<DisplayMode>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub education_order: Option<EducationOrder>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub experience_order: Option<ExperienceOrder>,

    // Entries
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_layout: Option<EntryLayout>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_title_size: Option<SizeTier>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_subtitle_style: Option<SubtitleStyle>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_subtitle_placement: Option<SubtitlePlacement>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_description_indent: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entry_list_style: Option<ListStyle>,

    // Footer
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_page_numbers: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_footer_email: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_footer_name: Option<bool>,

    // Advanced
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reduce_date_location_opacity: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub date_format: Option<DateFormat>,

    // Photo
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<PhotoSize>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo_shape: Option<PhotoShape>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo_position: Option<Align>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo_border: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo_border_color: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved settings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSettings {
    pub font_size_pt: f64,
    pub line_height: f64,
    pub margin_lr_mm: f64,
    pub margin_tb_mm: f64,
    pub section_spacing: SectionSpacing,
    pub entry_spacing_px: f64,
    pub content_scale: f64,
    /// Sidebar width override in percent; `None` keeps the template default.
    pub column_width: Option<f64>,
    pub font_family: String,
    /// Always a normalized `#rrggbb`.
    pub accent: String,
    pub show_border: bool,
    pub border_sides: BorderSides,
    pub accent_targets: AccentTargets,
    pub heading_style: HeadingStyle,
    pub heading_case: HeadingCase,
    pub heading_size: SizeTier,
    pub show_dividers: bool,
    pub details_align: Align,
    pub details_arrangement: DetailsArrangement,
    pub details_icon_style: IconStyle,
    pub name_size: NameSize,
    pub name_bold: bool,
    pub name_font: NameFont,
    pub name_align: Align,
    pub name_arrangement: NameArrangement,
    pub skills_display: DisplayMode,
    pub languages_display: DisplayMode,
    pub education_order: EducationOrder,
    pub experience_order: ExperienceOrder,
    pub entry_layout: EntryLayout,
    pub entry_title_size: SizeTier,
    pub subtitle_style: SubtitleStyle,
    pub subtitle_placement: SubtitlePlacement,
    pub description_indent: bool,
    pub list_style: ListStyle,
    pub show_page_numbers: bool,
    pub show_footer_email: bool,
    pub show_footer_name: bool,
    pub reduce_date_opacity: bool,
    /// `None` shows dates as entered.
    pub date_format: Option<DateFormat>,
    pub photo_size: PhotoSize,
    pub photo_shape: PhotoShape,
    pub photo_position: Align,
    pub photo_border: bool,
    /// Normalized hex; falls back to the accent.
    pub photo_border_color: String,
}

pub const FONT_SIZE_RANGE: (f64, f64) = (8.0, 14.0);
pub const LINE_HEIGHT_RANGE: (f64, f64) = (1.0, 2.0);
pub const MARGIN_RANGE: (f64, f64) = (10.0, 50.0);
pub const ENTRY_SPACING_RANGE: (f64, f64) = (0.0, 20.0);
pub const CONTENT_SCALE_RANGE: (f64, f64) = (0.85, 1.15);
pub const COLUMN_WIDTH_RANGE: (f64, f64) = (30.0, 70.0);

impl ResumeSettings {
    /// Substitutes every default and clamps every number. Never fails.
    pub fn resolve(raw: &RawSettings) -> Self {
        let accent = match raw.accent_color.as_deref() {
            None => DEFAULT_ACCENT.to_string(),
            Some(value) => color::normalize_hex(value).unwrap_or_else(|| {
                debug!(accent = value, "invalid accent colour, using default");
                DEFAULT_ACCENT.to_string()
            }),
        };
        let photo_border_color = raw
            .photo_border_color
            .as_deref()
            .and_then(color::normalize_hex)
            .unwrap_or_else(|| accent.clone());
        let skills_display = raw.skills_display.unwrap_or(DisplayMode::Bubble);
        // The proficiency bar has no language counterpart.
        let languages_display = match raw.languages_display {
            Some(DisplayMode::Level) | None => DisplayMode::Text,
            Some(mode) => mode,
        };

        Self {
            font_size_pt: clamp_or(raw.font_size, 10.0, FONT_SIZE_RANGE),
            line_height: clamp_or(raw.line_height, 1.25, LINE_HEIGHT_RANGE),
            margin_lr_mm: clamp_or(raw.left_right_margin, 20.0, MARGIN_RANGE),
            margin_tb_mm: clamp_or(raw.top_bottom_margin, 15.0, MARGIN_RANGE),
            section_spacing: raw.section_spacing.unwrap_or_default(),
            entry_spacing_px: clamp_or(raw.entry_spacing, 8.0, ENTRY_SPACING_RANGE),
            content_scale: clamp_or(raw.content_scale, 1.0, CONTENT_SCALE_RANGE),
            column_width: raw
                .column_width
                .filter(|w| w.is_finite())
                .map(|w| w.clamp(COLUMN_WIDTH_RANGE.0, COLUMN_WIDTH_RANGE.1)),
            font_family: raw
                .font_family
                .as_deref()
                .and_then(sanitize_font_family)
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            accent,
            show_border: raw.show_border.unwrap_or(false),
            border_sides: raw.border_sides.unwrap_or_default().into(),
            accent_targets: raw.apply_accent_to.unwrap_or_default(),
            heading_style: raw.heading_style.unwrap_or_default(),
            heading_case: raw.heading_capitalization.unwrap_or_default(),
            heading_size: raw.heading_size.unwrap_or_default(),
            show_dividers: raw.show_dividers.unwrap_or(false),
            details_align: raw.personal_details_align.unwrap_or_default(),
            details_arrangement: raw.personal_details_arrangement.unwrap_or_default(),
            details_icon_style: raw.personal_details_icon_style.unwrap_or_default(),
            name_size: raw.name_size.unwrap_or_default(),
            name_bold: raw.name_bold.unwrap_or(true),
            name_font: raw.name_font.unwrap_or_default(),
            name_align: raw.name_align.unwrap_or_default(),
            name_arrangement: raw.name_arrangement.unwrap_or_default(),
            skills_display,
            languages_display,
            education_order: raw.education_order.unwrap_or_default(),
            experience_order: raw.experience_order.unwrap_or_default(),
            entry_layout: raw.entry_layout.unwrap_or_default(),
            entry_title_size: raw.entry_title_size.unwrap_or_default(),
            subtitle_style: raw.entry_subtitle_style.unwrap_or_default(),
            subtitle_placement: raw.entry_subtitle_placement.unwrap_or_default(),
            description_indent: raw.entry_description_indent.unwrap_or(false),
            list_style: raw.entry_list_style.unwrap_or_default(),
            show_page_numbers: raw.show_page_numbers.unwrap_or(false),
            show_footer_email: raw.show_footer_email.unwrap_or(false),
            show_footer_name: raw.show_footer_name.unwrap_or(false),
            reduce_date_opacity: raw.reduce_date_location_opacity.unwrap_or(false),
            date_format: raw.date_format,
            photo_size: raw.photo_size.unwrap_or_default(),
            photo_shape: raw.photo_shape.unwrap_or_default(),
            photo_position: raw.photo_position.unwrap_or(Align::Center),
            photo_border: raw.photo_border.unwrap_or(false),
            photo_border_color,
        }
    }

    /// Sidebar width in percent, honouring the user override.
    pub fn sidebar_width(&self, template_default: f64) -> f64 {
        self.column_width.unwrap_or(template_default)
    }

    pub fn footer_enabled(&self) -> bool {
        self.show_page_numbers || self.show_footer_email || self.show_footer_name
    }
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self::resolve(&RawSettings::default())
    }
}

fn clamp_or(value: Option<f64>, default: f64, (min, max): (f64, f64)) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

/// Strips characters that could escape a CSS declaration.
fn sanitize_font_family(value: &str) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ResumeSettings {
        let raw: RawSettings = serde_json::from_str(json).unwrap();
        ResumeSettings::resolve(&raw)
    }

    #[test]
    fn test_empty_settings_apply_every_default() {
        let s = parse("{}");
        assert_eq!(s.font_size_pt, 10.0);
        assert_eq!(s.line_height, 1.25);
        assert_eq!(s.margin_lr_mm, 20.0);
        assert_eq!(s.margin_tb_mm, 15.0);
        assert_eq!(s.entry_spacing_px, 8.0);
        assert_eq!(s.content_scale, 1.0);
        assert_eq!(s.accent, DEFAULT_ACCENT);
        assert_eq!(s.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(s.heading_style, HeadingStyle::LineBelow);
        assert_eq!(s.heading_case, HeadingCase::Uppercase);
        assert_eq!(s.name_size, NameSize::Large);
        assert!(s.name_bold);
        assert_eq!(s.skills_display, DisplayMode::Bubble);
        assert_eq!(s.languages_display, DisplayMode::Text);
        assert_eq!(s.subtitle_placement, SubtitlePlacement::NextLine);
        assert_eq!(s.photo_position, Align::Center);
        assert_eq!(s.photo_border_color, DEFAULT_ACCENT);
        assert!(!s.accent_targets.name);
        assert!(s.border_sides.top && s.border_sides.left);
        assert_eq!(s.date_format, None);
    }

    #[test]
    fn test_out_of_range_numbers_are_clamped() {
        let s = parse(
            r#"{"fontSize": 40, "lineHeight": 0.2, "leftRightMargin": 5,
                "entrySpacing": -3, "contentScale": 3, "columnWidth": 90}"#,
        );
        assert_eq!(s.font_size_pt, 14.0);
        assert_eq!(s.line_height, 1.0);
        assert_eq!(s.margin_lr_mm, 10.0);
        assert_eq!(s.entry_spacing_px, 0.0);
        assert_eq!(s.content_scale, 1.15);
        assert_eq!(s.column_width, Some(70.0));
    }

    #[test]
    fn test_invalid_accent_degrades_to_default() {
        assert_eq!(parse(r#"{"accentColor": "purple"}"#).accent, DEFAULT_ACCENT);
        assert_eq!(parse(r##"{"accentColor": "#12345"}"##).accent, DEFAULT_ACCENT);
        assert_eq!(parse(r##"{"accentColor": "#ABC"}"##).accent, "#aabbcc");
    }

    #[test]
    fn test_unknown_enum_values_fall_back_without_failing() {
        let s = parse(
            r#"{"headingStyle": "wavy", "skillsDisplay": 7, "fontSize": 12,
                "applyAccentTo": {"name": true, "dates": "sometimes"}}"#,
        );
        assert_eq!(s.heading_style, HeadingStyle::LineBelow);
        assert_eq!(s.skills_display, DisplayMode::Bubble);
        assert_eq!(s.font_size_pt, 12.0);
        assert!(s.accent_targets.name);
        assert!(!s.accent_targets.dates);
    }

    #[test]
    fn test_kebab_case_values_parse() {
        let s = parse(
            r#"{"headingStyle": "none", "nameArrangement": "stacked-reverse",
                "entryListStyle": "none", "dateFormat": "MMM YYYY",
                "personalDetailsIconStyle": "none", "educationOrder": "school-degree"}"#,
        );
        assert_eq!(s.heading_style, HeadingStyle::Plain);
        assert_eq!(s.name_arrangement, NameArrangement::StackedReverse);
        assert_eq!(s.list_style, ListStyle::Bare);
        assert_eq!(s.date_format, Some(DateFormat::ShortMonth));
        assert_eq!(s.details_icon_style, IconStyle::Hidden);
        assert_eq!(s.education_order, EducationOrder::SchoolDegree);
    }

    #[test]
    fn test_languages_ignore_level_mode() {
        assert_eq!(
            parse(r#"{"languagesDisplay": "level"}"#).languages_display,
            DisplayMode::Text
        );
        assert_eq!(
            parse(r#"{"languagesDisplay": "dots"}"#).languages_display,
            DisplayMode::Dots
        );
    }

    #[test]
    fn test_font_family_is_sanitized() {
        let s = parse(r#"{"fontFamily": "Georgia; } body { color: red"}"#);
        assert!(!s.font_family.contains(';'));
        assert!(!s.font_family.contains('{'));
        assert_eq!(parse(r#"{"fontFamily": ";;"}"#).font_family, DEFAULT_FONT_FAMILY);
    }
}
