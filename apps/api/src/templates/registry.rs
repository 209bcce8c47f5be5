//! The closed set of templates and identifier lookup.

use tracing::warn;

use super::{banner, showcase, sidebar, single_column, Template, TemplateDefinition, TemplateInfo};

pub const DEFAULT_TEMPLATE_ID: &str = "modern";

static MODERN: Template = Template::new(
    TemplateInfo {
        id: "modern",
        name: "Modern Professional",
        description: "Clean, balanced, and perfect for any industry.",
        has_image: false,
    },
    single_column::modern,
);

/// Catalogue order.
static TEMPLATES: &[&Template] = &[
    &Template::new(
        TemplateInfo {
            id: "mercury",
            name: "Mercury",
            description: "Two-column with dark navy sidebar and profile photo.",
            has_image: true,
        },
        sidebar::mercury,
    ),
    &Template::new(
        TemplateInfo {
            id: "finance",
            name: "Finance",
            description: "Clean single-column for financial professionals.",
            has_image: false,
        },
        single_column::finance,
    ),
    &Template::new(
        TemplateInfo {
            id: "steady-form",
            name: "Steady Form",
            description: "Right sidebar with green accent and profile photo.",
            has_image: true,
        },
        sidebar::steady_form,
    ),
    &Template::new(
        TemplateInfo {
            id: "simply-blue",
            name: "Simply Blue",
            description: "Left blue accent bar with modern styling.",
            has_image: false,
        },
        sidebar::simply_blue,
    ),
    &Template::new(
        TemplateInfo {
            id: "harvard",
            name: "Harvard",
            description: "Academic single-column style with serif fonts.",
            has_image: false,
        },
        single_column::harvard,
    ),
    &Template::new(
        TemplateInfo {
            id: "blue-steel",
            name: "Blue Steel",
            description: "Right sidebar with lavender accent and photo.",
            has_image: true,
        },
        sidebar::blue_steel,
    ),
    &Template::new(
        TemplateInfo {
            id: "hunter-green",
            name: "Hunter Green",
            description: "Right green sidebar with modern typography.",
            has_image: true,
        },
        sidebar::hunter_green,
    ),
    &Template::new(
        TemplateInfo {
            id: "evergreen-slate",
            name: "Evergreen Slate",
            description: "Left blue header banner with technical focus.",
            has_image: true,
        },
        banner::evergreen_slate,
    ),
    &Template::new(
        TemplateInfo {
            id: "banking",
            name: "Banking",
            description: "Financial professional single-column style.",
            has_image: false,
        },
        single_column::banking,
    ),
    &Template::new(
        TemplateInfo {
            id: "refined",
            name: "Refined",
            description: "Right sidebar with courses and certifications.",
            has_image: true,
        },
        sidebar::refined,
    ),
    &Template::new(
        TemplateInfo {
            id: "modern-photo",
            name: "Modern Photo",
            description: "Contemporary design with profile image.",
            has_image: true,
        },
        single_column::modern_photo,
    ),
    &MODERN,
    &Template::new(
        TemplateInfo {
            id: "classic",
            name: "Classic Standard",
            description: "Traditional layout for conservative fields.",
            has_image: false,
        },
        single_column::classic,
    ),
    &Template::new(
        TemplateInfo {
            id: "corporate",
            name: "Executive Corporate",
            description: "Focus on leadership and impact.",
            has_image: false,
        },
        sidebar::corporate,
    ),
    &Template::new(
        TemplateInfo {
            id: "minimal",
            name: "Minimalist Clean",
            description: "Less is more. High readability.",
            has_image: false,
        },
        single_column::minimal,
    ),
    &Template::new(
        TemplateInfo {
            id: "creative",
            name: "Creative Flair",
            description: "Bold design for creative professionals.",
            has_image: false,
        },
        showcase::creative,
    ),
    &Template::new(
        TemplateInfo {
            id: "technical",
            name: "Technical Geek",
            description: "Compact layout optimized for skills.",
            has_image: false,
        },
        single_column::technical,
    ),
    &Template::new(
        TemplateInfo {
            id: "elegant",
            name: "Elegant Serif",
            description: "Refined typography for high-end roles.",
            has_image: false,
        },
        showcase::elegant,
    ),
    &Template::new(
        TemplateInfo {
            id: "startup",
            name: "Startup Modern",
            description: "Fresh and energetic layout.",
            has_image: false,
        },
        showcase::startup,
    ),
];

/// Exact-match lookup. Unknown or missing ids fall back to `fallback`; an
/// unknown id is logged but never reported to the caller. A `fallback` that
/// names no template degrades to [`DEFAULT_TEMPLATE_ID`].
pub fn resolve_or(id: Option<&str>, fallback: &str) -> &'static dyn TemplateDefinition {
    let fallback_template = || find(fallback).unwrap_or(&MODERN);
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        return fallback_template();
    };
    match find(id) {
        Some(template) => template,
        None => {
            warn!(template_id = id, fallback, "unknown template id, using fallback");
            fallback_template()
        }
    }
}

fn find(id: &str) -> Option<&'static dyn TemplateDefinition> {
    TEMPLATES
        .iter()
        .find(|t| t.info().id == id)
        .map(|t| *t as &'static dyn TemplateDefinition)
}

pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}

pub fn catalogue() -> Vec<TemplateInfo> {
    TEMPLATES.iter().map(|t| *t.info()).collect()
}
