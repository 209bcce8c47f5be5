//! Section rendering shared by all templates.

pub mod dates;
pub mod node;
pub mod sections;

pub use node::{el, Element, Node};

use crate::models::resume::{PersonalInfo, ResumeData};
use crate::models::settings::ResumeSettings;
use crate::style::StyleResolver;

/// Everything a template needs for one render: the snapshot, its resolved
/// settings and the resolvers bound to them.
pub struct RenderContext<'a> {
    pub data: &'a ResumeData,
    pub settings: &'a ResumeSettings,
    pub styles: StyleResolver<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(data: &'a ResumeData, settings: &'a ResumeSettings) -> Self {
        Self {
            data,
            settings,
            styles: StyleResolver::new(settings),
        }
    }

    pub fn accent(&self) -> &'a str {
        &self.settings.accent
    }

    pub fn info(&self) -> &'a PersonalInfo {
        &self.data.personal_info
    }
}
