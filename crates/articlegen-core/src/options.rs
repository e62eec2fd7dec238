use std::fmt;

use serde::Serialize;

use crate::Capability;

/// Article structure template the outline prompt asks the model to follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStyle {
    #[default]
    Prep,
    Aida,
    SeoArticle,
}

impl TemplateStyle {
    pub const ALL: [TemplateStyle; 3] = [
        TemplateStyle::Prep,
        TemplateStyle::Aida,
        TemplateStyle::SeoArticle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateStyle::Prep => "prep",
            TemplateStyle::Aida => "aida",
            TemplateStyle::SeoArticle => "seo_article",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "prep" => Some(TemplateStyle::Prep),
            "aida" => Some(TemplateStyle::Aida),
            "seo_article" => Some(TemplateStyle::SeoArticle),
            _ => None,
        }
    }

    /// Name used inside prompts and on the form.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateStyle::Prep => "PREP",
            TemplateStyle::Aida => "AIDA",
            TemplateStyle::SeoArticle => "SEO記事",
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual representation the aggregate output is rewritten into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Note,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
            OutputFormat::Note => "note",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "markdown" => Some(OutputFormat::Markdown),
            "html" => Some(OutputFormat::Html),
            "note" => Some(OutputFormat::Note),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "Markdown",
            OutputFormat::Html => "HTML",
            OutputFormat::Note => "note用プレーンテキスト",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the extended form lets the user choose besides the keyword.
/// All fields are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationOptions {
    pub template: TemplateStyle,
    pub title: bool,
    pub cta: bool,
    pub hashtags: bool,
    /// Ask for a short authoring note under each heading of the outline.
    pub writing_guide: bool,
    pub seo: bool,
    pub format: OutputFormat,
}

impl GenerationOptions {
    /// Capabilities that will be requested, in call order.
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| match cap {
                Capability::Structure => true,
                Capability::Title => self.title,
                Capability::Cta => self.cta,
                Capability::Hashtags => self.hashtags,
                Capability::Seo => self.seo,
            })
            .collect()
    }
}
