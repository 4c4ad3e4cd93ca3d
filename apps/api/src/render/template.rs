//! Template descriptor value types.
//!
//! Owned by the external template-management collaborator and consumed
//! read-only here. Everything is tolerant by construction: unknown JSON keys
//! are ignored, missing keys fall back to defaults, and unrecognized layout
//! or section values degrade instead of faulting.

use serde::{Deserialize, Serialize};

/// A named block of resume content, independently includable per template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    /// Renders the record's custom sections (awards, certifications, ...).
    Custom,
}

impl SectionKind {
    /// Parses a section token. Unknown tokens yield `None` and are skipped
    /// by the assembler rather than treated as errors.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "header" => Some(Self::Header),
            "summary" => Some(Self::Summary),
            "experience" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Custom => "custom",
        }
    }
}

/// Section set used when a template config omits `sections`.
pub const DEFAULT_SECTIONS: &[SectionKind] = &[
    SectionKind::Header,
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
];

const TWO_COLUMN: &str = "two-column";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub heading: Option<String>,
    pub body: Option<String>,
}

/// Visual and structural configuration for a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub colors: ColorConfig,
    pub fonts: FontConfig,
    /// `"single-column"` or `"two-column"`. Any other value (including the
    /// empty default) is treated as single-column, never as a fault.
    pub layout: String,
    /// Ordered section tokens. Absent means the documented default set.
    pub sections: Option<Vec<String>>,
}

impl TemplateConfig {
    pub fn is_two_column(&self) -> bool {
        self.layout == TWO_COLUMN
    }

    /// The effective section list: configured tokens with unknown ones
    /// dropped, or `DEFAULT_SECTIONS` when no list was configured.
    pub fn resolved_sections(&self) -> Vec<SectionKind> {
        match &self.sections {
            Some(tokens) => tokens
                .iter()
                .filter_map(|token| SectionKind::parse(token))
                .collect(),
            None => DEFAULT_SECTIONS.to_vec(),
        }
    }
}

/// A template name plus its visual configuration. The name drives asset
/// lookup; the config drives the programmatic path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDescriptor {
    pub name: String,
    pub template_config: TemplateConfig,
}
