//! Markup renderer — dispatches between the asset path and the
//! programmatic path.
//!
//! The asset path compiles a pre-authored template file against the record.
//! A missing or uncompilable asset is an expected, silent condition — it is
//! modeled as the `AssetOutcome::Unavailable` variant, not an error, and
//! triggers the programmatic path (style generator + section assembler).
//! Nothing in the fallback chain throws past this boundary.

use std::fs;
use std::path::PathBuf;

use minijinja::{AutoEscape, Environment};
use tracing::debug;

use crate::errors::AppError;
use crate::render::registry::TemplateRegistry;
use crate::render::sections::assemble_sections;
use crate::render::styles::generate_styles;
use crate::render::template::TemplateDescriptor;
use crate::schema::canonical::CanonicalResume;

/// Result of an asset-path attempt. `Unavailable` is an intended branch,
/// covering both read and compile failures.
#[derive(Debug)]
pub enum AssetOutcome {
    Rendered(String),
    Unavailable,
}

pub struct MarkupRenderer {
    registry: TemplateRegistry,
    assets_dir: PathBuf,
}

impl MarkupRenderer {
    pub fn new(registry: TemplateRegistry, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            assets_dir: assets_dir.into(),
        }
    }

    /// Renders the record with the given template.
    ///
    /// Tries the asset path once, then the programmatic path; the two are
    /// never retried against each other. The programmatic path is total, so
    /// `Err` is reserved for genuinely unrecoverable faults.
    pub fn render(
        &self,
        record: &CanonicalResume,
        template: &TemplateDescriptor,
    ) -> Result<String, AppError> {
        match self.try_asset(record, &template.name) {
            AssetOutcome::Rendered(html) => Ok(html),
            AssetOutcome::Unavailable => Ok(self.render_programmatic(record, template)),
        }
    }

    /// Attempts asset-based rendering: registry lookup, file read, template
    /// compile against the record.
    fn try_asset(&self, record: &CanonicalResume, name: &str) -> AssetOutcome {
        let asset = self.registry.resolve(name);
        let path = self.assets_dir.join(asset);

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                debug!("template asset {} unavailable: {err}", path.display());
                return AssetOutcome::Unavailable;
            }
        };

        // Auto-escape is keyed on the template name's extension, and
        // `render_str` renders under the name `<string>` — force HTML
        // escaping so the asset path honors the same contract as the
        // programmatic path.
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        match env.render_str(&source, record) {
            Ok(html) => AssetOutcome::Rendered(html),
            Err(err) => {
                debug!("template asset {} failed to compile: {err}", path.display());
                AssetOutcome::Unavailable
            }
        }
    }

    /// Builds a complete HTML document from the template config alone.
    fn render_programmatic(&self, record: &CanonicalResume, template: &TemplateDescriptor) -> String {
        let config = &template.template_config;
        format!(
            "<!DOCTYPE html>\
             <html><head><meta charset=\"utf-8\"><style>{}</style></head>\
             <body><div class=\"resume\">{}</div></body></html>",
            generate_styles(config),
            assemble_sections(record, config),
        )
    }
}
