//! Template registry — immutable template-name → asset-filename lookup.
//!
//! Injected into the `MarkupRenderer` at construction rather than living as
//! module-level state, so the fallback path is testable by handing the
//! renderer a registry with deliberately-missing entries.

use std::collections::HashMap;

/// Asset filename used for any template name without a registry entry.
pub const DEFAULT_ASSET: &str = "classic.html";

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: HashMap<String, String>,
    default_asset: String,
}

impl TemplateRegistry {
    pub fn new(entries: HashMap<String, String>, default_asset: impl Into<String>) -> Self {
        Self {
            entries,
            default_asset: default_asset.into(),
        }
    }

    /// Resolves a template name to its asset filename. Unmapped names fall
    /// back to the default asset — an unknown name is not an error.
    pub fn resolve(&self, name: &str) -> &str {
        self.entries
            .get(name)
            .map(String::as_str)
            .unwrap_or(&self.default_asset)
    }
}

impl Default for TemplateRegistry {
    /// The built-in template catalog.
    fn default() -> Self {
        let entries = [
            ("classic", "classic.html"),
            ("modern", "modern.html"),
            ("minimal", "minimal.html"),
            ("professional", "professional.html"),
            ("creative", "creative.html"),
        ]
        .into_iter()
        .map(|(name, asset)| (name.to_string(), asset.to_string()))
        .collect();
        Self::new(entries, DEFAULT_ASSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve_to_their_assets() {
        let registry = TemplateRegistry::default();
        assert_eq!(registry.resolve("modern"), "modern.html");
        assert_eq!(registry.resolve("minimal"), "minimal.html");
    }

    #[test]
    fn test_unmapped_name_falls_back_to_default() {
        let registry = TemplateRegistry::default();
        assert_eq!(registry.resolve("does-not-exist"), DEFAULT_ASSET);
        assert_eq!(registry.resolve(""), DEFAULT_ASSET);
    }

    #[test]
    fn test_injected_registry_overrides_builtins() {
        let entries = [("classic".to_string(), "bespoke.html".to_string())]
            .into_iter()
            .collect();
        let registry = TemplateRegistry::new(entries, "fallback.html");
        assert_eq!(registry.resolve("classic"), "bespoke.html");
        assert_eq!(registry.resolve("modern"), "fallback.html");
    }
}
