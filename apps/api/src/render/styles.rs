//! Style generator — maps a template's visual configuration to a style
//! sheet for the programmatic rendering path.
//!
//! Every visual property has a hard default so a bare `TemplateConfig`
//! still yields a complete sheet. The print-media block is a correctness
//! requirement, not cosmetics: without `break-inside: avoid` on entry
//! blocks, the downstream PDF exporter splits experience items across
//! page boundaries.

use std::fmt::Write as _;

use crate::render::template::TemplateConfig;

pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";
pub const DEFAULT_SECONDARY_COLOR: &str = "#64748b";
pub const DEFAULT_TEXT_COLOR: &str = "#1f2937";
pub const DEFAULT_HEADING_FONT: &str = "Georgia, 'Times New Roman', serif";
pub const DEFAULT_BODY_FONT: &str = "'Helvetica Neue', Helvetica, Arial, sans-serif";

/// Generates the full style sheet for a template configuration.
///
/// `layout == "two-column"` adds grid column rules on top of the shared
/// rule set; every other layout value gets single-column rules.
pub fn generate_styles(config: &TemplateConfig) -> String {
    let primary = config
        .colors
        .primary
        .as_deref()
        .unwrap_or(DEFAULT_PRIMARY_COLOR);
    let secondary = config
        .colors
        .secondary
        .as_deref()
        .unwrap_or(DEFAULT_SECONDARY_COLOR);
    let text = config.colors.text.as_deref().unwrap_or(DEFAULT_TEXT_COLOR);
    let heading_font = config
        .fonts
        .heading
        .as_deref()
        .unwrap_or(DEFAULT_HEADING_FONT);
    let body_font = config.fonts.body.as_deref().unwrap_or(DEFAULT_BODY_FONT);

    let mut css = format!(
        "\
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{
  font-family: {body_font};
  color: {text};
  font-size: 14px;
  line-height: 1.5;
}}
.resume {{
  max-width: 820px;
  margin: 0 auto;
  padding: 32px;
}}
h1, h2 {{ font-family: {heading_font}; }}
h1 {{
  color: {primary};
  font-size: 28px;
  margin-bottom: 4px;
}}
h2 {{
  color: {primary};
  font-size: 16px;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  border-bottom: 2px solid {primary};
  padding-bottom: 4px;
  margin-bottom: 10px;
}}
.contact {{
  color: {secondary};
  font-size: 13px;
  margin-bottom: 8px;
}}
section {{ margin-bottom: 18px; }}
.entry {{ margin-bottom: 12px; }}
.entry-heading {{
  display: flex;
  justify-content: space-between;
}}
.entry-title {{ font-weight: 600; }}
.entry-duration {{ color: {secondary}; font-size: 13px; }}
.entry-subtitle {{ color: {secondary}; font-style: italic; }}
.skill-category {{ font-weight: 600; }}
"
    );

    if config.is_two_column() {
        let _ = write!(
            css,
            "\
.resume-columns {{
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 28px;
}}
.column {{ min-width: 0; }}
"
        );
    }

    // Keep repeating item blocks intact across page breaks in the exported
    // PDF. Both spellings are needed: headless print engines vary.
    css.push_str(
        "\
@media print {
  body { font-size: 12px; }
  .resume { padding: 0; }
  .entry {
    break-inside: avoid;
    page-break-inside: avoid;
  }
  section { break-inside: avoid-page; }
}
",
    );

    css
}
