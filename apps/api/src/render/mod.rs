//! Rendering pipeline — canonical record + template descriptor → HTML.
//!
//! Two strategies: the asset path (a pre-authored markup file compiled
//! against the record) and the programmatic path (style generator + section
//! assembler). The `MarkupRenderer` dispatches between them.

pub mod handlers;
pub mod markup;
pub mod registry;
pub mod sections;
pub mod styles;
pub mod template;

pub use markup::MarkupRenderer;
pub use registry::TemplateRegistry;
pub use template::{TemplateConfig, TemplateDescriptor};
