use std::sync::Arc;

use crate::config::Config;
use crate::pdf::PdfExporter;
use crate::render::MarkupRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The rendering pipeline. Stateless between calls; shared for cheap
    /// handler clones.
    pub renderer: Arc<MarkupRenderer>,
    /// Pluggable PDF exporter. Default: HttpPdfExporter against PDF_SERVICE_URL.
    pub pdf: Arc<dyn PdfExporter>,
}
