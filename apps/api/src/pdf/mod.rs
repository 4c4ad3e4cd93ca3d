//! PDF exporter collaborator — the single point of contact with the
//! headless-browser print service.
//!
//! The pipeline hands over finished HTML and gets PDF bytes back; everything
//! about how the document is printed lives on the other side of this
//! boundary.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

/// Converts rendered HTML to PDF bytes. Object-safe so `AppState` can hold
/// it as `Arc<dyn PdfExporter>` and tests can swap in a stub.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, html: &str) -> Result<Bytes, AppError>;
}

#[derive(Serialize)]
struct PrintRequest<'a> {
    html: &'a str,
}

/// Production exporter: posts HTML to the print service and returns the
/// response body verbatim.
pub struct HttpPdfExporter {
    client: Client,
    endpoint: String,
}

impl HttpPdfExporter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PdfExporter for HttpPdfExporter {
    async fn export(&self, html: &str) -> Result<Bytes, AppError> {
        debug!("exporting {} bytes of HTML to PDF", html.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PrintRequest { html })
            .send()
            .await
            .map_err(|e| AppError::PdfExport(format!("print service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::PdfExport(format!(
                "print service returned status {status}"
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| AppError::PdfExport(format!("failed to read PDF body: {e}")))
    }
}
