use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::render::template::TemplateDescriptor;
use crate::schema::canonical::CanonicalResume;
use crate::schema::normalizer::normalize;
use crate::schema::validator::{validate, ValidationResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Resume data in any historical shape — normalized before rendering.
    pub resume: Value,
    #[serde(default)]
    pub template: TemplateDescriptor,
}

/// POST /api/v1/resumes/normalize
///
/// Accepts any JSON body. Normalization is total, so this handler cannot
/// fail — callers never see a normalization exception.
pub async fn handle_normalize(Json(body): Json<Value>) -> Json<CanonicalResume> {
    Json(normalize(&body))
}

/// POST /api/v1/resumes/validate
///
/// Structural check for migration and import tooling. Always 200 — the
/// verdict lives in the body, not the status code.
pub async fn handle_validate(Json(body): Json<Value>) -> Json<ValidationResult> {
    Json(validate(&body))
}

/// POST /api/v1/resumes/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let record = normalize(&req.resume);
    let html = state.renderer.render(&record, &req.template)?;
    Ok(Html(html))
}

/// POST /api/v1/resumes/render/pdf
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = normalize(&req.resume);
    let html = state.renderer.render(&record, &req.template)?;
    let pdf = state.pdf.export(&html).await?;
    Ok(([(header::CONTENT_TYPE, "application/pdf")], pdf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pdf::testing::StubPdfExporter;
    use crate::render::{MarkupRenderer, TemplateRegistry};
    use serde_json::json;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                pdf_service_url: "http://localhost:3001/convert".to_string(),
                templates_dir: "/nonexistent/assets".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            renderer: Arc::new(MarkupRenderer::new(
                TemplateRegistry::default(),
                "/nonexistent/assets",
            )),
            pdf: Arc::new(StubPdfExporter),
        }
    }

    #[tokio::test]
    async fn test_normalize_handler_is_total() {
        let Json(record) = handle_normalize(Json(json!("not even an object"))).await;
        assert_eq!(record, CanonicalResume::empty());
    }

    #[tokio::test]
    async fn test_validate_handler_reports_verdict_in_body() {
        let Json(result) = handle_validate(Json(json!({"profile": "nope"}))).await;
        assert!(!result.valid);

        let record = normalize(&json!({"name": "Ada"}));
        let Json(result) = handle_validate(Json(serde_json::to_value(&record).unwrap())).await;
        assert!(result.valid);
    }

    #[tokio::test]
    async fn test_render_handler_returns_html() {
        let req = RenderRequest {
            resume: json!({"name": "Ada"}),
            template: TemplateDescriptor::default(),
        };
        let Html(html) = handle_render(State(test_state()), Json(req)).await.unwrap();
        assert!(html.contains("Ada"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_render_request_tolerates_missing_template() {
        let req: RenderRequest =
            serde_json::from_value(json!({"resume": {"name": "Ada"}})).unwrap();
        assert_eq!(req.template, TemplateDescriptor::default());
    }

    #[tokio::test]
    async fn test_render_pdf_handler_uses_exporter() {
        let req = RenderRequest {
            resume: json!({"name": "Ada"}),
            template: TemplateDescriptor::default(),
        };
        let response = handle_render_pdf(State(test_state()), Json(req))
            .await
            .unwrap()
            .into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
    }
}
