use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa::OpenApi;

use crate::error::{ServerErrorResponse, ValidationErrorResponse, ValidationIssue};
use crate::translate::{TranslationDeniedResponse, TranslationRequest, TranslationResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::translate),
    components(schemas(
        TranslationRequest,
        TranslationResponse,
        TranslationDeniedResponse,
        ValidationErrorResponse,
        ValidationIssue,
        ServerErrorResponse
    )),
    tags((name = "translation", description = "LLM backed text translation"))
)]
pub struct ApiDoc;

/// Write the OpenAPI document next to the binary's working directory
pub fn write_openapi(path: &str) -> anyhow::Result<()> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(path, document)?;
    Ok(())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn serve_docs() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/docs.html"),
    )
}
