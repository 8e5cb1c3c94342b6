use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::docs;
use crate::error::{ApiError, ValidatedJson};
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Web client
        .route("/", get(serve_index))

        // Health check
        .route("/health", get(health_check))

        // Translation API
        .route("/translation", post(translate))

        // API documentation
        .route("/docs", get(docs::serve_docs))
        .route("/docs/openapi.json", get(docs::openapi_json))
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Translate text with the configured model
#[utoipa::path(
    post,
    path = "/translation",
    tag = "translation",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translated text", body = TranslationResponse),
        (status = 400, description = "The model declined the request, or the body failed validation", body = crate::translate::TranslationDeniedResponse),
        (status = 413, description = "Request body over the size limit", body = crate::error::ServerErrorResponse),
        (status = 500, description = "Model backend failure or malformed model output", body = crate::error::ServerErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let span = info_span!("translation", request_id = %Uuid::new_v4());

    async move {
        debug!("API request: {:?}", request);
        let response = state.translation_service.translate(request).await?;
        debug!("API response: {:?}", response);
        Ok::<_, ApiError>(Json(response))
    }
    .instrument(span)
    .await
}
