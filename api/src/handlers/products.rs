//! Product lookup handlers
//!
//! A single POST endpoint serving three actions: barcode resolution (the
//! default), image repair, and photo analysis.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Barcode;
use crate::error::AppError;
use crate::AppState;

/// What the client wants done. Absent means "resolve the barcode".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupAction {
    FixImage,
    AnalyzeImage,
}

/// Request body for POST /lookup
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub barcode: Option<String>,
    pub action: Option<LookupAction>,
    /// Known product name (fix_image)
    pub product_name: Option<String>,
    /// Known brand (fix_image)
    pub brand: Option<String>,
    /// Photo as a `data:image/...;base64,` URL (analyze_image)
    pub image: Option<String>,
}

/// Response body for the fix_image action
#[derive(Debug, Serialize)]
pub struct FixImageResponse {
    pub image: Option<String>,
}

/// POST /lookup
///
/// Resolve a barcode into a product record, or run one of the image actions.
pub async fn lookup(
    State(state): State<AppState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let service = &state.product_service;

    match request.action {
        Some(LookupAction::FixImage) => {
            let name = request.product_name.as_deref().unwrap_or_default();
            let image = service.fix_image(name, request.brand.as_deref()).await?;
            Ok(Json(FixImageResponse { image }).into_response())
        }
        Some(LookupAction::AnalyzeImage) => {
            let image = request
                .image
                .as_deref()
                .filter(|i| !i.trim().is_empty())
                .ok_or_else(|| AppError::BadRequest("image is required".to_string()))?;
            let analyzed = service.analyze_image(image).await?;
            Ok(Json(analyzed).into_response())
        }
        None => {
            let raw = request
                .barcode
                .as_deref()
                .ok_or_else(|| AppError::BadRequest("barcode is required".to_string()))?;
            let barcode = Barcode::parse(raw)?;
            let record = service.resolve_barcode(&barcode).await?;
            Ok(Json(record).into_response())
        }
    }
}

/// OPTIONS /lookup
///
/// Bare 200 for CORS preflights that reach the router.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
