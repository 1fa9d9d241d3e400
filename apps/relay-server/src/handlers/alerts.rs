//! ANPR alert intake.

use actix_web::{HttpResponse, http::header::ContentType, web};
use tracing_actix_web::RequestId;

use crate::middleware::error::{AppError, AppResult, REQUEST_ID_HEADER};
use crate::state::AppState;

/// Relay one ANPR alert to the incoming webhook.
///
/// POST /api/alerts
pub async fn relay_alert(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let request_id = request_id.to_string();
    let message = state
        .relay
        .handle(&body)
        .await
        .map_err(|e| AppError::from(e).with_request_id(request_id.as_str()))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .insert_header((REQUEST_ID_HEADER, request_id))
        .body(message))
}
