use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::service::{MailService, MailServiceError};

use crate::dto::SendMailRequest;

#[debug_handler]
pub async fn send_mail(
    State(service): State<Arc<MailService>>,
    Json(payload): Json<SendMailRequest>,
) -> Response {
    match service.relay(payload).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to relay mail request: {e}");
            match e {
                MailServiceError::MissingField(_) => {
                    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
                }
                MailServiceError::ProviderTimeout(_) => {
                    (StatusCode::GATEWAY_TIMEOUT, "Provider request timed out").into_response()
                }
                MailServiceError::ProviderUnreachable(_) => {
                    (StatusCode::BAD_GATEWAY, "Failed to reach provider").into_response()
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to relay mail request",
                )
                    .into_response(),
            }
        }
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from mail relay!").into_response()
}
