use crate::common::{BankSource, RateScraperError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A failed bank request, scoped to that request only.
#[derive(Debug)]
pub struct ApiError {
    pub source: BankSource,
    pub error: RateScraperError,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    code: u16,
    message: String,
    bank: String,
}

impl ApiError {
    pub fn new(source: BankSource, error: RateScraperError) -> Self {
        Self { source, error }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            RateScraperError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            e if e.is_upstream() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(bank = %self.source, status = status.as_u16(), "request failed: {}", self.error);

        let body = Json(ApiErrorBody {
            code: status.as_u16(),
            message: self.error.to_string(),
            bank: self.source.descriptor().name.to_string(),
        });
        (status, body).into_response()
    }
}
