//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use anpr_core::RelayError;
use serde::Serialize;
use std::fmt;

/// Header echoing the request id on relay responses.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request ID for debugging purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            request_id: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    BadGateway(String),
    /// Any of the above, tagged with the id of the request that failed.
    Tagged {
        error: Box<AppError>,
        request_id: String,
    },
}

impl AppError {
    /// Attach the request id to the problem body and response headers.
    pub fn with_request_id(self, request_id: impl Into<String>) -> Self {
        let error = match self {
            AppError::Tagged { error, .. } => error,
            other => Box::new(other),
        };
        AppError::Tagged {
            error,
            request_id: request_id.into(),
        }
    }

    fn problem(&self) -> ErrorResponse {
        match self {
            AppError::BadRequest(detail) => {
                ErrorResponse::new(400, "Bad Request").with_detail(detail)
            }
            AppError::BadGateway(detail) => {
                ErrorResponse::new(502, "Bad Gateway").with_detail(detail)
            }
            AppError::Tagged { error, request_id } => error.problem().with_request_id(request_id),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            AppError::Tagged { error, request_id } => write!(f, "{} (request {})", error, request_id),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Tagged { error, .. } => error.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let AppError::Tagged { request_id, .. } = self {
            response.insert_header((REQUEST_ID_HEADER, request_id.as_str()));
        }

        response.json(self.problem())
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::MalformedInput(msg) => AppError::BadRequest(msg),
            RelayError::Delivery(e) => {
                tracing::error!("Card delivery failed: {}", e);
                AppError::BadGateway("Card delivery to the incoming webhook failed".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
