use crate::models::InsightReply;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

pub const INVALID_RESPONSE_MESSAGE: &str = "Error: Invalid response from AI service.";
pub const GENERATION_FAILED_MESSAGE: &str = "Error: Could not generate insight.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub allow: Option<&'static str>,
}

impl AppError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            allow: None,
        }
    }

    /// The completion service answered without usable text.
    pub fn bad_gateway() -> Self {
        Self::new(StatusCode::BAD_GATEWAY, INVALID_RESPONSE_MESSAGE)
    }

    /// The completion call failed; the cause is logged by the caller, not returned.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED_MESSAGE)
    }

    pub fn method_not_allowed(allow: &'static str) -> Self {
        Self {
            allow: Some(allow),
            ..Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            Json(InsightReply {
                reply: self.message,
            }),
        )
            .into_response();
        if let Some(allow) = self.allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}
