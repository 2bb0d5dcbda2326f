//! HTTP error envelope and rejection recovery

use std::convert::Infallible;

use thiserror::Error;
use tracing::debug;
use warp::http::StatusCode;
use warp::Reply;

use crate::models::ErrorResponse;
use crate::store::StoreError;
use crate::upstream::UpstreamError;

/// An error returned to the HTTP caller as `{"detail": ...}`
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{status}: {detail}")]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Invalid input from the caller
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Analytics could not be computed
    pub fn analytics(err: StoreError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error processing analytics: {}", err),
        )
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Configuration(message) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            UpstreamError::Gateway(cause) => ApiError::new(
                StatusCode::BAD_GATEWAY,
                format!("Failed to connect to API: {}", cause),
            ),
            UpstreamError::UpstreamRejected { status, message } => ApiError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("API Error: {}", message),
            ),
        }
    }
}

impl Reply for ApiError {
    fn into_response(self) -> warp::reply::Response {
        let body = ErrorResponse {
            detail: self.detail,
        };
        warp::reply::with_status(warp::reply::json(&body), self.status).into_response()
    }
}

/// Turn warp rejections into the same `{"detail": ...}` envelope
pub async fn handle_rejection(err: warp::Rejection) -> Result<impl Reply, Infallible> {
    let api_error = if err.is_not_found() {
        ApiError::new(StatusCode::NOT_FOUND, "Not Found")
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        ApiError::unprocessable(format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        ApiError::new(StatusCode::LENGTH_REQUIRED, "Length Required")
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };

    debug!(status = %api_error.status, detail = %api_error.detail, "Request rejected");
    Ok(api_error)
}
