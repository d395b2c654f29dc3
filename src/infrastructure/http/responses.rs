//! HTTP responses module
//!
//! Successful results become a 200 JSON body; failures become
//! `{"error": message}` with the status taken from [`AppError`].

use std::convert::Infallible;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Rejection, Reply};

use crate::infrastructure::adapters::MonitoringAdapter;
use crate::infrastructure::http::models::RequestContext;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn error(error: &AppError) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(&error.to_json()), error.http_status_code())
    }

    /// Log the outcome, record request metrics and build the reply
    pub fn respond<T: Serialize>(
        ctx: &RequestContext,
        monitoring: &MonitoringAdapter,
        result: AppResult<T>,
    ) -> WithStatus<Json> {
        let elapsed = ctx.elapsed();
        let duration_ms = elapsed.as_millis() as u64;

        let (body, status) = match result {
            Ok(body) => {
                LoggingUtils::log_success(&ctx.request_id, ctx.endpoint, duration_ms);
                (warp::reply::json(&body), StatusCode::OK)
            }
            Err(e) => {
                LoggingUtils::log_error(&ctx.request_id, ctx.endpoint, &e, duration_ms);
                (warp::reply::json(&e.to_json()), e.http_status_code())
            }
        };

        monitoring.record_request(ctx.endpoint, status.as_u16(), elapsed.as_secs_f64());
        warp::reply::with_status(body, status)
    }
}

/// Endpoint label for requests that never reached a handler
pub const REJECTED_ENDPOINT: &str = "rejected";

/// Turn filter rejections into JSON error bodies and count them
pub async fn handle_rejection(
    err: Rejection,
    monitoring: Arc<MonitoringAdapter>,
) -> Result<impl Reply, Infallible> {
    // Body errors come before method errors: a sibling route on the same
    // path with another verb also rejects with MethodNotAllowed.
    let error = if let Some(e) = err.find::<AppError>() {
        e.clone()
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        AppError::InvalidInput(format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        AppError::InvalidInput("Request body too large".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        AppError::InvalidInput("Content-Type must be application/json".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        AppError::InvalidInput("Content-Length header is required".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        AppError::MethodNotSupported
    } else if err.is_not_found() {
        AppError::NotFound("Not found".to_string())
    } else {
        error!(rejection = ?err, "Unhandled rejection");
        AppError::Internal("Unhandled rejection".to_string())
    };

    let status = error.http_status_code();
    debug!(status = %status, error = %error, "Request rejected");
    monitoring.record_request(REJECTED_ENDPOINT, status.as_u16(), 0.0);
    Ok(ResponseFormatter::error(&error))
}
