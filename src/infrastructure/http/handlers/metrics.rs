//! Prometheus endpoint handler

use std::sync::Arc;

use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::application::ServiceContainer;
use crate::infrastructure::http::responses::ResponseFormatter;

/// Handle `GET /metrics`
pub async fn handle_metrics_request(services: Arc<ServiceContainer>) -> Result<warp::reply::Response, Rejection> {
    match services.monitoring.gather_text() {
        Ok(text) => Ok(warp::reply::with_header(
            warp::reply::with_status(text, StatusCode::OK),
            "Content-Type",
            "text/plain; version=0.0.4; charset=utf-8",
        )
        .into_response()),
        Err(e) => Ok(ResponseFormatter::error(&e).into_response()),
    }
}
