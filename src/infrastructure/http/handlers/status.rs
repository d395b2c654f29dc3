//! Service status and liveness handlers

use warp::{Rejection, Reply};

use crate::domain::status::{HealthStatus, ServiceStatus};

/// Handle `GET /`
pub async fn handle_status_request() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&ServiceStatus::online()))
}

/// Handle `GET /health`
pub async fn handle_health_request() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&HealthStatus::healthy()))
}
