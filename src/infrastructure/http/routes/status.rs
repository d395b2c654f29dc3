//! Root status and liveness routes

use warp::Filter;

use crate::infrastructure::http::handlers::{handle_health_request, handle_status_request};

/// Status routes configuration
pub struct StatusRoutes;

impl StatusRoutes {
    /// `GET /`
    pub fn create_status_route() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path::end().and(warp::get()).and_then(handle_status_request)
    }

    /// `GET /health`
    pub fn create_health_route() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("health").and(warp::get()).and_then(handle_health_request)
    }
}
