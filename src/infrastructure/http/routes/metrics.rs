//! Metrics routes module

use std::sync::Arc;

use warp::Filter;

use crate::application::ServiceContainer;
use crate::infrastructure::http::handlers::handle_metrics_request;
use crate::infrastructure::http::utils::with_services;

/// Metrics routes configuration
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// `GET /metrics` in the Prometheus text format
    pub fn create_metrics_route(
        services: Arc<ServiceContainer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("metrics")
            .and(warp::get())
            .and(with_services(services))
            .and_then(handle_metrics_request)
    }
}
