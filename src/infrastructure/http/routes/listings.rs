use std::sync::Arc;

use warp::Filter;

use crate::application::ServiceContainer;
use crate::infrastructure::http::handlers::handle_listings_request;
use crate::infrastructure::http::utils::with_services;

/// Marketplace listing routes
pub struct ListingsRoutes;

impl ListingsRoutes {
    /// `GET /listings`
    pub fn create_listings_route(
        services: Arc<ServiceContainer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("listings")
            .and(warp::get())
            .and(with_services(services))
            .and_then(handle_listings_request)
    }
}
