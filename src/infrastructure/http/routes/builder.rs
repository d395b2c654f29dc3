//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::application::ServiceContainer;
use crate::infrastructure::http::responses::handle_rejection;
use crate::infrastructure::http::routes::{
    EscrowRoutes, ListingsRoutes, MetricsRoutes, RewardsRoutes, StatusRoutes,
};

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes.
    ///
    /// Every route matches its path before its method, so a known path with
    /// the wrong verb is rejected as 405 rather than 404.
    pub fn build_routes(
        services: Arc<ServiceContainer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        let body_limit = services.config.server.max_request_size as u64;

        let status_route = StatusRoutes::create_status_route();
        let health_route = StatusRoutes::create_health_route();
        let get_escrow_route = EscrowRoutes::create_get_route(services.clone());
        let create_escrow_route = EscrowRoutes::create_create_route(services.clone(), body_limit);
        let verify_route = EscrowRoutes::create_verify_route(services.clone(), body_limit);
        let listings_route = ListingsRoutes::create_listings_route(services.clone());
        let get_rewards_route = RewardsRoutes::create_get_route(services.clone());
        let transfer_route = RewardsRoutes::create_transfer_route(services.clone(), body_limit);
        let monitoring = services.monitoring.clone();
        let metrics_route = MetricsRoutes::create_metrics_route(services);

        status_route
            .or(health_route)
            .or(get_escrow_route)
            .or(create_escrow_route)
            .or(verify_route)
            .or(listings_route)
            .or(get_rewards_route)
            .or(transfer_route)
            .or(metrics_route)
            .recover(move |err| handle_rejection(err, monitoring.clone()))
    }
}
