//! Escrow routes module

use std::sync::Arc;

use warp::Filter;

use crate::application::services::{CreateEscrowRequest, VerifyDomainRequest};
use crate::application::ServiceContainer;
use crate::infrastructure::http::handlers::{
    handle_create_escrow, handle_get_escrow, handle_verify_domain,
};
use crate::infrastructure::http::utils::{json_body, with_services};

/// Escrow routes configuration
pub struct EscrowRoutes;

impl EscrowRoutes {
    /// `GET /escrow/:id`
    pub fn create_get_route(
        services: Arc<ServiceContainer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("escrow" / u64)
            .and(warp::get())
            .and(with_services(services))
            .and_then(handle_get_escrow)
    }

    /// `POST /escrow/create`
    pub fn create_create_route(
        services: Arc<ServiceContainer>,
        body_limit: u64,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("escrow" / "create")
            .and(warp::post())
            .and(json_body::<CreateEscrowRequest>(body_limit))
            .and(with_services(services))
            .and_then(handle_create_escrow)
    }

    /// `POST /escrow/verify/:id`
    pub fn create_verify_route(
        services: Arc<ServiceContainer>,
        body_limit: u64,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("escrow" / "verify" / String)
            .and(warp::post())
            .and(json_body::<VerifyDomainRequest>(body_limit))
            .and(with_services(services))
            .and_then(handle_verify_domain)
    }
}
