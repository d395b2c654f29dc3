//! Reward token routes module

use std::sync::Arc;

use warp::Filter;

use crate::application::services::TransferRequest;
use crate::application::ServiceContainer;
use crate::infrastructure::http::handlers::{handle_get_rewards, handle_transfer_tokens};
use crate::infrastructure::http::utils::{json_body, with_services};

/// Rewards routes configuration
pub struct RewardsRoutes;

impl RewardsRoutes {
    /// `GET /rewards/:address`
    pub fn create_get_route(
        services: Arc<ServiceContainer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("rewards" / String)
            .and(warp::get())
            .and(with_services(services))
            .and_then(handle_get_rewards)
    }

    /// `POST /rewards/:address`
    pub fn create_transfer_route(
        services: Arc<ServiceContainer>,
        body_limit: u64,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("rewards" / String)
            .and(warp::post())
            .and(json_body::<TransferRequest>(body_limit))
            .and(with_services(services))
            .and_then(handle_transfer_tokens)
    }
}
