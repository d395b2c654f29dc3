//! HTTP utilities - Common filters used by the routes

use std::convert::Infallible;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use warp::Filter;

use crate::application::ServiceContainer;

/// Inject the shared services into a route
pub fn with_services(
    services: Arc<ServiceContainer>,
) -> impl Filter<Extract = (Arc<ServiceContainer>,), Error = Infallible> + Clone {
    warp::any().map(move || services.clone())
}

/// JSON body bounded by the configured request size
pub fn json_body<T: DeserializeOwned + Send>(
    limit: u64,
) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(limit).and(warp::body::json())
}
