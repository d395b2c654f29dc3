//! HTTP server implementation
//!
//! The server owns the service container; routes receive it through
//! [`with_services`](super::utils::with_services).

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, instrument};
use warp::{Filter, Reply};

use crate::application::ServiceContainer;
use crate::config::AppConfig;
use crate::infrastructure::http::routes::RouteBuilder;
use crate::shared::error::{AppError, AppResult};

/// HTTP server for the Domain Chain API
pub struct HttpServer {
    services: Arc<ServiceContainer>,
}

impl HttpServer {
    /// Connect to the chain and build every service
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let services = ServiceContainer::from_config(config).await?;
        Ok(Self::with_services(Arc::new(services)))
    }

    pub fn with_services(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.services.config
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr: SocketAddr = self
            .config()
            .server_address()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        info!("Domain Chain API listening on {}", addr);
        warp::serve(self.create_routes()).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub fn create_routes(&self) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
        RouteBuilder::build_routes(self.services.clone())
    }
}
