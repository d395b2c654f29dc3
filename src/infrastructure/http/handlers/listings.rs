use std::sync::Arc;

use warp::{Rejection, Reply};

use crate::application::ServiceContainer;
use crate::infrastructure::http::models::RequestContext;
use crate::infrastructure::http::responses::ResponseFormatter;
use crate::shared::logging::LoggingUtils;

/// Handle `GET /listings`
pub async fn handle_listings_request(services: Arc<ServiceContainer>) -> Result<impl Reply, Rejection> {
    let ctx = RequestContext::new("listings");
    LoggingUtils::log_request(&ctx.request_id, ctx.endpoint, None);

    let result = services.escrow.listings().await;
    Ok(ResponseFormatter::respond(&ctx, &services.monitoring, result))
}
