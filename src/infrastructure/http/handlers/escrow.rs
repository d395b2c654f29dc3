//! Escrow endpoint handlers

use std::sync::Arc;

use warp::{Rejection, Reply};

use crate::application::services::{CreateEscrowRequest, VerifyDomainRequest};
use crate::application::ServiceContainer;
use crate::infrastructure::http::models::RequestContext;
use crate::infrastructure::http::responses::ResponseFormatter;
use crate::shared::logging::LoggingUtils;

/// Handle `GET /escrow/:id`
pub async fn handle_get_escrow(
    id: u64,
    services: Arc<ServiceContainer>,
) -> Result<impl Reply, Rejection> {
    let ctx = RequestContext::new("escrow.get");
    LoggingUtils::log_request(&ctx.request_id, ctx.endpoint, Some(&id.to_string()));

    let result = services.escrow.get_escrow(id).await;
    Ok(ResponseFormatter::respond(&ctx, &services.monitoring, result))
}

/// Handle `POST /escrow/create`
pub async fn handle_create_escrow(
    request: CreateEscrowRequest,
    services: Arc<ServiceContainer>,
) -> Result<impl Reply, Rejection> {
    let ctx = RequestContext::new("escrow.create");
    LoggingUtils::log_request(&ctx.request_id, ctx.endpoint, request.domain_name.as_deref());

    let result = services.escrow.create_escrow(request).await;
    Ok(ResponseFormatter::respond(&ctx, &services.monitoring, result))
}

/// Handle `POST /escrow/verify/:id`. The path id is only logged.
pub async fn handle_verify_domain(
    escrow_id: String,
    request: VerifyDomainRequest,
    services: Arc<ServiceContainer>,
) -> Result<impl Reply, Rejection> {
    let ctx = RequestContext::new("escrow.verify");
    LoggingUtils::log_request(&ctx.request_id, ctx.endpoint, Some(&escrow_id));

    let result = services.verification.verify(request).await;
    Ok(ResponseFormatter::respond(&ctx, &services.monitoring, result))
}
