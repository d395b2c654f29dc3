//! Reward token handlers
//!
//! Both endpoints wrap their payload in `{"success": true, ...}`.

use std::sync::Arc;

use serde_json::json;
use warp::{Rejection, Reply};

use crate::application::services::TransferRequest;
use crate::application::ServiceContainer;
use crate::infrastructure::http::models::RequestContext;
use crate::infrastructure::http::responses::ResponseFormatter;
use crate::shared::logging::LoggingUtils;

/// Handle `GET /rewards/:address`
pub async fn handle_get_rewards(
    address: String,
    services: Arc<ServiceContainer>,
) -> Result<impl Reply, Rejection> {
    let ctx = RequestContext::new("rewards.get");
    LoggingUtils::log_request(&ctx.request_id, ctx.endpoint, Some(&address));

    let result = services
        .rewards
        .get_user_rewards(&address)
        .await
        .map(|data| json!({ "success": true, "data": data }));
    Ok(ResponseFormatter::respond(&ctx, &services.monitoring, result))
}

/// Handle `POST /rewards/:address`. Transfers are driven by the body; the
/// path address is only logged.
pub async fn handle_transfer_tokens(
    address: String,
    request: TransferRequest,
    services: Arc<ServiceContainer>,
) -> Result<impl Reply, Rejection> {
    let ctx = RequestContext::new("rewards.transfer");
    LoggingUtils::log_request(&ctx.request_id, ctx.endpoint, Some(&address));

    let result = services
        .rewards
        .transfer_tokens(request)
        .await
        .map(|receipt| json!({ "success": true, "transactionHash": receipt.transaction_hash }));
    Ok(ResponseFormatter::respond(&ctx, &services.monitoring, result))
}
