//! HTTP handlers module
//!
//! Each handler extracts its parameters, calls exactly one service and maps
//! the result through [`ResponseFormatter`](super::responses::ResponseFormatter).

pub mod escrow;
pub mod listings;
pub mod metrics;
pub mod rewards;
pub mod status;

pub use escrow::{handle_create_escrow, handle_get_escrow, handle_verify_domain};
pub use listings::handle_listings_request;
pub use metrics::handle_metrics_request;
pub use rewards::{handle_get_rewards, handle_transfer_tokens};
pub use status::{handle_health_request, handle_status_request};
