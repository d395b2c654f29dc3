//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod builder;
pub mod escrow;
pub mod listings;
pub mod metrics;
pub mod rewards;
pub mod status;

pub use builder::RouteBuilder;
pub use escrow::EscrowRoutes;
pub use listings::ListingsRoutes;
pub use metrics::MetricsRoutes;
pub use rewards::RewardsRoutes;
pub use status::StatusRoutes;
