//! Domain Chain API - HTTP front end for an on-chain domain escrow marketplace
//!
//! The service reads and creates escrows on the escrow contract, serves the
//! marketplace listing feed, verifies domain ownership against three external
//! sources and manages reward token balances and transfers.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::ServiceContainer;
pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

#[cfg(test)]
mod tests;
