//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the ethers contract adapters, the REST verification
//! sources, metrics and HTTP handling.

pub mod adapters;
pub mod http;

pub use adapters::MonitoringAdapter;
pub use http::HttpServer;
