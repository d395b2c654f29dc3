//! Application layer - services and their wiring
//!
//! This module contains application services that orchestrate domain logic
//! for the HTTP handlers.

pub mod container;
pub mod services;

pub use container::ServiceContainer;
pub use services::*;
