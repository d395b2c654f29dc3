//! Domain layer - Core business logic and domain models
//!
//! This module contains the domain models, the verification scoring rules and
//! the traits external systems implement. It is independent of HTTP and of
//! the ethers/reqwest adapters.

pub mod escrow;
pub mod rewards;
pub mod status;
pub mod traits;
pub mod verification;

pub use escrow::{sample_listings, ActiveListing, Escrow, EscrowCreation, Listing, PricePoint};
pub use rewards::RewardsData;
pub use status::{HealthStatus, ServiceStatus};
pub use traits::{EscrowContract, RewardToken, VerificationSource};
pub use verification::{SourceOutcome, VerificationProof, VerificationResult};
