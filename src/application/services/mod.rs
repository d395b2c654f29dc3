//! Application services - Orchestration of domain logic

pub mod escrow_service;
pub mod rewards_service;
pub mod verification_service;

pub use escrow_service::{CreateEscrowRequest, EscrowService};
pub use rewards_service::{RewardsService, TransferRequest, TransferReceipt};
pub use verification_service::{VerificationService, VerifyDomainRequest, VerifyDomainResponse};
