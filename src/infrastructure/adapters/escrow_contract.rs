//! Escrow contract adapter
//!
//! Calls the escrow contract through an ABI taken from configuration, falling
//! back to a built-in description of the methods the API uses.

use async_trait::async_trait;
use ethers::{
    abi::{Abi, RawLog},
    contract::Contract,
    types::{Address, TransactionReceipt, U256},
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::EscrowConfig;
use crate::domain::escrow::{ActiveListing, Escrow, EscrowCreation};
use crate::domain::traits::EscrowContract;
use crate::infrastructure::adapters::chain::{upstream, SignerClient};
use crate::shared::error::{AppError, AppResult};
use crate::shared::units::saturating_u64;

/// Human-readable ABI used when none is configured
pub const DEFAULT_ESCROW_ABI: &[&str] = &[
    "function escrows(uint256 id) view returns (string domainName, uint256 price, address seller, uint256 duration, uint256 timestamp, string description, string category)",
    "function createEscrow(string domainName, uint256 price, uint256 duration) returns (uint256)",
    "function getActiveListings() view returns ((uint256,string,uint256,address,uint256,uint256,string,string)[])",
    "function getDomainVerificationStatus(uint256 tokenId) view returns (string)",
    "function getUserReputation(address user) view returns (uint256)",
    "event EscrowCreated(uint256 indexed escrowId, string domainName, address indexed seller, uint256 price)",
];

type EscrowTuple = (String, U256, Address, U256, U256, String, String);
type ListingTuple = (U256, String, U256, Address, U256, U256, String, String);

/// Load the escrow ABI: inline JSON, then a JSON file, then the built-in one.
///
/// Inline and file ABIs may be either a JSON ABI or a JSON array of
/// human-readable signatures.
pub fn load_abi(config: &EscrowConfig) -> AppResult<Abi> {
    if let Some(inline) = config.abi.as_deref().filter(|s| !s.trim().is_empty()) {
        return parse_abi_json(inline);
    }

    if let Some(path) = &config.abi_path {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read escrow ABI {}: {}", path, e)))?;
        return parse_abi_json(&raw);
    }

    ethers::abi::parse_abi(DEFAULT_ESCROW_ABI)
        .map_err(|e| AppError::Config(format!("Invalid built-in escrow ABI: {}", e)))
}

fn parse_abi_json(raw: &str) -> AppResult<Abi> {
    if let Ok(abi) = serde_json::from_str::<Abi>(raw) {
        return Ok(abi);
    }

    let signatures: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| AppError::Config(format!("Escrow ABI is not valid JSON: {}", e)))?;
    let signatures: Vec<&str> = signatures.iter().map(String::as_str).collect();
    ethers::abi::parse_abi(&signatures)
        .map_err(|e| AppError::Config(format!("Invalid escrow ABI: {}", e)))
}

/// Escrow contract accessed through a signing ethers client
pub struct EthersEscrowContract {
    contract: Contract<SignerClient>,
}

impl EthersEscrowContract {
    /// Bind the configured contract address and ABI to the client
    pub fn new(config: &EscrowConfig, client: Arc<SignerClient>) -> AppResult<Self> {
        let address: Address = config
            .contract_address
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid escrow contract address: {}", e)))?;
        let abi = load_abi(config)?;

        info!(address = ?address, "Escrow contract handle created");
        Ok(Self {
            contract: Contract::new(address, abi, client),
        })
    }

    /// Decode `escrowId` from the first receipt log emitted by an ABI event
    /// carrying that parameter. Other events in the receipt are skipped.
    fn escrow_id_from_receipt(&self, receipt: &TransactionReceipt) -> AppResult<U256> {
        let abi = self.contract.abi();
        for log in &receipt.logs {
            let Some(topic) = log.topics.first() else {
                continue;
            };
            let Some(event) = abi.events().find(|event| {
                event.signature() == *topic
                    && event.inputs.iter().any(|input| input.name == "escrowId")
            }) else {
                continue;
            };

            let parsed = event
                .parse_log(RawLog {
                    topics: log.topics.clone(),
                    data: log.data.to_vec(),
                })
                .map_err(upstream)?;

            if let Some(id) = parsed
                .params
                .into_iter()
                .find(|param| param.name == "escrowId")
                .and_then(|param| param.value.into_uint())
            {
                return Ok(id);
            }
        }

        Err(AppError::Upstream(
            "Escrow creation receipt has no EscrowCreated event".to_string(),
        ))
    }
}

#[async_trait]
impl EscrowContract for EthersEscrowContract {
    async fn escrow(&self, id: U256) -> AppResult<Option<Escrow>> {
        let call = self
            .contract
            .method::<_, EscrowTuple>("escrows", id)
            .map_err(upstream)?;

        let (domain_name, price, seller, duration, timestamp, description, category) =
            match call.call().await {
                Ok(raw) => raw,
                Err(e) if e.is_revert() => {
                    debug!(id = %id, error = %e, "Escrow lookup reverted");
                    return Ok(None);
                }
                Err(e) => return Err(upstream(e)),
            };

        let escrow = Escrow {
            id,
            domain_name,
            price,
            seller,
            duration,
            timestamp,
            description,
            category,
        };

        Ok(if escrow.is_vacant() { None } else { Some(escrow) })
    }

    async fn create_escrow(
        &self,
        domain_name: &str,
        price: U256,
        duration: U256,
    ) -> AppResult<EscrowCreation> {
        let call = self
            .contract
            .method::<_, U256>("createEscrow", (domain_name.to_string(), price, duration))
            .map_err(upstream)?;

        let pending = call.send().await.map_err(upstream)?;
        let receipt = pending
            .await
            .map_err(upstream)?
            .ok_or_else(|| AppError::Upstream("Transaction dropped before confirmation".to_string()))?;

        let escrow_id = self.escrow_id_from_receipt(&receipt)?;
        info!(
            tx_hash = ?receipt.transaction_hash,
            escrow_id = %escrow_id,
            domain = %domain_name,
            "Escrow created"
        );

        Ok(EscrowCreation {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            escrow_id: escrow_id.to_string(),
        })
    }

    async fn active_listings(&self) -> AppResult<Vec<ActiveListing>> {
        let raw: Vec<ListingTuple> = self
            .contract
            .method::<_, Vec<ListingTuple>>("getActiveListings", ())
            .map_err(upstream)?
            .call()
            .await
            .map_err(upstream)?;

        Ok(raw
            .into_iter()
            .map(
                |(token_id, domain_name, price, seller, timestamp, duration, description, category)| {
                    ActiveListing {
                        token_id,
                        domain_name,
                        price,
                        seller,
                        timestamp: saturating_u64(timestamp),
                        duration: saturating_u64(duration),
                        description,
                        category,
                    }
                },
            )
            .collect())
    }

    async fn verification_status(&self, token_id: U256) -> AppResult<String> {
        self.contract
            .method::<_, String>("getDomainVerificationStatus", token_id)
            .map_err(upstream)?
            .call()
            .await
            .map_err(upstream)
    }

    async fn user_reputation(&self, user: Address) -> AppResult<U256> {
        self.contract
            .method::<_, U256>("getUserReputation", user)
            .map_err(upstream)?
            .call()
            .await
            .map_err(upstream)
    }
}
