//! Signing JSON-RPC client shared by the contract adapters

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use std::sync::Arc;
use tracing::info;

use crate::config::ChainConfig;
use crate::shared::error::{AppError, AppResult};

/// HTTP provider wrapped with the configured signer
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Build the signing client for the configured node.
///
/// The chain id is queried from the node only when it is not configured.
pub async fn connect(config: &ChainConfig) -> AppResult<Arc<SignerClient>> {
    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .map_err(|e| AppError::Config(format!("Invalid chain RPC URL: {}", e)))?;

    let wallet: LocalWallet = config
        .private_key
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid signer private key: {}", e)))?;

    let chain_id = match config.chain_id {
        Some(id) => id,
        None => provider
            .get_chainid()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?
            .as_u64(),
    };

    let wallet = wallet.with_chain_id(chain_id);
    info!(
        rpc_url = %config.rpc_url,
        chain_id = chain_id,
        signer = ?wallet.address(),
        "Connected signing client"
    );

    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}

/// Map a contract/provider failure, keeping the upstream message
pub(crate) fn upstream<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Upstream(err.to_string())
}
