//! Test suite for the Domain Chain API
//!
//! - `common`: in-process fakes for the contract, token and verification ports
//! - `unit`: service-level tests against the fakes
//! - `integration`: full route table exercised with `warp::test`

pub mod common;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    /// First Hardhat development account
    pub const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    pub const TEST_SIGNER_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    pub const TEST_ESCROW_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    pub const TEST_TOKEN_ADDRESS: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
    pub const TEST_USER_ADDRESS: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Configuration that builds every adapter without touching the network
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();

        config.server.port = 0;
        config.chain.private_key = TEST_PRIVATE_KEY.to_string();
        config.chain.chain_id = Some(31337);
        config.escrow.contract_address = TEST_ESCROW_ADDRESS.to_string();
        config.rewards.token_address = Some(TEST_TOKEN_ADDRESS.to_string());

        for source in [
            &mut config.verification.dns,
            &mut config.verification.registrar,
            &mut config.verification.oracle,
        ] {
            source.base_url = "http://127.0.0.1:1".to_string();
            source.token = "test-token".to_string();
        }
        config.verification.timeout_seconds = 2;

        config
    }
}
