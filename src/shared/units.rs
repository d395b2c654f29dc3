//! Ether amounts, wei integers and addresses as they arrive in requests

use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};

/// Numeric request field accepted either as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(serde_json::Number),
    Text(String),
}

impl AmountInput {
    pub fn as_text(&self) -> String {
        match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.trim().to_string(),
        }
    }
}

/// Format a wei amount as an ether decimal string.
///
/// Trailing zeros are trimmed, keeping at least one fractional digit:
/// `2.5 ether` is rendered as `"2.5"` and `1 ether` as `"1.0"`.
pub fn format_ether(wei: U256) -> String {
    let formatted = ethers::utils::format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}

/// Narrow a contract integer to `u64`, clamping at `u64::MAX`
pub fn saturating_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

/// Parse an ether decimal string into wei
pub fn parse_ether(amount: &str) -> AppResult<U256> {
    Ok(ethers::utils::parse_ether(amount.trim())?)
}

/// Parse a non-negative decimal integer such as a wei amount or a duration
pub fn parse_integer(field: &str, value: &AmountInput) -> AppResult<U256> {
    let text = value.as_text();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidInput(format!("Invalid {}: {}", field, text)));
    }
    U256::from_dec_str(&text).map_err(|_| AppError::InvalidInput(format!("Invalid {}: {}", field, text)))
}

/// Parse a hex account address
pub fn parse_address(field: &str, value: &str) -> AppResult<Address> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid {}", field)))
}
