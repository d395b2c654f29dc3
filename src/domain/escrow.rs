//! Escrow domain models and the marketplace listing projection

use chrono::{DateTime, SecondsFormat, Utc};
use ethers::types::{Address, U256};
use serde::{Serialize, Serializer};

use crate::shared::units::format_ether;

const DEFAULT_DESCRIPTION: &str = "No description provided";
const DEFAULT_CATEGORY: &str = "General";

fn decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn checksummed<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ethers::utils::to_checksum(address, None))
}

/// Escrow record as stored by the escrow contract
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Escrow {
    #[serde(serialize_with = "decimal")]
    pub id: U256,
    pub domain_name: String,
    /// Price in wei
    #[serde(serialize_with = "decimal")]
    pub price: U256,
    #[serde(serialize_with = "checksummed")]
    pub seller: Address,
    #[serde(serialize_with = "decimal")]
    pub duration: U256,
    #[serde(serialize_with = "decimal")]
    pub timestamp: U256,
    pub description: String,
    pub category: String,
}

impl Escrow {
    /// The contract returns a zeroed record for ids it never assigned
    pub fn is_vacant(&self) -> bool {
        self.seller.is_zero()
    }
}

/// Active listing entry as returned by `getActiveListings`
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveListing {
    pub token_id: U256,
    pub domain_name: String,
    pub price: U256,
    pub seller: Address,
    pub timestamp: u64,
    pub duration: u64,
    pub description: String,
    pub category: String,
}

/// Result of a confirmed `createEscrow` transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowCreation {
    pub transaction_hash: String,
    pub escrow_id: String,
}

/// A point in a listing's price history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    pub price: String,
    pub date: String,
}

/// Marketplace presentation of an active escrow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub domain: String,
    pub price: String,
    pub seller: String,
    pub created_at: String,
    pub status: String,
    pub verification_status: String,
    pub price_history: Vec<PricePoint>,
    pub duration: u64,
    pub description: String,
    pub category: String,
    pub tld: String,
}

impl Listing {
    /// Project an active listing into its marketplace form
    pub fn from_active(listing: &ActiveListing, verification_status: String) -> Self {
        let price = format_ether(listing.price);
        let created_at = i64::try_from(listing.timestamp)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        Self {
            id: listing.token_id.to_string(),
            domain: listing.domain_name.clone(),
            price: price.clone(),
            seller: ethers::utils::to_checksum(&listing.seller, None),
            created_at: created_at.clone(),
            status: "active".to_string(),
            verification_status,
            price_history: vec![PricePoint { price, date: created_at }],
            duration: listing.duration,
            description: non_empty_or(&listing.description, DEFAULT_DESCRIPTION),
            category: non_empty_or(&listing.category, DEFAULT_CATEGORY),
            tld: top_level_domain(&listing.domain_name),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// `.` followed by the last dot-separated label of the domain
pub fn top_level_domain(domain: &str) -> String {
    format!(".{}", domain.rsplit('.').next().unwrap_or_default())
}

/// Listings served while the contract has none active
pub fn sample_listings(now: DateTime<Utc>) -> Vec<Listing> {
    let created_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let history = |points: [(&str, &str); 3]| {
        points
            .iter()
            .map(|(price, date)| PricePoint { price: price.to_string(), date: date.to_string() })
            .collect::<Vec<_>>()
    };

    vec![
        Listing {
            id: "1".to_string(),
            domain: "example.com".to_string(),
            price: "2.5".to_string(),
            seller: "0x1234...5678".to_string(),
            created_at: created_at.clone(),
            status: "active".to_string(),
            verification_status: "verified".to_string(),
            price_history: history([
                ("3.0", "2024-01-01"),
                ("2.8", "2024-02-01"),
                ("2.5", "2024-03-01"),
            ]),
            duration: 14,
            description: "Premium domain name".to_string(),
            category: "Technology".to_string(),
            tld: ".com".to_string(),
        },
        Listing {
            id: "2".to_string(),
            domain: "crypto.io".to_string(),
            price: "5.0".to_string(),
            seller: "0x5678...9012".to_string(),
            created_at,
            status: "active".to_string(),
            verification_status: "pending".to_string(),
            price_history: history([
                ("6.0", "2024-01-01"),
                ("5.5", "2024-02-01"),
                ("5.0", "2024-03-01"),
            ]),
            duration: 30,
            description: "Perfect for crypto projects".to_string(),
            category: "Crypto".to_string(),
            tld: ".io".to_string(),
        },
    ]
}
