//! Application constants

use alloy_primitives::{address, Address};

/// Silver card collection on Polygon Mumbai
pub const CONTRACT_ADDRESS: Address = address!("0x456ba3CB23b103Fa3925FA1E48E3075646F3de3C");

/// Chapter queried for redeemable cards
pub const CHAPTER_ONE: u64 = 1;

/// Card tier queried within the chapter (1 = silver)
pub const SILVER_CARD: u64 = 1;

// Provider detection
pub const PROVIDER_DETECT_TIMEOUT_MS: u32 = 3000;

// Element shown until the wasm module has started
pub const LOADING_ELEMENT_ID: &str = "app-loading";
