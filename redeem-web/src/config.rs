//! # Configuration
//!
//! Everything the client needs to know is fixed at build time. [`RedeemConfig`]
//! gathers the constants in one value so the connection machine and provider
//! detection can be handed an explicit configuration (tests build their own).

use alloy_primitives::{Address, U256};
use shared::chain::{Network, POLYGON_MUMBAI};

use crate::utils::constants::{
    CHAPTER_ONE, CONTRACT_ADDRESS, PROVIDER_DETECT_TIMEOUT_MS, SILVER_CARD,
};

/// How to look for the injected wallet provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionConfig {
    /// How long to wait for a late `ethereum#initialized` event
    pub timeout_ms: u32,
    /// Treat providers that are not MetaMask as absent
    pub require_metamask: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: PROVIDER_DETECT_TIMEOUT_MS,
            require_metamask: false,
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemConfig {
    /// Network the contract is deployed on
    pub network: Network,
    /// Address of the card collection contract
    pub contract_address: Address,
    /// Chapter id passed to the eligibility query
    pub chapter: u64,
    /// Card id passed to the eligibility query
    pub card: u64,
    pub detection: DetectionConfig,
}

impl RedeemConfig {
    pub fn chapter_arg(&self) -> U256 {
        U256::from(self.chapter)
    }

    pub fn card_arg(&self) -> U256 {
        U256::from(self.card)
    }

    /// Explorer page with the contract's read methods.
    pub fn contract_url(&self) -> String {
        self.network
            .contract_read_url(&self.contract_address.to_checksum(None))
    }
}

impl Default for RedeemConfig {
    fn default() -> Self {
        Self {
            network: POLYGON_MUMBAI,
            contract_address: CONTRACT_ADDRESS,
            chapter: CHAPTER_ONE,
            card: SILVER_CARD,
            detection: DetectionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queries_chapter_one_silver() {
        let config = RedeemConfig::default();
        assert_eq!(config.chapter_arg(), U256::from(1));
        assert_eq!(config.card_arg(), U256::from(1));
        assert_eq!(config.detection.timeout_ms, 3000);
        assert!(!config.detection.require_metamask);
    }

    #[test]
    fn test_contract_url() {
        let url = RedeemConfig::default().contract_url();
        assert!(url.starts_with("https://mumbai.polygonscan.com/address/0x"));
        assert!(url.ends_with("#readContract"));
        assert!(url
            .to_lowercase()
            .contains("0x456ba3cb23b103fa3925fa1e48e3075646f3de3c"));
    }
}
