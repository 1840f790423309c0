//! # Networks
//!
//! Static descriptions of the EVM networks the client knows about. Only one
//! network is used at a time; there is no switching.

/// An EVM network and the block explorer that indexes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// Human readable name shown in the UI
    pub name: &'static str,
    /// Explorer base URL without a trailing slash
    pub explorer_url: &'static str,
}

/// Polygon's Mumbai testnet, where the silver card collection is deployed.
pub const POLYGON_MUMBAI: Network = Network {
    name: "Polygon Mumbai",
    explorer_url: "https://mumbai.polygonscan.com",
};

impl Network {
    /// Explorer page for an account or contract.
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_url, address)
    }

    /// Explorer page listing a contract's read-only methods.
    pub fn contract_read_url(&self, address: &str) -> String {
        format!("{}#readContract", self.address_url(address))
    }
}
