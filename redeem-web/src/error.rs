//! # Error Types
//!
//! Errors are split by the boundary they come from:
//!
//! - [`WalletError`]: anything the injected EIP-1193 provider reports, plus
//!   failures marshalling values across the JS boundary
//! - [`ContractError`]: failures while binding the contract or decoding a read
//!
//! Neither is ever shown in the page. The connection machine logs them and
//! stays in its last reached stage.

use thiserror::Error;

/// EIP-1193 provider error codes.
pub mod codes {
    /// The user rejected the request.
    pub const USER_REJECTED: i64 = 4001;
    /// The requested method and/or account has not been authorized by the user.
    pub const UNAUTHORIZED: i64 = 4100;
    /// The provider does not support the requested method.
    pub const UNSUPPORTED_METHOD: i64 = 4200;
    /// The provider is disconnected from all chains.
    pub const DISCONNECTED: i64 = 4900;
    /// The provider is not connected to the requested chain.
    pub const CHAIN_DISCONNECTED: i64 = 4901;
}

/// Errors raised at the wallet provider boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No injected provider was found on `window`
    #[error("No wallet provider installed")]
    NotInstalled,

    /// The user declined the prompt (code 4001)
    #[error("Request rejected by user: {0}")]
    UserRejected(String),

    /// The account or method is not authorized (code 4100)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The provider does not implement the method (code 4200)
    #[error("Unsupported method: {0}")]
    Unsupported(String),

    /// The provider lost its chain connection (codes 4900 / 4901)
    #[error("Provider disconnected: {0}")]
    Disconnected(String),

    /// Any other JSON-RPC error
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Request arguments or a response could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A thrown JS value that was not a provider RPC error
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl WalletError {
    /// Map a provider RPC error onto the matching variant.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            codes::USER_REJECTED => WalletError::UserRejected(message),
            codes::UNAUTHORIZED => WalletError::Unauthorized(message),
            codes::UNSUPPORTED_METHOD => WalletError::Unsupported(message),
            codes::DISCONNECTED | codes::CHAIN_DISCONNECTED => WalletError::Disconnected(message),
            _ => WalletError::Rpc { code, message },
        }
    }

    /// Whether the user explicitly declined. The connect button stays usable.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::UserRejected(_))
    }
}

/// Errors raised while binding or reading the redeem contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The account string returned by the wallet is not a 20-byte hex address
    #[error("Invalid account address {address:?}: {reason}")]
    InvalidAccount { address: String, reason: String },

    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Return data did not match the interface descriptor
    #[error("ABI decode error: {0}")]
    Abi(#[from] alloy_sol_types::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rpc_maps_known_codes() {
        assert_eq!(
            WalletError::from_rpc(4001, "User denied account authorization"),
            WalletError::UserRejected("User denied account authorization".to_string())
        );
        assert!(matches!(WalletError::from_rpc(4100, "x"), WalletError::Unauthorized(_)));
        assert!(matches!(WalletError::from_rpc(4200, "x"), WalletError::Unsupported(_)));
        assert!(matches!(WalletError::from_rpc(4900, "x"), WalletError::Disconnected(_)));
        assert!(matches!(WalletError::from_rpc(4901, "x"), WalletError::Disconnected(_)));
    }

    #[test]
    fn test_from_rpc_keeps_unknown_codes() {
        let err = WalletError::from_rpc(-32603, "Internal JSON-RPC error.");
        assert_eq!(err.to_string(), "RPC error -32603: Internal JSON-RPC error.");
        assert!(!err.is_user_rejection());
    }

    #[test]
    fn test_user_rejection() {
        assert!(WalletError::from_rpc(4001, "denied").is_user_rejection());
        assert!(!WalletError::NotInstalled.is_user_rejection());
    }

    #[test]
    fn test_contract_error_wraps_wallet_error() {
        let err: ContractError = WalletError::Disconnected("offline".to_string()).into();
        assert_eq!(err.to_string(), "Provider disconnected: offline");
    }
}
