//! # Wallet Provider Seam
//!
//! The connection machine only talks to the wallet through [`WalletProvider`].
//! In the browser it is backed by the injected EIP-1193 object
//! ([`crate::services::ethereum::Eip1193Provider`]); tests use an in-memory mock.

use std::rc::Rc;

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use serde::Serialize;

use crate::error::WalletError;

/// Read-only call object passed as the first `eth_call` parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    /// Account the call is made on behalf of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Contract address
    pub to: Address,
    /// ABI encoded calldata
    pub data: Bytes,
}

/// Operations the app needs from an injected wallet.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// `eth_accounts` - accounts already authorized for this page. Never prompts.
    async fn accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_requestAccounts` - prompts the user. Fails with
    /// [`WalletError::UserRejected`] if they decline.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_call` against the latest block, returning raw return data.
    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletError>;
}

#[async_trait(?Send)]
impl<T: WalletProvider + ?Sized> WalletProvider for Rc<T> {
    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        (**self).accounts().await
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        (**self).request_accounts().await
    }

    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletError> {
        (**self).call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_call_request_wire_format() {
        let request = CallRequest {
            from: Some(address!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")),
            to: address!("0x456ba3CB23b103Fa3925FA1E48E3075646F3de3C"),
            data: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["data"], "0xdeadbeef");
        assert_eq!(
            json["to"].as_str().unwrap().to_lowercase(),
            "0x456ba3cb23b103fa3925fa1e48e3075646f3de3c"
        );
        assert!(json.get("from").is_some());
    }

    #[test]
    fn test_call_request_omits_missing_from() {
        let request = CallRequest {
            from: None,
            to: Address::ZERO,
            data: Bytes::new(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("from").is_none());
        assert_eq!(json["data"], "0x");
    }
}
