//! # Silver Card Contract Binding
//!
//! A [`ContractHandle`] ties together the fixed contract address, the interface
//! descriptor declared below and a [`Signer`] derived from the provider and the
//! connected account. Only the read-only eligibility query is exposed.
//!
//! Binding never talks to the chain. A wrong address only shows up when the
//! first read comes back empty or fails to decode.

use std::rc::Rc;

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};

use crate::error::ContractError;
use crate::services::provider::{CallRequest, WalletProvider};

sol! {
    /// Read-only surface of the silver card collection contract.
    interface NFTCollectible {
        function checkSilverCardRedeemAvailable(address owner, uint256 chapter, uint256 card) external view returns (uint256);
    }
}

pub use NFTCollectible::checkSilverCardRedeemAvailableCall as CheckRedeemAvailableCall;

/// Parse an account string as reported by the wallet.
fn parse_account(account: &str) -> Result<Address, ContractError> {
    account
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAccount {
            address: account.to_string(),
            reason: e.to_string(),
        })
}

/// Provider-derived authority acting for one account.
///
/// Reads only use it as the `from` field; nothing is ever signed. The account
/// is kept as the wallet reported it and only parsed when a call is made.
pub struct Signer<P> {
    provider: Rc<P>,
    account: String,
}

impl<P: WalletProvider> Signer<P> {
    pub fn new(provider: Rc<P>, account: impl Into<String>) -> Self {
        Self {
            provider,
            account: account.into(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn address(&self) -> Result<Address, ContractError> {
        parse_account(&self.account)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Typed handle to the deployed collection contract.
pub struct ContractHandle<P> {
    address: Address,
    signer: Signer<P>,
}

impl<P: WalletProvider> ContractHandle<P> {
    /// Bind the interface to `address`. No network traffic happens here.
    pub fn bind(address: Address, signer: Signer<P>) -> Self {
        Self { address, signer }
    }

    pub fn signer(&self) -> &Signer<P> {
        &self.signer
    }

    /// Solidity signature of the eligibility query.
    pub fn descriptor() -> &'static str {
        CheckRedeemAvailableCall::SIGNATURE
    }

    /// `checkSilverCardRedeemAvailable(owner, chapter, card)`
    ///
    /// Returns how many cards of `chapter`/`card` the owner can still redeem.
    /// A malformed `owner` or signer account fails here, before any call is sent.
    pub async fn check_silver_card_redeem_available(
        &self,
        owner: &str,
        chapter: U256,
        card: U256,
    ) -> Result<U256, ContractError> {
        let call = CheckRedeemAvailableCall {
            owner: parse_account(owner)?,
            chapter,
            card,
        };
        let request = CallRequest {
            from: Some(self.signer.address()?),
            to: self.address,
            data: call.abi_encode().into(),
        };

        log::debug!(
            "[CONTRACT] eth_call {} on {} ({} bytes calldata)",
            Self::descriptor(),
            self.address,
            request.data.len()
        );

        let output = self.signer.provider().call(&request).await?;
        let count = CheckRedeemAvailableCall::abi_decode_returns(&output)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::services::mock::MockProvider;
    use alloy_primitives::{address, keccak256};
    use futures::executor::block_on;

    const CONTRACT: Address = address!("0x456ba3CB23b103Fa3925FA1E48E3075646F3de3C");
    const ACCOUNT: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

    fn read(contract: &ContractHandle<MockProvider>) -> Result<U256, ContractError> {
        let owner = contract.signer().account().to_string();
        block_on(contract.check_silver_card_redeem_available(
            &owner,
            U256::from(1),
            U256::from(1),
        ))
    }

    #[test]
    fn test_descriptor_selector() {
        let expected = keccak256("checkSilverCardRedeemAvailable(address,uint256,uint256)");
        assert_eq!(CheckRedeemAvailableCall::SELECTOR, expected[..4]);
        assert_eq!(
            ContractHandle::<MockProvider>::descriptor(),
            "checkSilverCardRedeemAvailable(address,uint256,uint256)"
        );
    }

    #[test]
    fn test_signer_keeps_raw_account() {
        let provider = Rc::new(MockProvider::new());
        let signer = Signer::new(provider, "not-an-address");
        assert_eq!(signer.account(), "not-an-address");
        assert!(matches!(signer.address(), Err(ContractError::InvalidAccount { .. })));
    }

    #[test]
    fn test_read_encodes_call_and_decodes_count() {
        let provider = Rc::new(MockProvider::new().returning_count(3));
        let contract = ContractHandle::bind(CONTRACT, Signer::new(Rc::clone(&provider), ACCOUNT));
        let owner: Address = ACCOUNT.parse().unwrap();

        assert_eq!(read(&contract).unwrap(), U256::from(3));

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to, CONTRACT);
        assert_eq!(calls[0].from, Some(owner));
        // selector + three 32-byte words
        assert_eq!(calls[0].data.len(), 4 + 3 * 32);

        let decoded = CheckRedeemAvailableCall::abi_decode(&calls[0].data).unwrap();
        assert_eq!(decoded.owner, owner);
        assert_eq!(decoded.chapter, U256::from(1));
        assert_eq!(decoded.card, U256::from(1));
    }

    #[test]
    fn test_read_with_malformed_account_sends_nothing() {
        let provider = Rc::new(MockProvider::new().returning_count(3));
        let contract = ContractHandle::bind(CONTRACT, Signer::new(Rc::clone(&provider), "0xABC"));

        let err = read(&contract).err().unwrap();
        assert!(matches!(err, ContractError::InvalidAccount { .. }));
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn test_read_propagates_provider_error() {
        let provider = Rc::new(
            MockProvider::new().failing_calls(WalletError::from_rpc(-32000, "execution reverted")),
        );
        let contract = ContractHandle::bind(CONTRACT, Signer::new(provider, ACCOUNT));

        let err = read(&contract).err().unwrap();
        assert!(matches!(err, ContractError::Wallet(WalletError::Rpc { code: -32000, .. })));
    }

    #[test]
    fn test_read_fails_on_empty_return_data() {
        // What a call to an address without code returns
        let provider = Rc::new(MockProvider::new().returning_raw(Vec::new()));
        let contract = ContractHandle::bind(CONTRACT, Signer::new(provider, ACCOUNT));

        let err = read(&contract).err().unwrap();
        assert!(matches!(err, ContractError::Abi(_)));
    }
}
