//! In-memory [`WalletProvider`] for tests.

use std::cell::{Cell, RefCell};

use alloy_primitives::{Bytes, U256};
use async_trait::async_trait;

use crate::error::WalletError;
use crate::services::provider::{CallRequest, WalletProvider};

/// Scripted wallet. Every call is recorded so tests can count them.
pub struct MockProvider {
    authorized: Vec<String>,
    accounts_error: Option<WalletError>,
    authorize_result: RefCell<Result<Vec<String>, WalletError>>,
    call_result: Result<Bytes, WalletError>,
    calls: RefCell<Vec<CallRequest>>,
    account_queries: Cell<usize>,
    authorizations: Cell<usize>,
}

impl MockProvider {
    /// No authorized accounts, user approves nothing, calls return zero.
    pub fn new() -> Self {
        Self {
            authorized: Vec::new(),
            accounts_error: None,
            authorize_result: RefCell::new(Ok(Vec::new())),
            call_result: Ok(Bytes::from(U256::ZERO.to_be_bytes::<32>().to_vec())),
            calls: RefCell::new(Vec::new()),
            account_queries: Cell::new(0),
            authorizations: Cell::new(0),
        }
    }

    /// Accounts returned by `eth_accounts`.
    pub fn with_authorized(mut self, accounts: &[&str]) -> Self {
        self.authorized = accounts.iter().map(|a| a.to_string()).collect();
        self
    }

    /// `eth_accounts` fails with `err`.
    pub fn failing_accounts(mut self, err: WalletError) -> Self {
        self.accounts_error = Some(err);
        self
    }

    /// Accounts returned once the user approves `eth_requestAccounts`.
    pub fn approving(self, accounts: &[&str]) -> Self {
        self.set_authorize_result(Ok(accounts.iter().map(|a| a.to_string()).collect()));
        self
    }

    /// The user declines the authorization prompt.
    pub fn rejecting(self) -> Self {
        self.set_authorize_result(Err(WalletError::from_rpc(
            4001,
            "User rejected the request.",
        )));
        self
    }

    pub fn set_authorize_result(&self, result: Result<Vec<String>, WalletError>) {
        *self.authorize_result.borrow_mut() = result;
    }

    /// `eth_call` returns `count` ABI encoded as a uint256.
    pub fn returning_count(self, count: u64) -> Self {
        self.returning_raw(U256::from(count).to_be_bytes::<32>().to_vec())
    }

    pub fn returning_raw(mut self, data: Vec<u8>) -> Self {
        self.call_result = Ok(Bytes::from(data));
        self
    }

    pub fn failing_calls(mut self, err: WalletError) -> Self {
        self.call_result = Err(err);
        self
    }

    pub fn calls(&self) -> Vec<CallRequest> {
        self.calls.borrow().clone()
    }

    pub fn account_queries(&self) -> usize {
        self.account_queries.get()
    }

    pub fn authorizations(&self) -> usize {
        self.authorizations.get()
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        self.account_queries.set(self.account_queries.get() + 1);
        match &self.accounts_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.authorized.clone()),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.authorizations.set(self.authorizations.get() + 1);
        self.authorize_result.borrow().clone()
    }

    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletError> {
        self.calls.borrow_mut().push(request.clone());
        self.call_result.clone()
    }
}
