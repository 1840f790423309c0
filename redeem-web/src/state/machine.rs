//! # Connection Machine
//!
//! Drives the four-stage chain that ends with the eligibility count on screen:
//!
//! ```text
//! Uninitialized ──start──▶ ProviderReady ──account──▶ AccountReady ──bind──▶ ContractReady ──read──▶ DataReady
//!       │
//!       └──no provider──▶ NoProvider
//! ```
//!
//! The machine owns every piece of state and is driven by one local task
//! ([`ConnectionMachine::run`]) that receives [`Command`]s from the UI. Each
//! committed update is published as a [`Snapshot`] through the observer.
//!
//! Each automatic step re-checks its own precondition and does nothing when it
//! is not met. Failures are logged and never retried; the machine simply stays
//! in the last stage it reached.

use std::rc::Rc;

use alloy_primitives::U256;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

use crate::config::RedeemConfig;
use crate::services::contract::{ContractHandle, Signer};
use crate::services::provider::WalletProvider;

/// Where the chain currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Provider discovery has not finished
    #[default]
    Uninitialized,
    /// No wallet extension was found. Terminal.
    NoProvider,
    /// A provider exists but no account is authorized yet
    ProviderReady,
    /// An account is known, the contract is not bound for it yet
    AccountReady,
    /// The contract is bound, the eligibility read is pending or failed
    ContractReady,
    /// The eligibility count has been read
    DataReady,
}

/// Immutable view of the machine handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub stage: Stage,
    pub account: Option<String>,
    /// Redeemable card count, zero until the first read completes
    pub eligible: U256,
}

impl Snapshot {
    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }
}

/// User initiated events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ask the wallet to authorize an account (prompts the user)
    Connect,
}

/// Owner of the connection state; advances the chain one stage at a time.
pub struct ConnectionMachine<P> {
    config: RedeemConfig,
    provider: Option<Rc<P>>,
    account: Option<String>,
    contract: Option<ContractHandle<P>>,
    eligible: U256,
    stage: Stage,
    bindings: usize,
    observer: Box<dyn Fn(&Snapshot)>,
}

impl<P: WalletProvider> ConnectionMachine<P> {
    pub fn new(config: RedeemConfig, observer: impl Fn(&Snapshot) + 'static) -> Self {
        Self {
            config,
            provider: None,
            account: None,
            contract: None,
            eligible: U256::ZERO,
            stage: Stage::Uninitialized,
            bindings: 0,
            observer: Box::new(observer),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stage: self.stage,
            account: self.account.clone(),
            eligible: self.eligible,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of contract handles built so far.
    pub fn contract_bindings(&self) -> usize {
        self.bindings
    }

    /// Process the detected provider, then serve commands until the sender
    /// side is dropped.
    pub async fn run(mut self, provider: Option<P>, mut commands: UnboundedReceiver<Command>) {
        self.start(provider).await;

        while let Some(command) = commands.next().await {
            self.handle(command).await;
        }

        log::debug!("[MACHINE] Command channel closed, stopping");
    }

    pub async fn handle(&mut self, command: Command) {
        match command {
            Command::Connect => self.connect().await,
        }
    }

    /// `Uninitialized -> ProviderReady | NoProvider`. Only the first call has an effect.
    pub async fn start(&mut self, provider: Option<P>) {
        if self.stage != Stage::Uninitialized {
            log::warn!("[PROVIDER] Provider discovery already ran, ignoring");
            return;
        }

        match provider {
            Some(provider) => {
                log::info!("[PROVIDER] Wallet provider detected");
                self.provider = Some(Rc::new(provider));
                self.transition(Stage::ProviderReady);
                self.discover_accounts().await;
            }
            None => {
                log::warn!("[PROVIDER] No wallet provider found. Please install MetaMask!");
                self.transition(Stage::NoProvider);
            }
        }
    }

    /// Passive account discovery (`eth_accounts`). Never prompts.
    async fn discover_accounts(&mut self) {
        let Some(provider) = self.provider.clone() else {
            log::warn!("[ACCOUNT] No wallet provider, skipping account discovery");
            return;
        };

        match provider.accounts().await {
            Ok(accounts) => match select_account(accounts) {
                Some(account) => {
                    log::info!("[ACCOUNT] Found an authorized account: {}", account);
                    self.set_account(account).await;
                }
                None => log::info!("[ACCOUNT] No authorized account found"),
            },
            Err(e) => log::error!("[ACCOUNT] eth_accounts failed: {}", e),
        }
    }

    /// User initiated authorization (`eth_requestAccounts`).
    ///
    /// A declined prompt leaves everything as it was so the user can try again.
    pub async fn connect(&mut self) {
        let Some(provider) = self.provider.clone() else {
            log::warn!("[ACCOUNT] Cannot connect: no wallet provider. Please install MetaMask!");
            return;
        };

        match provider.request_accounts().await {
            Ok(accounts) => match select_account(accounts) {
                Some(account) => {
                    log::info!("[ACCOUNT] Account authorized: {}", account);
                    self.set_account(account).await;
                }
                None => log::warn!("[ACCOUNT] Wallet authorized no accounts"),
            },
            Err(e) if e.is_user_rejection() => {
                log::warn!("[ACCOUNT] User declined authorization: {}", e);
            }
            Err(e) => log::warn!("[ACCOUNT] Authorization failed: {}", e),
        }
    }

    /// Adopt `account` and run the rest of the chain for it.
    async fn set_account(&mut self, account: String) {
        if self.account.as_deref() == Some(account.as_str()) {
            log::debug!("[ACCOUNT] Account unchanged, nothing to do");
            return;
        }

        self.account = Some(account);
        self.transition(Stage::AccountReady);

        if self.bind_contract() {
            self.query_eligibility().await;
        }
    }

    /// `AccountReady -> ContractReady`. Returns whether a new handle was built.
    ///
    /// Binding is unconditional once provider and account exist; a malformed
    /// account only surfaces when the read is attempted.
    fn bind_contract(&mut self) -> bool {
        let (Some(provider), Some(account)) = (self.provider.as_ref(), self.account.as_deref()) else {
            return false;
        };

        let signer = Signer::new(Rc::clone(provider), account);
        self.contract = Some(ContractHandle::bind(self.config.contract_address, signer));
        self.bindings += 1;
        log::info!(
            "[CONTRACT] Bound {} at {} (binding #{})",
            ContractHandle::<P>::descriptor(),
            self.config.contract_address,
            self.bindings
        );
        self.transition(Stage::ContractReady);
        true
    }

    /// `ContractReady -> DataReady`. One read per call, no retry.
    async fn query_eligibility(&mut self) {
        let result = {
            let Some(contract) = self.contract.as_ref() else {
                return;
            };
            contract
                .check_silver_card_redeem_available(
                    contract.signer().account(),
                    self.config.chapter_arg(),
                    self.config.card_arg(),
                )
                .await
        };

        match result {
            Ok(count) => {
                log::info!("[QUERY] Redeemable silver cards: {}", count);
                self.eligible = count;
                self.transition(Stage::DataReady);
            }
            Err(e) => log::error!("[QUERY] checkSilverCardRedeemAvailable failed: {}", e),
        }
    }

    fn transition(&mut self, stage: Stage) {
        log::debug!("[MACHINE] {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
        (self.observer)(&self.snapshot());
    }
}

/// First account wins; extras are ignored.
fn select_account(accounts: Vec<String>) -> Option<String> {
    if accounts.len() > 1 {
        log::debug!(
            "[ACCOUNT] Wallet returned {} accounts, using the first",
            accounts.len()
        );
    }
    accounts.into_iter().next()
}
