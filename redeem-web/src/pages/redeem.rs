//! Redeem Page - eligibility count and the single action button

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::components::{ConnectButton, RedeemButton};
use crate::state::machine::Snapshot;
use crate::state::redeem::use_redeem_context;
use crate::utils::format::format_count;

pub const CONNECT_PROMPT: &str = "Connect an account to get started";

/// The one action offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Enabled, shown while no account is connected
    Connect,
    /// Always disabled, shown once an account is connected
    Redeem,
}

pub fn primary_action(snapshot: &Snapshot) -> PrimaryAction {
    if snapshot.has_account() {
        PrimaryAction::Redeem
    } else {
        PrimaryAction::Connect
    }
}

/// Heading text. The count only appears once an account is connected and
/// reads zero until the first query completes.
pub fn headline(snapshot: &Snapshot) -> String {
    if snapshot.has_account() {
        format!(
            "I can redeem {} chapter-one silver cards",
            format_count(snapshot.eligible)
        )
    } else {
        CONNECT_PROMPT.to_string()
    }
}

#[component]
pub fn RedeemPage() -> impl IntoView {
    let redeem_ctx = use_redeem_context();
    let config = redeem_ctx.config();
    let contract_url = config.contract_url();
    let network_name = config.network.name;

    view! {
        <div class="main-app">
            <h1>{move || redeem_ctx.snapshot.with(headline)}</h1>

            {move || redeem_ctx.account().map(|account| view! {
                <p class="wallet-address" title=account.clone()>
                    "Connected as " {truncate_address(&account)}
                </p>
            })}

            <div>
                {move || match redeem_ctx.snapshot.with(primary_action) {
                    PrimaryAction::Connect => view! { <ConnectButton/> }.into_any(),
                    PrimaryAction::Redeem => view! { <RedeemButton/> }.into_any(),
                }}
            </div>

            <p class="contract-link">
                <a href=contract_url target="_blank" rel="noopener noreferrer">
                    "View the contract on " {network_name}
                </a>
            </p>
        </div>
    }
}
