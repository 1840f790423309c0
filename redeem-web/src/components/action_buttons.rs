//! Connect and Redeem buttons

use leptos::prelude::*;

use crate::state::redeem::use_redeem_context;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let redeem_ctx = use_redeem_context();

    view! {
        <button
            class="cta-button connect-wallet-button"
            on:click=move |_| redeem_ctx.connect()
        >
            "Connect Wallet"
        </button>
    }
}

/// Redeeming is not implemented; the button is rendered but never enabled.
#[component]
pub fn RedeemButton() -> impl IntoView {
    view! {
        <button class="cta-button mint-nft-button" disabled=true>
            "Redeem Comic"
        </button>
    }
}
