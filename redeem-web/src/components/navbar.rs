//! Navigation Bar Component

use leptos::prelude::*;

use crate::state::redeem::use_redeem_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let network_name = use_redeem_context().config().network.name;

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <span class="nav-title">"Silver Cards"</span>
                <span class="nav-network">{network_name}</span>
            </div>
        </nav>
    }
}
