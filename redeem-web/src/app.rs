//! Silver Card Redeem - Leptos Frontend

use leptos::prelude::*;

use crate::components::Navbar;
use crate::config::RedeemConfig;
use crate::pages::RedeemPage;
use crate::state::redeem::provide_redeem_context;

#[component]
pub fn App() -> impl IntoView {
    provide_redeem_context(RedeemConfig::default());

    view! {
        <div class="app-container">
            <Navbar/>
            <RedeemPage/>
        </div>
    }
}
