//! Navigation Bar Component
//!
//! Brand on the left; target network and connected account on the right.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::mint::MintHandle;

#[component]
pub fn Navbar(mint: MintHandle) -> impl IntoView {
    let chain = mint.chain();
    let network = if chain.is_testnet() {
        format!("{} (testnet)", chain.name())
    } else {
        chain.name().to_string()
    };

    view! {
        <nav>
            <A href="/mint">
                <span class="nav-title">"NFT Drop"</span>
            </A>
            <div class="nav-status">
                <span class="chain-badge">{network}</span>
                {move || mint.address().map(|address| view! {
                    <span class="wallet-address">{address}</span>
                    <button class="btn-link" on:click=move |_| mint.disconnect()>"Disconnect"</button>
                })}
            </div>
        </nav>
    }
}
