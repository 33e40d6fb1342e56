//! NFT Drop Mint - Leptos Frontend
//!
//! Root wrapper: builds the wallet/contract client once and hands it to the
//! page tree explicitly.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use shared::{MintConfig, MintController};

use crate::components::Navbar;
use crate::pages::{MintPage, NotFound};
use crate::services::wallet::{get_available_wallets, InjectedWallet, WalletProvider};
use crate::state::mint::MintHandle;
use crate::utils::constants::{
    ACTIVE_CHAIN, CLAIM_QUANTITY, CONTRACT_ADDRESS, RECEIPT_POLL_INTERVAL_MS,
};

/// Build the client from the compiled-in configuration and start watching the
/// wallet's account.
fn build_client() -> shared::Result<MintHandle> {
    let config = MintConfig::new(ACTIVE_CHAIN, CONTRACT_ADDRESS)?
        .with_quantity(CLAIM_QUANTITY)?
        .with_receipt_poll_interval_ms(RECEIPT_POLL_INTERVAL_MS);
    log::info!(
        "targeting {} on {} (chain id {})",
        config.contract,
        config.chain,
        config.chain.id()
    );

    let wallets = get_available_wallets();
    if wallets.is_empty() {
        log::warn!("no injected wallet detected");
    } else {
        let names: Vec<&str> = wallets.iter().map(|w| w.name()).collect();
        log::info!("detected wallets: {}", names.join(", "));
    }

    let wallet = Rc::new(InjectedWallet::new(
        WalletProvider::MetaMask,
        config.receipt_poll_interval_ms,
    ));
    let controller = MintController::new(config, Rc::clone(&wallet), Rc::clone(&wallet));
    let mint = MintHandle::new(controller);

    wallet.watch_accounts(move |address| mint.set_address(address));
    mint.restore();
    Ok(mint)
}

#[component]
pub fn App() -> impl IntoView {
    let mint = match build_client() {
        Ok(mint) => mint,
        Err(err) => {
            log::error!("invalid mint configuration: {}", err);
            return view! {
                <div class="mint-container">
                    <div class="card error">
                        <p>{format!("Configuration error: {}", err)}</p>
                    </div>
                </div>
            }
            .into_any();
        }
    };

    view! {
        <Router>
            <div class="app-container">
                <Navbar mint=mint/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=move || view! { <MintPage mint=mint/> }/>
                    <Route path=path!("/mint") view=move || view! { <MintPage mint=mint/> }/>
                </Routes>
            </div>
        </Router>
    }
    .into_any()
}
