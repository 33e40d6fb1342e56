//! Mint Page - connect a wallet, then claim from the drop
//!
//! Exactly one button is shown: "Connect Wallet" while disconnected, "Claim a
//! NFT" once an account is known. Each click triggers a single remote call.

use leptos::prelude::*;
use shared::utils::truncate_address;
use shared::{ClaimOutcome, MintView};
use web_sys::MouseEvent;

use crate::state::mint::MintHandle;

#[component]
pub fn MintPage(mint: MintHandle) -> impl IntoView {
    let on_connect = move |_: MouseEvent| mint.connect();
    let on_claim = move |ev: MouseEvent| {
        ev.prevent_default();
        mint.claim();
    };

    view! {
        <div class="mint-container">
            <div class="card">
                <h1 class="card-title">"NFT Drop"</h1>
                <p class="subtitle">
                    {move || match mint.address() {
                        Some(address) => format!("Connected as {}", address),
                        None => format!("Connect a wallet on {} to claim", mint.chain().name()),
                    }}
                </p>

                {move || {
                    let current = mint.view();
                    match current {
                        MintView::ConnectWallet { .. } => view! {
                            <button class="btn" disabled=current.disabled() on:click=on_connect>
                                {current.label()}
                            </button>
                        }.into_any(),
                        MintView::ClaimNft { .. } => view! {
                            <button class="btn btn-claim" disabled=current.disabled() on:click=on_claim>
                                {current.label()}
                            </button>
                        }.into_any(),
                    }
                }}

                {move || (mint.view() == MintView::ClaimNft { busy: true }).then(|| view! {
                    <p class="hint">"Please approve the transaction in your wallet..."</p>
                })}

                {move || mint.last_outcome().map(|outcome| match outcome {
                    ClaimOutcome::Success { tx_hash, block_number } => {
                        let href = mint.chain().tx_url(&tx_hash);
                        view! {
                            <div class="success">
                                <p>{format!("Claimed in block {}", block_number)}</p>
                                <a href=href target="_blank" rel="noopener noreferrer">
                                    {truncate_address(&tx_hash)}
                                </a>
                            </div>
                        }.into_any()
                    }
                    ClaimOutcome::Failure { message } => view! {
                        <div class="error">
                            <p>{message}</p>
                        </div>
                    }.into_any(),
                })}
            </div>
        </div>
    }
}
