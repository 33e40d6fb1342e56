//! Mint state management
//!
//! [`MintHandle`] is what the root wrapper hands to the page: a copyable pair of
//! the state signal and the controller that updates it.

use std::rc::Rc;

use alloy_primitives::Address;
use leptos::prelude::*;
use shared::{Chain, ClaimOutcome, MintController, MintState, MintView};

use crate::services::wallet::InjectedWallet;

pub type WebMintController = MintController<InjectedWallet, InjectedWallet>;

#[derive(Clone, Copy)]
pub struct MintHandle {
    pub state: RwSignal<MintState>,
    controller: StoredValue<Rc<WebMintController>, LocalStorage>,
    chain: Chain,
}

impl MintHandle {
    /// Wrap a controller; every state change is mirrored into the signal.
    pub fn new(controller: WebMintController) -> Self {
        let state = RwSignal::new(controller.state());
        controller.subscribe(move |snapshot| state.set(snapshot.clone()));
        let chain = controller.config().chain;
        Self {
            state,
            controller: StoredValue::new_local(Rc::new(controller)),
            chain,
        }
    }

    fn controller(&self) -> Rc<WebMintController> {
        self.controller.get_value()
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn view(&self) -> MintView {
        self.state.with(MintView::from_state)
    }

    pub fn address(&self) -> Option<String> {
        self.state.with(|state| state.display_address())
    }

    pub fn last_outcome(&self) -> Option<ClaimOutcome> {
        self.state.with(|state| state.last_outcome.clone())
    }

    /// "Connect Wallet" click.
    pub fn connect(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            // Outcome is already logged and reflected in state.
            let _ = controller.connect().await;
        });
    }

    /// "Claim a NFT" click.
    pub fn claim(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            let _ = controller.claim().await;
        });
    }

    /// Silent check for an already-authorised account.
    pub fn restore(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            if let Err(err) = controller.restore().await {
                log::debug!("no authorised wallet account: {}", err);
            }
        });
    }

    pub fn set_address(&self, address: Option<Address>) {
        self.controller().set_address(address);
    }

    pub fn disconnect(&self) {
        self.controller().disconnect();
    }
}
