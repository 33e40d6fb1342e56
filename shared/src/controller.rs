//! # Mint Controller
//!
//! Owns the [`MintState`] and runs the two user actions against the injected
//! collaborators:
//!
//! - **connect**: one `request_connection` call; the address lands in state.
//! - **claim**: one `claim` write against the configured contract; success or
//!   failure is logged and stored as the last outcome.
//!
//! The controller is single-threaded (`Rc`/`RefCell`). State borrows are never
//! held across an `.await`, and the `pending` flag is raised before the first
//! await, so a second claim issued while one is in flight is refused without
//! reaching the wallet.
//!
//! Observers register with [`MintController::subscribe`] and receive a snapshot
//! after every change; the web page mirrors it into a signal.

use std::cell::RefCell;
use std::rc::Rc;

use alloy_primitives::Address;

use crate::chain::Chain;
use crate::claim::ClaimArgs;
use crate::config::MintConfig;
use crate::dto::TransactionReceipt;
use crate::error::{MintError, Result};
use crate::service::{TransactionSender, WalletConnector};
use crate::state::{ClaimOutcome, MintState};

type Listener = Box<dyn Fn(&MintState)>;

pub struct MintController<W: ?Sized, S: ?Sized> {
    config: MintConfig,
    wallet: Rc<W>,
    sender: Rc<S>,
    state: RefCell<MintState>,
    listeners: RefCell<Vec<Listener>>,
}

impl<W, S> MintController<W, S>
where
    W: WalletConnector + ?Sized,
    S: TransactionSender + ?Sized,
{
    pub fn new(config: MintConfig, wallet: Rc<W>, sender: Rc<S>) -> Self {
        Self {
            config,
            wallet,
            sender,
            state: RefCell::new(MintState::default()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> MintState {
        self.state.borrow().clone()
    }

    /// Register an observer. It must not call `subscribe` itself.
    pub fn subscribe(&self, listener: impl Fn(&MintState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn update(&self, change: impl FnOnce(&mut MintState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.clone()
        };
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }

    /// Pick up an account the wallet already authorised, without a prompt.
    pub async fn restore(&self) -> Result<Option<Address>> {
        let address = self.wallet.current_address().await?;
        if let Some(address) = address {
            log::info!("wallet already connected: {}", address);
            self.update(|state| state.address = Some(address));
        }
        Ok(address)
    }

    /// Feed an externally observed account change (e.g. `accountsChanged`).
    pub fn set_address(&self, address: Option<Address>) {
        if self.state.borrow().address == address {
            return;
        }
        match address {
            Some(address) => log::info!("wallet account changed: {}", address),
            None => log::info!("wallet disconnected"),
        }
        self.update(|state| state.address = address);
    }

    /// Forget the connected account locally. Wallets keep the site authorised.
    pub fn disconnect(&self) {
        self.set_address(None);
    }

    /// Handle a "Connect Wallet" click.
    pub async fn connect(&self) -> Result<Address> {
        {
            let state = self.state.borrow();
            if let Some(address) = state.address {
                return Ok(address);
            }
            if state.connecting {
                return Err(MintError::ConnectionRejected(
                    "a connection request is already open in the wallet".to_string(),
                ));
            }
        }

        self.update(|state| state.connecting = true);
        let result = self.wallet.request_connection().await;

        match &result {
            Ok(address) => log::info!("wallet connected: {}", address),
            Err(err) => log::warn!("wallet connection failed: {}", err),
        }
        let address = result.as_ref().ok().copied();
        self.update(|state| {
            state.connecting = false;
            if address.is_some() {
                state.address = address;
            }
        });
        result
    }

    /// Handle a "Claim a NFT" click.
    pub async fn claim(&self) -> Result<TransactionReceipt> {
        let from = self.begin_claim()?;
        let result = self.submit_claim(from).await;

        match &result {
            Ok(receipt) => log::info!(
                "contract call success: {} (block {})",
                receipt.tx_hash,
                receipt.block_number
            ),
            Err(err) => log::error!("contract call failure: {}", err),
        }

        let outcome = match &result {
            Ok(receipt) => ClaimOutcome::from(receipt),
            Err(err) => ClaimOutcome::from(err),
        };
        self.update(|state| {
            state.pending = false;
            state.last_outcome = Some(outcome);
        });
        result
    }

    fn begin_claim(&self) -> Result<Address> {
        let from = {
            let state = self.state.borrow();
            if state.pending {
                log::warn!("claim ignored: previous claim still pending");
                return Err(MintError::ClaimPending);
            }
            state.address.ok_or(MintError::NotConnected)?
        };
        self.update(|state| {
            state.pending = true;
            state.last_outcome = None;
        });
        Ok(from)
    }

    async fn submit_claim(&self, from: Address) -> Result<TransactionReceipt> {
        self.ensure_chain().await?;
        let args = ClaimArgs::public(from, self.config.quantity);
        let write = self.config.contract().write("claim")?;
        write.call(self.sender.as_ref(), from, &args).await
    }

    async fn ensure_chain(&self) -> Result<()> {
        let expected = self.config.chain;
        let actual = self.wallet.chain_id().await?;
        if actual == expected.id() {
            return Ok(());
        }

        match Chain::from_id(actual) {
            Some(current) => log::info!("switching wallet from {} to {}", current, expected),
            None => log::info!("switching wallet from chain {} to {}", actual, expected),
        }
        self.wallet.switch_chain(expected).await?;

        let actual = self.wallet.chain_id().await?;
        if actual != expected.id() {
            return Err(MintError::WrongChain {
                expected: expected.id(),
                actual,
            });
        }
        Ok(())
    }
}
