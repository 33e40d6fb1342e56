//! # Service Traits
//!
//! Seams between the mint logic and the browser wallet, so the controller can be
//! driven by the wasm bridge in production and by hand-written mocks in tests.
//!
//! Futures produced in the browser hold `JsValue`s and are not `Send`, hence
//! `#[async_trait(?Send)]`.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::chain::Chain;
use crate::dto::{TransactionReceipt, TransactionRequest};
use crate::error::Result;

/// Wallet-connection collaborator.
#[async_trait(?Send)]
pub trait WalletConnector {
    /// Ask the wallet for account access. Opens the extension prompt when the
    /// site is not yet authorised.
    async fn request_connection(&self) -> Result<Address>;

    /// Account the wallet currently exposes to this site, without prompting.
    async fn current_address(&self) -> Result<Option<Address>>;

    /// Chain id the wallet is currently on.
    async fn chain_id(&self) -> Result<u64>;

    /// Ask the wallet to switch to `chain`, adding it first if unknown.
    async fn switch_chain(&self, chain: Chain) -> Result<()>;
}

/// Transaction submission collaborator.
#[async_trait(?Send)]
pub trait TransactionSender {
    /// Sign and broadcast, returning the transaction hash.
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<String>;

    /// Resolve once the transaction is mined.
    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt>;
}
