//! # Mint Shared Library
//!
//! Target-independent core of the NFT drop mint page. Everything here compiles
//! natively and to `wasm32-unknown-unknown`; the browser-specific pieces (the
//! injected wallet bridge and the Leptos views) live in `mint-web` and plug in
//! through the traits in [`service`].
//!
//! ## Structure
//!
//! - **[`chain`]**: Known EVM chains, resolvable by name (`"mumbai"`)
//! - **[`config`]**: Compiled-in configuration, validated at startup
//! - **[`claim`]**: `claim` ABI and arguments
//! - **[`contract`]**: Contract handle and its write operations
//! - **[`controller`]**: Connect/claim actions over an explicit state object
//! - **[`dto`]**: JSON objects exchanged with the wallet
//! - **[`error`]**: [`MintError`] and the `Result` alias
//! - **[`service`]**: Wallet and transaction collaborator traits
//! - **[`state`]**: [`MintState`] and the view derived from it
//! - **[`utils`]**: Address parsing and formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use shared::{MintConfig, MintController};
//! # async fn run<W, S>(wallet: Rc<W>, sender: Rc<S>) -> shared::Result<()>
//! # where W: shared::WalletConnector, S: shared::TransactionSender {
//!
//! let config = MintConfig::new("mumbai", "0xbaE62330A4CBb09FDE57c2Dc25f7E05A421424ba")?;
//! let controller = MintController::new(config, wallet, sender);
//!
//! controller.subscribe(|state| println!("connected: {}", state.connected()));
//! controller.connect().await?;
//! let receipt = controller.claim().await?;
//! println!("minted in {}", receipt.tx_hash);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod claim;
pub mod config;
pub mod contract;
pub mod controller;
pub mod dto;
pub mod error;
pub mod service;
pub mod state;
pub mod utils;

pub use chain::Chain;
pub use config::MintConfig;
pub use contract::{Contract, ContractWrite};
pub use controller::MintController;
pub use dto::{TransactionReceipt, TransactionRequest};
pub use error::{MintError, Result};
pub use service::{TransactionSender, WalletConnector};
pub use state::{ClaimOutcome, MintState, MintView};
