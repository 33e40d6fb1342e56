//! # Mint State
//!
//! The explicit state object observed by the page. The view is a pure function
//! of it: [`MintView::from_state`] decides which single button the page shows.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::dto::TransactionReceipt;
use crate::error::MintError;
use crate::utils::truncate_address;

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const CONNECTING_LABEL: &str = "Connecting...";
pub const CLAIM_LABEL: &str = "Claim a NFT";
pub const CLAIMING_LABEL: &str = "Claiming...";

/// Result of the most recent claim attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOutcome {
    Success { tx_hash: String, block_number: u64 },
    Failure { message: String },
}

impl From<&TransactionReceipt> for ClaimOutcome {
    fn from(receipt: &TransactionReceipt) -> Self {
        ClaimOutcome::Success {
            tx_hash: receipt.tx_hash.clone(),
            block_number: receipt.block_number,
        }
    }
}

impl From<&MintError> for ClaimOutcome {
    fn from(err: &MintError) -> Self {
        ClaimOutcome::Failure {
            message: err.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintState {
    /// `None` while disconnected, otherwise the connected account.
    pub address: Option<Address>,
    pub connecting: bool,
    /// A claim is awaiting its result.
    pub pending: bool,
    pub last_outcome: Option<ClaimOutcome>,
}

impl MintState {
    pub fn connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn display_address(&self) -> Option<String> {
        self.address.map(|address| truncate_address(&address.to_string()))
    }
}

/// What the page renders for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintView {
    ConnectWallet { busy: bool },
    ClaimNft { busy: bool },
}

impl MintView {
    pub fn from_state(state: &MintState) -> Self {
        if state.connected() {
            MintView::ClaimNft { busy: state.pending }
        } else {
            MintView::ConnectWallet { busy: state.connecting }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MintView::ConnectWallet { busy: false } => CONNECT_LABEL,
            MintView::ConnectWallet { busy: true } => CONNECTING_LABEL,
            MintView::ClaimNft { busy: false } => CLAIM_LABEL,
            MintView::ClaimNft { busy: true } => CLAIMING_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        match self {
            MintView::ConnectWallet { busy } | MintView::ClaimNft { busy } => *busy,
        }
    }
}
