//! # Mint Error Types
//!
//! Consolidated error handling for the mint front-end.
//!
//! Every failure the page can observe falls into one of two families:
//!
//! - **Connection**: the wallet is missing, locked, or the user refused the
//!   connection prompt.
//! - **Transaction**: the claim could not be signed, submitted, or mined.
//!
//! [`MintError::is_connection_error`] and [`MintError::is_transaction_error`]
//! tell them apart. Neither family is fatal: the page stays interactive after
//! any error. Configuration errors (unknown chain, bad address, zero quantity)
//! belong to neither and only surface at startup.
//!
//! ```rust
//! use shared::error::MintError;
//!
//! let err = MintError::ConnectionRejected("User rejected the request.".to_string());
//! assert!(err.is_connection_error());
//! assert_eq!(err.to_string(), "Wallet connection rejected: User rejected the request.");
//! ```

use thiserror::Error;

/// Error type shared by the controller, the contract binding and the wallet bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    /// No injected EIP-1193 provider was found on `window`.
    #[error("No browser wallet found. Install MetaMask or another EVM wallet extension.")]
    WalletNotInstalled,

    /// The wallet refused or failed the `eth_requestAccounts` prompt.
    #[error("Wallet connection rejected: {0}")]
    ConnectionRejected(String),

    /// A write was attempted while no wallet address is known.
    #[error("No wallet connected")]
    NotConnected,

    /// A claim is already awaiting its result.
    #[error("A claim is already in progress")]
    ClaimPending,

    /// The wallet accepted the chain switch but still reports another chain.
    #[error("Wrong network: expected chain {expected}, wallet is on chain {actual}")]
    WrongChain { expected: u64, actual: u64 },

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The contract binding has no ABI entry for the requested write method.
    #[error("Unknown contract method: {0}")]
    UnknownMethod(String),

    /// Signing or submission failed (includes the user rejecting the signature).
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// The transaction was mined with a failed status.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// The provider answered with something we could not interpret.
    #[error("RPC error: {0}")]
    Rpc(String),
}

impl MintError {
    /// `true` for errors raised while establishing the wallet connection.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            MintError::WalletNotInstalled | MintError::ConnectionRejected(_)
        )
    }

    /// `true` for errors raised while submitting or awaiting a write.
    pub fn is_transaction_error(&self) -> bool {
        matches!(
            self,
            MintError::NotConnected
                | MintError::ClaimPending
                | MintError::WrongChain { .. }
                | MintError::UnknownMethod(_)
                | MintError::Transaction(_)
                | MintError::Reverted(_)
                | MintError::Rpc(_)
        )
    }
}

/// Convenience alias for `Result<T, MintError>`.
pub type Result<T> = std::result::Result<T, MintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_families() {
        assert!(MintError::WalletNotInstalled.is_connection_error());
        assert!(MintError::ConnectionRejected("denied".into()).is_connection_error());
        assert!(MintError::Transaction("user rejected".into()).is_transaction_error());
        assert!(MintError::Reverted("0xabc".into()).is_transaction_error());
        assert!(!MintError::ClaimPending.is_connection_error());
    }

    #[test]
    fn test_config_errors_belong_to_neither_family() {
        for err in [
            MintError::InvalidConfig("claim quantity must be at least 1".into()),
            MintError::UnknownChain("mumbia".into()),
            MintError::InvalidAddress("0xnope".into()),
        ] {
            assert!(!err.is_connection_error());
            assert!(!err.is_transaction_error());
        }
    }

    #[test]
    fn test_wrong_chain_message() {
        let err = MintError::WrongChain { expected: 80001, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Wrong network: expected chain 80001, wallet is on chain 1"
        );
    }
}
