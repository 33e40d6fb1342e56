//! Browser-side services

pub mod wallet;

pub use wallet::{InjectedWallet, WalletProvider};
