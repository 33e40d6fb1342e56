//! # Data Transfer Objects (DTOs)
//!
//! JSON objects exchanged with the injected wallet over EIP-1193 `request`.
//!
//! - [`transaction`] - `eth_sendTransaction` request and `eth_getTransactionReceipt` result
//!
//! Field names follow the Ethereum JSON-RPC casing (camelCase) and every
//! quantity is a `0x`-prefixed hex string.

pub mod transaction;

pub use transaction::{TransactionReceipt, TransactionRequest};
