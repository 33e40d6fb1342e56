//! Transaction DTOs

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::error::MintError;
use crate::utils::parse_quantity;

/// Parameter object of `eth_sendTransaction`. Gas and fees are left to the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

/// Receipt as returned by `eth_getTransactionReceipt`, reduced to what the page shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub tx_hash: String,
    pub block_number: u64,
    pub success: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    transaction_hash: String,
    block_number: Option<String>,
    status: Option<String>,
}

impl TransactionReceipt {
    /// Interpret a raw receipt. `Ok(None)` means the transaction is not mined yet
    /// (the node answered `null` or the receipt has no block number).
    pub fn from_rpc(raw: serde_json::Value) -> Result<Option<Self>, MintError> {
        if raw.is_null() {
            return Ok(None);
        }

        let receipt: RpcReceipt = serde_json::from_value(raw)
            .map_err(|e| MintError::Rpc(format!("malformed receipt: {}", e)))?;

        let block_number = match receipt.block_number {
            Some(number) => parse_quantity(&number)
                .ok_or_else(|| MintError::Rpc(format!("invalid block number: {}", number)))?,
            None => return Ok(None),
        };

        // Pre-Byzantium receipts carry no status; treat them as successful.
        let success = receipt.status.as_deref().map_or(true, |s| s == "0x1");

        Ok(Some(Self {
            tx_hash: receipt.transaction_hash,
            block_number,
            success,
        }))
    }
}
