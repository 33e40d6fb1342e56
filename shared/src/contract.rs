//! # Contract Binding
//!
//! A handle on a deployed drop contract and the write operations it exposes.
//!
//! ```rust
//! use shared::chain::Chain;
//! use shared::contract::Contract;
//! use shared::utils::parse_address;
//!
//! let address = parse_address("0xbaE62330A4CBb09FDE57c2Dc25f7E05A421424ba").unwrap();
//! let drop = Contract::at(Chain::Mumbai, address);
//! assert!(drop.write("claim").is_ok());
//! assert!(drop.write("burn").is_err());
//! ```

use std::fmt;

use alloy_primitives::{Address, Bytes};

use crate::chain::Chain;
use crate::claim::ClaimArgs;
use crate::dto::{TransactionReceipt, TransactionRequest};
use crate::error::{MintError, Result};
use crate::service::TransactionSender;

/// Write methods present in the bound ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMethod {
    Claim,
}

impl WriteMethod {
    pub fn name(&self) -> &'static str {
        match self {
            WriteMethod::Claim => "claim",
        }
    }
}

impl fmt::Display for WriteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deployed contract on a specific chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contract {
    chain: Chain,
    address: Address,
}

impl Contract {
    pub fn at(chain: Chain, address: Address) -> Self {
        Self { chain, address }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Resolve a write operation by method name.
    pub fn write(&self, method: &str) -> Result<ContractWrite> {
        let method = match method {
            "claim" => WriteMethod::Claim,
            other => return Err(MintError::UnknownMethod(other.to_string())),
        };
        Ok(ContractWrite {
            contract: *self,
            method,
        })
    }
}

/// A callable write operation bound to one contract method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractWrite {
    contract: Contract,
    method: WriteMethod,
}

impl ContractWrite {
    /// Transaction that performs this write from `from`.
    pub fn request(&self, from: Address, args: &ClaimArgs) -> TransactionRequest {
        let (data, value) = match self.method {
            WriteMethod::Claim => (args.encode(), args.value()),
        };
        TransactionRequest {
            from,
            to: self.contract.address,
            data: Bytes::from(data),
            value,
        }
    }

    /// Sign, submit and wait for the transaction to be mined.
    ///
    /// Resolves with the receipt; a mined-but-failed transaction is returned as
    /// [`MintError::Reverted`].
    pub async fn call<S>(&self, sender: &S, from: Address, args: &ClaimArgs) -> Result<TransactionReceipt>
    where
        S: TransactionSender + ?Sized,
    {
        let request = self.request(from, args);
        log::debug!(
            "submitting {} to {} on {}",
            self.method,
            self.contract.address,
            self.contract.chain
        );

        let tx_hash = sender.send_transaction(&request).await?;
        log::info!("{} submitted: {}", self.method, tx_hash);

        let receipt = sender.wait_for_receipt(&tx_hash).await?;
        if !receipt.success {
            return Err(MintError::Reverted(receipt.tx_hash));
        }
        Ok(receipt)
    }
}
