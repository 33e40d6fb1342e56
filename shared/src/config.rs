//! # Mint Configuration
//!
//! The handful of values the page needs: which chain, which drop contract, how
//! many tokens per claim. They are compiled in; [`MintConfig::new`] validates
//! them once at startup so a typo fails loudly instead of on the first click.

use alloy_primitives::Address;

use crate::chain::Chain;
use crate::contract::Contract;
use crate::error::{MintError, Result};
use crate::utils::parse_address;

pub const DEFAULT_CLAIM_QUANTITY: u64 = 1;
pub const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintConfig {
    pub chain: Chain,
    pub contract: Address,
    pub quantity: u64,
    pub receipt_poll_interval_ms: u32,
}

impl MintConfig {
    /// Build from a chain name and a contract address string.
    pub fn new(chain_name: &str, contract_address: &str) -> Result<Self> {
        let chain = chain_name.parse::<Chain>()?;
        let contract = parse_address(contract_address)?;
        Ok(Self {
            chain,
            contract,
            quantity: DEFAULT_CLAIM_QUANTITY,
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
        })
    }

    pub fn with_quantity(mut self, quantity: u64) -> Result<Self> {
        if quantity == 0 {
            return Err(MintError::InvalidConfig("claim quantity must be at least 1".to_string()));
        }
        self.quantity = quantity;
        Ok(self)
    }

    pub fn with_receipt_poll_interval_ms(mut self, interval_ms: u32) -> Self {
        self.receipt_poll_interval_ms = interval_ms;
        self
    }

    pub fn contract(&self) -> Contract {
        Contract::at(self.chain, self.contract)
    }
}
