//! # Claim Call
//!
//! ABI and arguments of the NFT Drop `claim` method.
//!
//! The drop contract exposes
//! `claim(address,uint256,address,uint256,(bytes32[],uint256,uint256,address),bytes)`.
//! For a public claim phase the allowlist proof is empty and the price check is
//! left open, which is what [`ClaimArgs::public`] produces. Any field can be
//! overridden before encoding when the active claim condition needs it.

use alloy_primitives::{address, Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall};

sol! {
    struct AllowlistProof {
        bytes32[] proof;
        uint256 quantityLimitPerWallet;
        uint256 pricePerToken;
        address currency;
    }

    function claim(
        address _receiver,
        uint256 _quantity,
        address _currency,
        uint256 _pricePerToken,
        AllowlistProof _allowlistProof,
        bytes _data
    ) external payable;
}

/// Sentinel the drop contract uses for the chain's native currency.
pub const NATIVE_TOKEN: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Arguments of a single `claim` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimArgs {
    pub receiver: Address,
    pub quantity: u64,
    pub currency: Address,
    pub price_per_token: U256,
    pub proof: Vec<B256>,
    pub quantity_limit_per_wallet: U256,
    pub proof_price_per_token: U256,
    pub proof_currency: Address,
    pub data: Bytes,
}

impl ClaimArgs {
    /// Free public claim of `quantity` tokens to `receiver`, paid in the native currency.
    pub fn public(receiver: Address, quantity: u64) -> Self {
        Self {
            receiver,
            quantity,
            currency: NATIVE_TOKEN,
            price_per_token: U256::ZERO,
            proof: Vec::new(),
            quantity_limit_per_wallet: U256::ZERO,
            proof_price_per_token: U256::MAX,
            proof_currency: Address::ZERO,
            data: Bytes::new(),
        }
    }

    pub fn with_price(mut self, currency: Address, price_per_token: U256) -> Self {
        self.currency = currency;
        self.price_per_token = price_per_token;
        self
    }

    /// Claim as an allowlisted wallet. The price and currency are the ones
    /// committed in the allowlist leaf; the contract recomputes the leaf from
    /// them, so they must match the entry exactly.
    pub fn with_allowlist(
        mut self,
        proof: Vec<B256>,
        quantity_limit_per_wallet: U256,
        price_per_token: U256,
        currency: Address,
    ) -> Self {
        self.proof = proof;
        self.quantity_limit_per_wallet = quantity_limit_per_wallet;
        self.proof_price_per_token = price_per_token;
        self.proof_currency = currency;
        self
    }

    /// Native value to attach: price times quantity when paying in the native
    /// currency, zero for ERC-20 priced claims.
    pub fn value(&self) -> U256 {
        if self.currency == NATIVE_TOKEN {
            self.price_per_token.saturating_mul(U256::from(self.quantity))
        } else {
            U256::ZERO
        }
    }

    /// ABI-encoded calldata, selector included.
    pub fn encode(&self) -> Vec<u8> {
        self.to_call().abi_encode()
    }

    fn to_call(&self) -> claimCall {
        claimCall {
            _receiver: self.receiver,
            _quantity: U256::from(self.quantity),
            _currency: self.currency,
            _pricePerToken: self.price_per_token,
            _allowlistProof: AllowlistProof {
                proof: self.proof.clone(),
                quantityLimitPerWallet: self.quantity_limit_per_wallet,
                pricePerToken: self.proof_price_per_token,
                currency: self.proof_currency,
            },
            _data: self.data.clone(),
        }
    }
}

/// Four-byte selector of `claim`.
pub fn claim_selector() -> [u8; 4] {
    claimCall::SELECTOR
}
