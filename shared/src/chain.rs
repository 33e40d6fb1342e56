//! # Chain Registry
//!
//! The EVM networks the front-end knows how to target, resolvable by the short
//! names used in configuration (`"mumbai"`, `"polygon"`, ...).
//!
//! ```rust
//! use shared::chain::Chain;
//!
//! let chain: Chain = "mumbai".parse().unwrap();
//! assert_eq!(chain.id(), 80001);
//! assert_eq!(chain.hex_id(), "0x13881");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MintError;
use crate::utils::parse_quantity;

/// Supported target chains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Goerli,
    Sepolia,
    Polygon,
    Mumbai,
}

impl Chain {
    pub const ALL: [Chain; 5] = [
        Chain::Ethereum,
        Chain::Goerli,
        Chain::Sepolia,
        Chain::Polygon,
        Chain::Mumbai,
    ];

    /// EIP-155 chain id.
    pub fn id(&self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Goerli => 5,
            Chain::Sepolia => 11_155_111,
            Chain::Polygon => 137,
            Chain::Mumbai => 80_001,
        }
    }

    /// Chain id as the `0x`-prefixed quantity wallets expect.
    pub fn hex_id(&self) -> String {
        format!("{:#x}", self.id())
    }

    /// Short configuration name.
    pub fn slug(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Goerli => "goerli",
            Chain::Sepolia => "sepolia",
            Chain::Polygon => "polygon",
            Chain::Mumbai => "mumbai",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum Mainnet",
            Chain::Goerli => "Goerli",
            Chain::Sepolia => "Sepolia",
            Chain::Polygon => "Polygon Mainnet",
            Chain::Mumbai => "Mumbai",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Chain::Goerli | Chain::Sepolia | Chain::Mumbai)
    }

    pub fn native_currency(&self) -> NativeCurrency {
        match self {
            Chain::Polygon | Chain::Mumbai => NativeCurrency {
                name: "MATIC".to_string(),
                symbol: "MATIC".to_string(),
                decimals: 18,
            },
            Chain::Ethereum | Chain::Goerli | Chain::Sepolia => NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }

    pub fn rpc_url(&self) -> &'static str {
        match self {
            Chain::Ethereum => "https://cloudflare-eth.com",
            Chain::Goerli => "https://rpc.ankr.com/eth_goerli",
            Chain::Sepolia => "https://rpc.sepolia.org",
            Chain::Polygon => "https://polygon-rpc.com",
            Chain::Mumbai => "https://rpc-mumbai.maticvigil.com",
        }
    }

    pub fn explorer_url(&self) -> &'static str {
        match self {
            Chain::Ethereum => "https://etherscan.io",
            Chain::Goerli => "https://goerli.etherscan.io",
            Chain::Sepolia => "https://sepolia.etherscan.io",
            Chain::Polygon => "https://polygonscan.com",
            Chain::Mumbai => "https://mumbai.polygonscan.com",
        }
    }

    /// Explorer page for a transaction hash.
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url(), tx_hash)
    }

    /// Look up a chain by its numeric id.
    pub fn from_id(id: u64) -> Option<Chain> {
        Chain::ALL.into_iter().find(|chain| chain.id() == id)
    }

    /// Parameters for `wallet_addEthereumChain`, used when the wallet does not
    /// know the chain yet.
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.hex_id(),
            chain_name: self.name().to_string(),
            native_currency: self.native_currency(),
            rpc_urls: vec![self.rpc_url().to_string()],
            block_explorer_urls: vec![self.explorer_url().to_string()],
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Chain {
    type Err = MintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Chain::ALL
            .into_iter()
            .find(|chain| chain.slug() == wanted)
            .ok_or_else(|| MintError::UnknownChain(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// EIP-3085 `wallet_addEthereumChain` parameter object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

/// Parse a chain id reported by a wallet. Accepts hex (`"0x13881"`) and decimal.
pub fn parse_chain_id(raw: &str) -> Result<u64, MintError> {
    parse_quantity(raw).ok_or_else(|| MintError::Rpc(format!("invalid chain id: {}", raw.trim())))
}
