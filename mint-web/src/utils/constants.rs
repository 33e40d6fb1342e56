//! Application constants

/// Chain the drop is deployed on.
pub const ACTIVE_CHAIN: &str = "mumbai";

/// NFT Drop contract.
pub const CONTRACT_ADDRESS: &str = "0xbaE62330A4CBb09FDE57c2Dc25f7E05A421424ba";

/// Tokens minted per claim.
pub const CLAIM_QUANTITY: u64 = 1;

// UI constants
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 2000;
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
