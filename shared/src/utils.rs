//! # Address Utilities
//!
//! Parsing and display helpers for EVM account addresses.
//!
//! - [`parse_address`] - Parse a `0x`-prefixed hex address (any casing)
//! - [`format_address`] - Shorten an address to its first and last characters
//! - [`truncate_address`] - `format_address` with the defaults used by the page
//!
//! ```rust
//! use shared::utils::{parse_address, truncate_address};
//!
//! let raw = "0xbaE62330A4CBb09FDE57c2Dc25f7E05A421424ba";
//! assert!(parse_address(raw).is_ok());
//! assert_eq!(truncate_address(raw), "0xbaE6...24ba");
//! ```

use alloy_primitives::Address;

use crate::error::MintError;

/// Parse an EVM address. The checksum is not enforced: wallets report
/// lowercase addresses from `eth_accounts`.
pub fn parse_address(raw: &str) -> Result<Address, MintError> {
    let raw = raw.trim();
    if !raw.starts_with("0x") && !raw.starts_with("0X") {
        return Err(MintError::InvalidAddress(raw.to_string()));
    }
    raw.parse::<Address>()
        .map_err(|_| MintError::InvalidAddress(raw.to_string()))
}

/// Show the first `prefix_len` and last `suffix_len` characters of an address.
///
/// Addresses too short to shorten are returned unchanged.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xbaE62330A4CBb09FDE57c2Dc25f7E05A421424ba";
/// assert_eq!(format_address(addr, 6, 4), "0xbaE6...24ba");
/// assert_eq!(format_address("0x12", 6, 4), "0x12");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// `0x` plus four hex digits, then the last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Parse a JSON-RPC quantity. Accepts hex (`"0x1b4"`) and, for wallets that
/// report chain ids in decimal, plain digits.
pub fn parse_quantity(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex_digits) => u64::from_str_radix(hex_digits, 16).ok(),
        None => raw.parse::<u64>().ok(),
    }
}
