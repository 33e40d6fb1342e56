//! Injected EVM Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for EIP-1193 providers (`window.ethereum`). Supports
//! MetaMask, Coinbase Wallet, Brave Wallet, Rabby and any other extension that
//! injects a standard provider. [`InjectedWallet`] implements the `shared`
//! collaborator traits on top of these bindings.

use std::rc::Rc;

use alloy_primitives::Address;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use shared::chain::parse_chain_id;
use shared::utils::parse_address;
use shared::{
    Chain, MintError, Result, TransactionReceipt, TransactionRequest, TransactionSender,
    WalletConnector,
};
use wasm_bindgen::prelude::*;

/// EIP-1193 "User Rejected Request".
const USER_REJECTED: i64 = 4001;

/// Supported wallet provider types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    MetaMask,
    Coinbase,
    Brave,
    Rabby,
    Injected,
}

impl WalletProvider {
    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "MetaMask",
            WalletProvider::Coinbase => "Coinbase Wallet",
            WalletProvider::Brave => "Brave Wallet",
            WalletProvider::Rabby => "Rabby",
            WalletProvider::Injected => "Browser Wallet",
        }
    }

    /// Key understood by the JS side.
    pub fn key(&self) -> &'static str {
        match self {
            WalletProvider::MetaMask => "metamask",
            WalletProvider::Coinbase => "coinbase",
            WalletProvider::Brave => "brave",
            WalletProvider::Rabby => "rabby",
            WalletProvider::Injected => "injected",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "metamask" => Some(WalletProvider::MetaMask),
            "coinbase" => Some(WalletProvider::Coinbase),
            "brave" => Some(WalletProvider::Brave),
            "rabby" => Some(WalletProvider::Rabby),
            "injected" => Some(WalletProvider::Injected),
            _ => None,
        }
    }
}

// ============================================================================
// EIP-1193 PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function allProviders() {
    const eth = window.ethereum;
    if (!eth) {
        return [];
    }
    // Coinbase Wallet and some others expose every injected provider here
    if (Array.isArray(eth.providers) && eth.providers.length > 0) {
        return eth.providers;
    }
    return [eth];
}

function providerKey(p) {
    if (p.isRabby) return 'rabby';
    if (p.isBraveWallet) return 'brave';
    if (p.isCoinbaseWallet) return 'coinbase';
    if (p.isMetaMask) return 'metamask';
    return 'injected';
}

function getProvider(preferred) {
    const providers = allProviders();
    if (providers.length === 0) {
        return null;
    }
    const match = providers.find(p => providerKey(p) === preferred);
    return match || providers[0];
}

function requireProvider(preferred) {
    const p = getProvider(preferred);
    if (!p) {
        const err = new Error('No injected wallet found');
        err.code = -1;
        throw err;
    }
    return p;
}

export function detectWallets() {
    return allProviders().map(p => {
        const key = providerKey(p);
        return { provider: key, installed: true };
    });
}

export function isWalletInstalled(preferred) {
    return getProvider(preferred) !== null;
}

export async function requestAccounts(preferred) {
    return await requireProvider(preferred).request({ method: 'eth_requestAccounts' });
}

export async function getAccounts(preferred) {
    return await requireProvider(preferred).request({ method: 'eth_accounts' });
}

export async function getChainId(preferred) {
    return await requireProvider(preferred).request({ method: 'eth_chainId' });
}

export async function switchChain(preferred, chainId, addParams) {
    const p = requireProvider(preferred);
    try {
        await p.request({ method: 'wallet_switchEthereumChain', params: [{ chainId }] });
    } catch (error) {
        // 4902: chain not added to the wallet yet
        if (error && error.code === 4902) {
            await p.request({ method: 'wallet_addEthereumChain', params: [addParams] });
        } else {
            throw error;
        }
    }
}

export async function sendTransaction(preferred, tx) {
    return await requireProvider(preferred).request({ method: 'eth_sendTransaction', params: [tx] });
}

export async function getTransactionReceipt(preferred, txHash) {
    return await requireProvider(preferred).request({ method: 'eth_getTransactionReceipt', params: [txHash] });
}

export function onAccountsChanged(preferred, callback) {
    const p = getProvider(preferred);
    if (p && typeof p.on === 'function') {
        p.on('accountsChanged', callback);
        return true;
    }
    return false;
}
")]
extern "C" {
    /// Detect every injected provider
    fn detectWallets() -> JsValue;

    fn isWalletInstalled(preferred: &str) -> bool;

    /// `eth_requestAccounts` - opens the extension prompt
    #[wasm_bindgen(catch)]
    async fn requestAccounts(preferred: &str) -> std::result::Result<JsValue, JsValue>;

    /// `eth_accounts` - silent
    #[wasm_bindgen(catch)]
    async fn getAccounts(preferred: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getChainId(preferred: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn switchChain(
        preferred: &str,
        chain_id: &str,
        add_params: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendTransaction(preferred: &str, tx: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTransactionReceipt(preferred: &str, tx_hash: &str) -> std::result::Result<JsValue, JsValue>;

    fn onAccountsChanged(preferred: &str, callback: &Closure<dyn FnMut(JsValue)>) -> bool;
}

// ============================================================================
// ERROR MAPPING
// ============================================================================

/// Which user action a provider error interrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Connect,
    Write,
    Read,
}

/// Map an EIP-1193 error (`code`, `message`) to a [`MintError`].
pub fn classify_provider_error(code: Option<i64>, message: String, phase: Phase) -> MintError {
    match (phase, code) {
        (_, Some(-1)) => MintError::WalletNotInstalled,
        (Phase::Connect, _) => MintError::ConnectionRejected(message),
        (Phase::Write, Some(USER_REJECTED)) => {
            MintError::Transaction(format!("rejected in wallet: {}", message))
        }
        (Phase::Write, _) => MintError::Transaction(message),
        (Phase::Read, _) => MintError::Rpc(message),
    }
}

fn provider_error(err: JsValue, phase: Phase) -> MintError {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i64);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    classify_provider_error(code, message, phase)
}

/// `eth_chainId` is a hex string per EIP-1193, but some providers answer with a
/// plain number.
fn decode_chain_id(text: Option<String>, number: Option<f64>) -> Result<u64> {
    match (text, number) {
        (Some(raw), _) => parse_chain_id(&raw),
        (None, Some(id)) if id.fract() == 0.0 && (1.0..=u64::MAX as f64).contains(&id) => Ok(id as u64),
        (None, Some(id)) => Err(MintError::Rpc(format!("invalid chain id: {}", id))),
        (None, None) => Err(MintError::Rpc(
            "eth_chainId returned neither a string nor a number".to_string(),
        )),
    }
}

fn first_account(accounts: JsValue) -> Result<Option<Address>> {
    let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts)
        .map_err(|e| MintError::Rpc(format!("unexpected accounts response: {}", e)))?;
    accounts.first().map(|raw| parse_address(raw)).transpose()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MintError::Rpc(format!("failed to encode request: {}", e)))
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Detected wallet information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub provider: String,
    pub installed: bool,
}

/// Get list of injected wallets
pub fn get_available_wallets() -> Vec<WalletProvider> {
    let detected: Vec<DetectedWallet> =
        serde_wasm_bindgen::from_value(detectWallets()).unwrap_or_default();
    detected
        .iter()
        .filter(|w| w.installed)
        .filter_map(|w| WalletProvider::from_key(&w.provider))
        .collect()
}

/// EIP-1193 provider behind the mint controller.
#[derive(Clone, Debug)]
pub struct InjectedWallet {
    preferred: WalletProvider,
    poll_interval_ms: u32,
}

impl InjectedWallet {
    /// `preferred` picks among several injected providers; any provider is used
    /// when the preferred one is absent.
    pub fn new(preferred: WalletProvider, poll_interval_ms: u32) -> Self {
        Self {
            preferred,
            poll_interval_ms,
        }
    }

    pub fn is_installed(&self) -> bool {
        isWalletInstalled(self.preferred.key())
    }

    /// Forward `accountsChanged` events for the lifetime of the page.
    pub fn watch_accounts(&self, on_change: impl Fn(Option<Address>) + 'static) {
        let on_change = Rc::new(on_change);
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            match first_account(accounts) {
                Ok(address) => on_change(address),
                Err(err) => log::warn!("ignoring accountsChanged payload: {}", err),
            }
        });
        if onAccountsChanged(self.preferred.key(), &callback) {
            callback.forget();
        } else {
            log::debug!("wallet does not emit accountsChanged");
        }
    }
}

#[async_trait(?Send)]
impl WalletConnector for InjectedWallet {
    async fn request_connection(&self) -> Result<Address> {
        if !self.is_installed() {
            return Err(MintError::WalletNotInstalled);
        }
        let accounts = requestAccounts(self.preferred.key())
            .await
            .map_err(|e| provider_error(e, Phase::Connect))?;
        first_account(accounts)?.ok_or_else(|| {
            MintError::ConnectionRejected("wallet returned no accounts".to_string())
        })
    }

    async fn current_address(&self) -> Result<Option<Address>> {
        if !self.is_installed() {
            return Ok(None);
        }
        let accounts = getAccounts(self.preferred.key())
            .await
            .map_err(|e| provider_error(e, Phase::Read))?;
        first_account(accounts)
    }

    async fn chain_id(&self) -> Result<u64> {
        let raw = getChainId(self.preferred.key())
            .await
            .map_err(|e| provider_error(e, Phase::Read))?;
        decode_chain_id(raw.as_string(), raw.as_f64())
    }

    async fn switch_chain(&self, chain: Chain) -> Result<()> {
        let add_params = to_js(&chain.add_chain_params())?;
        switchChain(self.preferred.key(), &chain.hex_id(), add_params)
            .await
            .map_err(|e| provider_error(e, Phase::Write))?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl TransactionSender for InjectedWallet {
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<String> {
        let tx = to_js(request)?;
        let hash = sendTransaction(self.preferred.key(), tx)
            .await
            .map_err(|e| provider_error(e, Phase::Write))?;
        hash.as_string()
            .ok_or_else(|| MintError::Rpc("eth_sendTransaction did not return a hash".to_string()))
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt> {
        loop {
            let raw = getTransactionReceipt(self.preferred.key(), tx_hash)
                .await
                .map_err(|e| provider_error(e, Phase::Read))?;
            let raw: serde_json::Value = serde_wasm_bindgen::from_value(raw)
                .map_err(|e| MintError::Rpc(format!("unexpected receipt: {}", e)))?;
            if let Some(receipt) = TransactionReceipt::from_rpc(raw)? {
                return Ok(receipt);
            }
            TimeoutFuture::new(self.poll_interval_ms).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_keys_roundtrip() {
        for provider in [
            WalletProvider::MetaMask,
            WalletProvider::Coinbase,
            WalletProvider::Brave,
            WalletProvider::Rabby,
            WalletProvider::Injected,
        ] {
            assert_eq!(WalletProvider::from_key(provider.key()), Some(provider));
        }
        assert_eq!(WalletProvider::from_key("phantom"), None);
    }

    #[test]
    fn test_classify_connect_errors() {
        let err = classify_provider_error(Some(4001), "User rejected the request.".into(), Phase::Connect);
        assert!(err.is_connection_error());
        assert_eq!(
            classify_provider_error(Some(-1), "No injected wallet found".into(), Phase::Connect),
            MintError::WalletNotInstalled
        );
    }

    #[test]
    fn test_classify_write_errors() {
        let rejected = classify_provider_error(Some(4001), "User denied transaction signature.".into(), Phase::Write);
        assert_eq!(
            rejected,
            MintError::Transaction("rejected in wallet: User denied transaction signature.".to_string())
        );
        assert!(rejected.is_transaction_error());

        let reverted = classify_provider_error(Some(-32603), "execution reverted".into(), Phase::Write);
        assert_eq!(reverted, MintError::Transaction("execution reverted".to_string()));
    }

    #[test]
    fn test_chain_id_from_hex_or_number() {
        assert_eq!(decode_chain_id(Some("0x13881".into()), None), Ok(80001));
        assert_eq!(decode_chain_id(None, Some(80001.0)), Ok(80001));
        assert!(matches!(decode_chain_id(None, Some(1.5)), Err(MintError::Rpc(_))));
        assert!(matches!(decode_chain_id(None, None), Err(MintError::Rpc(_))));
    }

    #[test]
    fn test_classify_read_errors() {
        assert_eq!(
            classify_provider_error(None, "header not found".into(), Phase::Read),
            MintError::Rpc("header not found".to_string())
        );
    }
}
