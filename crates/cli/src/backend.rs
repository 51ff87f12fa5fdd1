//! Invocation backend seam.
//!
//! The initializer talks to the network through this trait so the transport
//! can be swapped per network profile (and faked in tests).

use crate::error::InitError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transport used for contract invocations, wallet lookups, and token
/// transfers.
#[async_trait]
pub trait InvocationBackend: Send + Sync {
    /// Invokes a method on a deployed contract.
    ///
    /// `contract_hash` is the registry value as loaded; Hash160-valued
    /// arguments in `args` are expected to be pre-reversed by the caller.
    async fn invoke(
        &self,
        contract_hash: &str,
        method: &str,
        args: &[String],
    ) -> Result<Value, InitError>;

    /// Resolves the first account of a named wallet, when the backend has
    /// wallet data at all.
    async fn wallet_account(&self, wallet: &str) -> Result<Option<WalletAccount>, InitError>;

    /// Transfers fee tokens between named wallets.
    async fn transfer(
        &self,
        amount: &str,
        asset: &str,
        from: &str,
        to: &str,
    ) -> Result<(), InitError>;
}

/// A single account as reported by `neoxp wallet list --json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Account script hash in display byte order.
    #[serde(rename = "script-hash", default)]
    pub script_hash: String,

    /// Compressed public key (hex, 33 bytes).
    #[serde(rename = "public-key", default)]
    pub public_key: String,
}

/// Wallet entry shape in the `neoxp wallet list --json` output.
///
/// Most wallets map to a list of account objects; the genesis wallet maps
/// to a single account object. The union is resolved here at the boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WalletEntry {
    Many(Vec<WalletAccount>),
    Single(WalletAccount),
}

impl WalletEntry {
    /// Normalizes the entry into its first account, if any.
    pub fn into_first(self) -> Option<WalletAccount> {
        match self {
            WalletEntry::Many(accounts) => accounts.into_iter().next(),
            WalletEntry::Single(account) => Some(account),
        }
    }
}
