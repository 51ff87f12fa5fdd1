//! JSON-RPC transport for remote network profiles.
//!
//! Invocations are informational only: `invokefunction` is sent without
//! signing or fee submission and the decoded result is passed through.

use crate::backend::{InvocationBackend, WalletAccount};
use crate::error::InitError;
use async_trait::async_trait;
use serde_json::{json, Value};
use service_layer_config::TEE_WALLET;
use service_layer_rpc_client::RpcClient;
use url::Url;

/// Invocation backend for remote networks reached over JSON-RPC.
pub struct RpcBackend {
    client: RpcClient,
    tee_pubkey: Option<String>,
}

impl RpcBackend {
    /// Creates a backend for the given RPC endpoint.
    ///
    /// Remote profiles have no wallet data; the TEE public key, when known,
    /// comes from the environment.
    pub fn new(rpc_url: &str, tee_pubkey: Option<String>) -> Result<Self, InitError> {
        let url = Url::parse(rpc_url)?;
        Ok(Self {
            client: RpcClient::new(url),
            tee_pubkey,
        })
    }
}

#[async_trait]
impl InvocationBackend for RpcBackend {
    async fn invoke(
        &self,
        contract_hash: &str,
        method: &str,
        args: &[String],
    ) -> Result<Value, InitError> {
        let args = args.iter().map(|arg| json!(arg)).collect();
        Ok(self.client.invoke_function(contract_hash, method, args).await?)
    }

    async fn wallet_account(&self, wallet: &str) -> Result<Option<WalletAccount>, InitError> {
        if wallet != TEE_WALLET {
            return Ok(None);
        }

        // No express wallet here; surface the configured public key so the
        // caller can report exactly which piece is missing.
        Ok(self.tee_pubkey.as_ref().map(|pubkey| WalletAccount {
            script_hash: String::new(),
            public_key: pubkey.clone(),
        }))
    }

    async fn transfer(&self, _: &str, _: &str, _: &str, _: &str) -> Result<(), InitError> {
        Err(InitError::TransferUnsupported)
    }
}
