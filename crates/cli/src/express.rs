//! Neo Express subprocess transport.
//!
//! Shells out to the `neoxp` CLI for wallet listing, contract invocation,
//! and token transfers on local development networks.

use crate::backend::{InvocationBackend, WalletAccount, WalletEntry};
use crate::error::InitError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, warn};

/// Handle to a resolved `neoxp` installation and express network
/// configuration.
#[derive(Debug, Clone)]
pub struct NeoExpress {
    binary: PathBuf,
    config: PathBuf,
    dotnet_root: Option<PathBuf>,
}

impl NeoExpress {
    /// Wraps a resolved binary and express configuration file.
    pub fn new(binary: impl Into<PathBuf>, config: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            config: config.into(),
            dotnet_root: resolve_dotnet_root(),
        }
    }

    /// Resolves the neoxp binary path (supports dotnet-tool installs).
    ///
    /// Search order: the explicit override (or `neoxp`) on `PATH`, then the
    /// dotnet tool directory `$HOME/.dotnet/tools`.
    pub fn resolve_binary(override_path: Option<&str>) -> Result<PathBuf, InitError> {
        let candidate = override_path.unwrap_or("neoxp");
        if let Some(path) = which(candidate) {
            return Ok(path);
        }

        if let Some(home) = dirs::home_dir() {
            let dotnet_tool = home.join(".dotnet").join("tools").join("neoxp");
            if dotnet_tool.exists() {
                return Ok(dotnet_tool);
            }
        }

        Err(InitError::NeoxpNotFound)
    }

    async fn run(&self, args: Vec<OsString>) -> Result<Output, InitError> {
        debug!(binary = %self.binary.display(), ?args, "running neoxp");
        let mut command = Command::new(&self.binary);
        command.args(&args);
        if let Some(root) = &self.dotnet_root {
            command.env("DOTNET_ROOT", root);
        }
        Ok(command.output().await?)
    }

    fn config_arg(&self) -> OsString {
        self.config.clone().into_os_string()
    }

    fn tool_failed(command: impl Into<String>, output: &Output) -> InitError {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout)
        } else {
            stderr
        };
        InitError::ToolFailed {
            command: command.into(),
            output: detail.trim().to_string(),
        }
    }

    /// Lists express wallets as a name → entry map.
    ///
    /// Unparseable JSON is downgraded to an empty map: the caller treats the
    /// wallet as absent and skips its registration step.
    pub async fn wallet_list(&self) -> Result<HashMap<String, WalletEntry>, InitError> {
        let output = self
            .run(vec![
                "wallet".into(),
                "list".into(),
                "-i".into(),
                self.config_arg(),
                "--json".into(),
            ])
            .await?;
        if !output.status.success() {
            return Err(Self::tool_failed("wallet list", &output));
        }

        match serde_json::from_slice(&output.stdout) {
            Ok(wallets) => Ok(wallets),
            Err(err) => {
                warn!(error = %err, "failed to parse wallet list JSON");
                Ok(HashMap::new())
            }
        }
    }

    /// Invokes a contract method, signing with the given express account.
    ///
    /// A nonzero exit status is a hard failure for this call; the captured
    /// output travels with the error.
    pub async fn contract_run(
        &self,
        account: &str,
        contract_hash: &str,
        method: &str,
        args: &[String],
    ) -> Result<Value, InitError> {
        let mut argv: Vec<OsString> = vec![
            "contract".into(),
            "run".into(),
            "-i".into(),
            self.config_arg(),
            "-a".into(),
            account.into(),
            contract_hash.into(),
            method.into(),
        ];
        argv.extend(args.iter().map(OsString::from));

        let output = self.run(argv).await?;
        if !output.status.success() {
            return Err(Self::tool_failed(
                format!("contract run {} {}", contract_hash, method),
                &output,
            ));
        }

        Ok(json!({
            "stdout": String::from_utf8_lossy(&output.stdout),
            "stderr": String::from_utf8_lossy(&output.stderr),
            "returncode": output.status.code().unwrap_or(0),
        }))
    }

    /// Transfers tokens between named express wallets.
    pub async fn transfer(
        &self,
        amount: &str,
        asset: &str,
        from: &str,
        to: &str,
    ) -> Result<(), InitError> {
        let output = self
            .run(vec![
                "transfer".into(),
                amount.into(),
                asset.into(),
                from.into(),
                to.into(),
                "-i".into(),
                self.config_arg(),
            ])
            .await?;
        if !output.status.success() {
            return Err(Self::tool_failed(
                format!("transfer {} {} {} {}", amount, asset, from, to),
                &output,
            ));
        }
        Ok(())
    }
}

/// Ensures DOTNET_ROOT reaches subprocesses when using dotnet-local
/// installs (`~/.dotnet`).
fn resolve_dotnet_root() -> Option<PathBuf> {
    if let Some(root) = env::var_os("DOTNET_ROOT") {
        return Some(PathBuf::from(root));
    }

    let root = dirs::home_dir()?.join(".dotnet");
    root.join("dotnet").is_file().then_some(root)
}

fn which(candidate: &str) -> Option<PathBuf> {
    let candidate_path = Path::new(candidate);
    if candidate_path.components().count() > 1 {
        return candidate_path
            .is_file()
            .then(|| candidate_path.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(candidate))
        .find(|path| path.is_file())
}

/// Invocation backend for local Neo Express networks.
pub struct ExpressBackend {
    express: NeoExpress,
    signer: String,
}

impl ExpressBackend {
    /// Creates a backend signing invocations with the owner account.
    pub fn new(express: NeoExpress) -> Self {
        Self {
            express,
            signer: service_layer_config::OWNER_ACCOUNT.to_string(),
        }
    }
}

#[async_trait]
impl InvocationBackend for ExpressBackend {
    async fn invoke(
        &self,
        contract_hash: &str,
        method: &str,
        args: &[String],
    ) -> Result<Value, InitError> {
        self.express
            .contract_run(&self.signer, contract_hash, method, args)
            .await
    }

    async fn wallet_account(&self, wallet: &str) -> Result<Option<WalletAccount>, InitError> {
        let mut wallets = self.express.wallet_list().await?;
        Ok(wallets.remove(wallet).and_then(WalletEntry::into_first))
    }

    async fn transfer(
        &self,
        amount: &str,
        asset: &str,
        from: &str,
        to: &str,
    ) -> Result<(), InitError> {
        self.express.transfer(amount, asset, from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_binary_honors_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("neoxp");
        std::fs::write(&binary, b"").unwrap();

        let resolved = NeoExpress::resolve_binary(binary.to_str()).unwrap();
        assert_eq!(resolved, binary);
    }

    #[test]
    fn which_rejects_missing_explicit_path() {
        assert!(which("/nonexistent/path/to/neoxp").is_none());
    }
}
