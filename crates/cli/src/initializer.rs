//! Post-deployment initialization of the Service Layer contracts.
//!
//! Four sequential phases: gateway registrations, service wiring, example
//! wiring, and local test funding. Per-step invocation failures are logged
//! and skipped; the run only aborts on missing prerequisites or malformed
//! identifiers.

use crate::backend::{InvocationBackend, WalletAccount};
use crate::error::InitError;
use serde_json::Value;
use service_layer_config::{
    GatewayService, NetworkProfile, DATAFEEDS_CONSUMER, DATAFEEDS_CONTRACT, EXAMPLE_CONTRACTS,
    FUNDING_AMOUNT, GAS_TOKEN, GATEWAY_CONTRACT, GATEWAY_SERVICES, GENESIS_WALLET, TEE_WALLET,
    USER_WALLET,
};
use service_layer_core::{reverse_hash160, DeployedContracts};
use tracing::{error, info, warn};

/// Initializes deployed Service Layer contracts.
pub struct Initializer {
    profile: NetworkProfile,
    deployed: DeployedContracts,
    backend: Box<dyn InvocationBackend>,
    services: Vec<GatewayService>,
    examples: Vec<String>,
}

impl Initializer {
    /// Creates an initializer with the fixed service and example tables.
    pub fn new(
        profile: NetworkProfile,
        deployed: DeployedContracts,
        backend: Box<dyn InvocationBackend>,
    ) -> Self {
        Self {
            profile,
            deployed,
            backend,
            services: GATEWAY_SERVICES.to_vec(),
            examples: EXAMPLE_CONTRACTS.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Replaces the gateway service table.
    pub fn with_services(mut self, services: Vec<GatewayService>) -> Self {
        self.services = services;
        self
    }

    /// Replaces the example contract table.
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    /// Invokes a contract method by logical name.
    ///
    /// An unknown contract name and a failed invocation are both reported
    /// and skipped, never fatal.
    pub async fn invoke(&self, contract: &str, method: &str, args: Vec<String>) -> Option<Value> {
        let Some(contract_hash) = self.deployed.get(contract) else {
            warn!(contract, "contract not found in deployed contracts");
            return None;
        };

        match self.backend.invoke(contract_hash, method, &args).await {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(contract, method, error = %err, "invocation failed");
                None
            }
        }
    }

    /// Phase 1: registers the TEE account and the gateway services with the
    /// ServiceLayerGateway contract. Registrations are idempotent
    /// re-registrations.
    pub async fn initialize_gateway(&self) -> Result<(), InitError> {
        info!("=== Initializing ServiceLayerGateway ===");

        if !self.deployed.contains(GATEWAY_CONTRACT) {
            error!("ServiceLayerGateway not deployed");
            return Ok(());
        }

        info!("registering TEE account");
        let tee_account = match self.backend.wallet_account(TEE_WALLET).await {
            Ok(account) => account.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "failed to resolve TEE wallet");
                WalletAccount::default()
            }
        };

        if tee_account.script_hash.is_empty() || tee_account.public_key.is_empty() {
            warn!("missing TEE wallet info (script-hash/public-key); skipping TEE registration");
        } else {
            let mut pubkey = tee_account.public_key.clone();
            if !pubkey.starts_with("0x") {
                pubkey = format!("0x{}", pubkey);
            }
            // Hash160 args passed to the invocation transport require
            // byte-reversal to match the VM's internal ordering.
            let tee_hash = reverse_hash160(&tee_account.script_hash)?;
            self.invoke(GATEWAY_CONTRACT, "registerTEEAccount", vec![tee_hash, pubkey])
                .await;
        }

        info!("registering services");
        for service in &self.services {
            if let Some(contract_hash) = self.deployed.get(service.contract) {
                let service_arg = reverse_hash160(contract_hash)?;
                self.invoke(
                    GATEWAY_CONTRACT,
                    "registerService",
                    vec![service.service_type.to_string(), service_arg],
                )
                .await;
                info!(
                    service = service.service_type,
                    contract = contract_hash,
                    "service registered"
                );
            }
        }

        Ok(())
    }

    /// Phase 2: points each service contract at the gateway.
    pub async fn initialize_services(&self) -> Result<(), InitError> {
        info!("=== Initializing Service Contracts ===");

        let Some(gateway_hash) = self.deployed.get(GATEWAY_CONTRACT) else {
            error!("ServiceLayerGateway not deployed");
            return Ok(());
        };
        let gateway_arg = reverse_hash160(gateway_hash)?;

        for service in &self.services {
            if self.deployed.contains(service.contract) {
                info!(contract = service.contract, "configuring");
                self.invoke(service.contract, "setGateway", vec![gateway_arg.clone()])
                    .await;
            }
        }

        Ok(())
    }

    /// Phase 3: points each example consumer contract at the gateway; the
    /// DeFi price consumer additionally gets the DataFeeds address.
    pub async fn initialize_examples(&self) -> Result<(), InitError> {
        info!("=== Initializing Example Contracts ===");

        let gateway_arg = match self.deployed.get(GATEWAY_CONTRACT) {
            Some(hash) => reverse_hash160(hash)?,
            None => String::new(),
        };
        let datafeeds_arg = match self.deployed.get(DATAFEEDS_CONTRACT) {
            Some(hash) => reverse_hash160(hash)?,
            None => String::new(),
        };

        for example in &self.examples {
            if self.deployed.contains(example) {
                info!(contract = %example, "configuring");
                self.invoke(example, "setGateway", vec![gateway_arg.clone()])
                    .await;

                if example == DATAFEEDS_CONSUMER && !datafeeds_arg.is_empty() {
                    self.invoke(example, "setDataFeedsContract", vec![datafeeds_arg.clone()])
                        .await;
                }
            }
        }

        Ok(())
    }

    /// Phase 4: funds the user wallet with GAS for service fees. Local
    /// profiles only.
    pub async fn fund_accounts(&self) {
        info!("=== Funding Test Accounts ===");

        if !self.profile.is_local() {
            info!("skipping (not Neo Express)");
            return;
        }

        match self
            .backend
            .transfer(FUNDING_AMOUNT, GAS_TOKEN, GENESIS_WALLET, USER_WALLET)
            .await
        {
            Ok(()) => info!("funded user account with {} GAS", FUNDING_AMOUNT),
            Err(err) => warn!(error = %err, "failed to fund user account"),
        }
    }

    /// Runs the full initialization sequence and logs the registry summary.
    pub async fn run(&self) -> Result<(), InitError> {
        info!(
            network = %self.profile.name,
            rpc_url = %self.profile.rpc_url,
            contracts = self.deployed.len(),
            "starting Service Layer initialization"
        );

        self.initialize_gateway().await?;
        self.initialize_services().await?;
        self.initialize_examples().await?;
        self.fund_accounts().await;

        info!("initialization complete");
        for (name, contract_hash) in self.deployed.iter() {
            info!(contract = name, address = contract_hash, "deployed");
        }

        Ok(())
    }
}
