//! Service Layer Configuration Module
//!
//! This module provides the network profiles and contract tables consumed by
//! the Service Layer initializer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Size of a contract address (Hash160) in bytes
pub const ADDRESS_SIZE: usize = 20;

/// Default Neo Express endpoint
pub const NEO_EXPRESS_RPC_URL: &str = "http://127.0.0.1:50012";
/// Neo Express network magic (fixed by the checked-in express configuration)
pub const NEO_EXPRESS_MAGIC: u32 = 1_234_512_345;

/// Neo N3 TestNet endpoint
pub const TESTNET_RPC_URL: &str = "https://testnet1.neo.coz.io:443";
/// Neo N3 TestNet network magic
pub const TESTNET_MAGIC: u32 = 877_933_390;

/// Default location of the deployed contract registry, relative to the
/// project root.
pub const DEPLOYED_CONTRACTS_FILE: &str = "deploy/config/deployed_contracts.json";
/// Default location of the Neo Express network configuration.
pub const NEO_EXPRESS_CONFIG_FILE: &str = "deploy/config/default.neo-express";

/// The central gateway contract every service registers with.
pub const GATEWAY_CONTRACT: &str = "ServiceLayerGateway";
/// Push-style data feeds contract, wired into consumers but not routed
/// through the gateway.
pub const DATAFEEDS_CONTRACT: &str = "DataFeedsService";

/// Express wallet holding the TEE operator account.
pub const TEE_WALLET: &str = "tee";
/// Express wallet funded at genesis.
pub const GENESIS_WALLET: &str = "genesis";
/// Express wallet used by integration tests and examples.
pub const USER_WALLET: &str = "user";
/// Express account that signs initialization invocations.
pub const OWNER_ACCOUNT: &str = "owner";

/// GAS amount transferred to the user wallet on local networks.
pub const FUNDING_AMOUNT: &str = "100";
/// Fee token symbol.
pub const GAS_TOKEN: &str = "GAS";

/// A request/response service routed through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayService {
    /// Service-type tag used as the registration key.
    pub service_type: &'static str,
    /// Logical contract name in the deployed registry.
    pub contract: &'static str,
}

/// Request/response services that are routed through the gateway.
///
/// DataFeeds is push-style and is not invoked via `Gateway.requestService`,
/// so it is absent here.
pub const GATEWAY_SERVICES: &[GatewayService] = &[
    GatewayService {
        service_type: "oracle",
        contract: "OracleService",
    },
    GatewayService {
        service_type: "vrf",
        contract: "VRFService",
    },
    GatewayService {
        service_type: "automation",
        contract: "NeoFlowService",
    },
    GatewayService {
        service_type: "confidential",
        contract: "ConfidentialService",
    },
];

/// Example consumer contracts wired to the gateway during initialization.
pub const EXAMPLE_CONTRACTS: &[&str] = &["ExampleConsumer", "VRFLottery", "DeFiPriceConsumer"];

/// Example consumer that additionally needs the DataFeeds contract address.
pub const DATAFEEDS_CONSUMER: &str = "DeFiPriceConsumer";

/// Network profile selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Network {
    /// Local Neo Express network
    #[default]
    NeoExpress,
    /// Neo N3 TestNet
    TestNet,
}

impl Network {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            Network::NeoExpress => NEO_EXPRESS_MAGIC,
            Network::TestNet => TESTNET_MAGIC,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::NeoExpress => write!(f, "neoexpress"),
            Network::TestNet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neoexpress" | "express" => Ok(Network::NeoExpress),
            "testnet" | "test" => Ok(Network::TestNet),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

/// Resolved endpoint configuration for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Profile name used in logs.
    pub name: String,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Network magic used during invocations.
    pub network_magic: u32,
    /// Neo Express network configuration file, present on local profiles.
    pub neo_express_config: Option<PathBuf>,
}

impl NetworkProfile {
    /// Builds the local Neo Express profile around the given express
    /// configuration file.
    pub fn neo_express(express_config: impl AsRef<Path>) -> Self {
        Self {
            name: Network::NeoExpress.to_string(),
            rpc_url: NEO_EXPRESS_RPC_URL.to_string(),
            network_magic: NEO_EXPRESS_MAGIC,
            neo_express_config: Some(express_config.as_ref().to_path_buf()),
        }
    }

    /// Builds the Neo N3 TestNet profile.
    pub fn testnet() -> Self {
        Self {
            name: Network::TestNet.to_string(),
            rpc_url: TESTNET_RPC_URL.to_string(),
            network_magic: TESTNET_MAGIC,
            neo_express_config: None,
        }
    }

    /// Builds the profile for a network, using `express_config` for local
    /// profiles.
    pub fn for_network(network: Network, express_config: impl AsRef<Path>) -> Self {
        match network {
            Network::NeoExpress => Self::neo_express(express_config),
            Network::TestNet => Self::testnet(),
        }
    }

    /// Whether this profile runs against a local Neo Express network.
    pub fn is_local(&self) -> bool {
        self.neo_express_config.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_from_str_accepts_known_names() {
        assert_eq!("neoexpress".parse::<Network>(), Ok(Network::NeoExpress));
        assert_eq!("TESTNET".parse::<Network>(), Ok(Network::TestNet));
    }

    #[test]
    fn network_from_str_fails_closed() {
        assert!("mainnet".parse::<Network>().is_err());
        assert!("".parse::<Network>().is_err());
    }

    #[test]
    fn profiles_carry_expected_endpoints() {
        let local = NetworkProfile::neo_express("deploy/config/default.neo-express");
        assert_eq!(local.rpc_url, NEO_EXPRESS_RPC_URL);
        assert_eq!(local.network_magic, NEO_EXPRESS_MAGIC);
        assert!(local.is_local());

        let remote = NetworkProfile::testnet();
        assert_eq!(remote.rpc_url, TESTNET_RPC_URL);
        assert_eq!(remote.network_magic, TESTNET_MAGIC);
        assert!(!remote.is_local());
    }

    #[test]
    fn gateway_table_excludes_datafeeds() {
        assert_eq!(GATEWAY_SERVICES.len(), 4);
        assert!(GATEWAY_SERVICES
            .iter()
            .all(|service| service.contract != DATAFEEDS_CONTRACT));
    }
}
