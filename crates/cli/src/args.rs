use clap::{Parser, ValueEnum};
use service_layer_config::{Network, DEPLOYED_CONTRACTS_FILE, NEO_EXPRESS_CONFIG_FILE};
use std::path::PathBuf;

/// Command-line arguments for the Service Layer initializer.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "service-layer-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Initialize deployed Service Layer contracts",
    long_about = "Initializes all deployed Service Layer contracts: registers the TEE \
                  account and services with the gateway, configures service and example \
                  contracts with the gateway address, and funds test accounts on local \
                  networks."
)]
pub struct CliArgs {
    /// Network profile to run against
    #[arg(value_enum, default_value = "neoexpress")]
    pub network: NetworkArg,

    /// Path to the deployed contract registry emitted by the deploy scripts
    #[arg(long, value_name = "FILE", default_value = DEPLOYED_CONTRACTS_FILE)]
    pub deployed: PathBuf,

    /// Path to the Neo Express network configuration
    #[arg(long, value_name = "FILE", default_value = NEO_EXPRESS_CONFIG_FILE)]
    pub express_config: PathBuf,

    /// Overrides the neoxp binary used for local invocations
    #[arg(long, env = "NEOXP", value_name = "PATH")]
    pub neoxp: Option<String>,

    /// Compressed TEE public key, used on remote profiles only
    #[arg(long, env = "TEE_PUBKEY", value_name = "HEX")]
    pub tee_pubkey: Option<String>,
}

/// Network profile selector; unknown names fail closed at parse time.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkArg {
    /// Local Neo Express network
    Neoexpress,
    /// Neo N3 TestNet
    Testnet,
}

impl From<NetworkArg> for Network {
    fn from(network: NetworkArg) -> Self {
        match network {
            NetworkArg::Neoexpress => Network::NeoExpress,
            NetworkArg::Testnet => Network::TestNet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_neo_express() {
        let args = CliArgs::parse_from(["service-layer-cli"]);
        assert_eq!(args.network, NetworkArg::Neoexpress);
        assert_eq!(args.deployed, PathBuf::from(DEPLOYED_CONTRACTS_FILE));
        assert_eq!(args.express_config, PathBuf::from(NEO_EXPRESS_CONFIG_FILE));
        assert!(args.neoxp.is_none());
    }

    #[test]
    fn accepts_testnet_profile() {
        let args = CliArgs::parse_from(["service-layer-cli", "testnet"]);
        assert_eq!(args.network, NetworkArg::Testnet);
        assert_eq!(Network::from(args.network), Network::TestNet);
    }

    #[test]
    fn unknown_profile_fails_closed() {
        assert!(CliArgs::try_parse_from(["service-layer-cli", "mainnet"]).is_err());
    }

    #[test]
    fn flag_overrides_are_parsed() {
        let args = CliArgs::parse_from([
            "service-layer-cli",
            "neoexpress",
            "--neoxp",
            "/opt/neoxp",
            "--deployed",
            "custom/deployed.json",
        ]);
        assert_eq!(args.neoxp.as_deref(), Some("/opt/neoxp"));
        assert_eq!(args.deployed, PathBuf::from("custom/deployed.json"));
    }
}
