use anyhow::{Context, Result};
use clap::Parser;
use service_layer_cli::args::CliArgs;
use service_layer_cli::backend::InvocationBackend;
use service_layer_cli::express::{ExpressBackend, NeoExpress};
use service_layer_cli::initializer::Initializer;
use service_layer_cli::rpc::RpcBackend;
use service_layer_config::{Network, NetworkProfile};
use service_layer_core::DeployedContracts;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = CliArgs::parse();
    let network = Network::from(cli.network);
    let profile = NetworkProfile::for_network(network, &cli.express_config);

    let deployed = DeployedContracts::load(&cli.deployed).with_context(|| {
        format!(
            "cannot load deployed contracts from {}; run the deploy scripts first",
            cli.deployed.display()
        )
    })?;

    let backend: Box<dyn InvocationBackend> = match network {
        Network::NeoExpress => {
            let binary = NeoExpress::resolve_binary(cli.neoxp.as_deref())?;
            Box::new(ExpressBackend::new(NeoExpress::new(
                binary,
                &cli.express_config,
            )))
        }
        Network::TestNet => Box::new(RpcBackend::new(&profile.rpc_url, cli.tee_pubkey.clone())?),
    };

    Initializer::new(profile, deployed, backend).run().await?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}
