// deployer/src/main.rs

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use eyre::{Result, WrapErr};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use landshare_swap_deploy::{
    load_config, run_deployment, swap_deployment_request, ArtifactRegistry, EthersChainClient,
};

// --- Main Execution ---
// On success the resulting address is printed to stdout and the process
// exits 0; any error is reported to stderr and the process exits 1.
#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = load_config()?;

    // Setup Provider & Client
    let provider = Provider::<Http>::try_from(config.http_rpc_url.clone())
        .wrap_err("HTTP_RPC_URL is not a valid endpoint URL")?;
    let chain_id = provider
        .get_chainid()
        .await
        .wrap_err("Failed to fetch chain id from RPC endpoint")?;
    info!(chain_id = %chain_id, "RPC OK");
    let wallet = config
        .deployer_private_key
        .parse::<LocalWallet>()
        .wrap_err("DEPLOYER_PRIVATE_KEY is not a valid private key")?
        .with_chain_id(chain_id.as_u64());
    let client = Arc::new(SignerMiddleware::new(provider, wallet));

    let registry = ArtifactRegistry::new(&config.artifacts_dir);
    let chain = EthersChainClient::new(client, registry);

    // One deployment attempt, then exit.
    let request = swap_deployment_request();
    let result = run_deployment(&chain, &request).await?;

    println!("LandshareSwap deployed to: {:?}", result.contract_address);
    Ok(())
}
// END OF FILE: deployer/src/main.rs
