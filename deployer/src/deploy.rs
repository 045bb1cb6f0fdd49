// deployer/src/deploy.rs
// The one-shot deployment procedure: resolve factory, deploy, confirm.

use crate::chain::ChainClient;
use ethers::{abi::Token, types::Address};
use eyre::{Result, WrapErr};
use lazy_static::lazy_static;
use tracing::{info, instrument};

/// Name of the contract this binary deploys.
pub const SWAP_CONTRACT_NAME: &str = "LandshareSwap";

lazy_static! {
    /// gnUSD token address, first constructor argument.
    pub static ref GNUSD_TOKEN_ADDRESS: Address =
        "0x5c1409a46cD113b3A667Db6dF0a8D7bE37ed3BB3"
            .parse()
            .expect("gnUSD address literal is valid");
    /// Landshare token address, second constructor argument.
    pub static ref LANDSHARE_TOKEN_ADDRESS: Address =
        "0x45934E0253955dE498320D67c0346793be44BEC0"
            .parse()
            .expect("Landshare address literal is valid");
}

/// What to deploy. Built once at process start from the hardcoded
/// literals and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub contract_name: String,
    pub constructor_args: Vec<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentResult {
    pub contract_address: Address,
    pub confirmed: bool,
}

/// The deployment this binary exists to perform: LandshareSwap over the
/// gnUSD and Landshare token addresses, in that order. Argument order and
/// count must match the constructor signature; no local validation is done,
/// a mismatch surfaces as a chain client error.
pub fn swap_deployment_request() -> DeploymentRequest {
    DeploymentRequest {
        contract_name: SWAP_CONTRACT_NAME.to_string(),
        constructor_args: vec![
            Token::Address(*GNUSD_TOKEN_ADDRESS),
            Token::Address(*LANDSHARE_TOKEN_ADDRESS),
        ],
    }
}

/// Runs the one-shot deployment: resolve the contract factory by name,
/// submit the deployment with the fixed argument list, block until the
/// chain confirms it. Exactly one attempt; the first error is fatal.
#[instrument(skip_all, fields(contract = %request.contract_name))]
pub async fn run_deployment(
    chain: &dyn ChainClient,
    request: &DeploymentRequest,
) -> Result<DeploymentResult> {
    info!(contract = %request.contract_name, "Resolving contract factory...");
    let factory = chain
        .contract_factory(&request.contract_name)
        .await
        .wrap_err_with(|| format!("Could not resolve factory for `{}`", request.contract_name))?;

    info!(
        args = ?request.constructor_args,
        "Sending deployment transaction..."
    );
    let pending = factory
        .deploy(request.constructor_args.clone())
        .await
        .wrap_err_with(|| format!("Deployment of `{}` failed", request.contract_name))?;

    info!("Waiting for confirmation...");
    let result = pending
        .confirmed()
        .await
        .wrap_err_with(|| format!("Deployment of `{}` was not confirmed", request.contract_name))?;

    info!(address = ?result.contract_address, "✅ Deployment complete");
    Ok(result)
}
