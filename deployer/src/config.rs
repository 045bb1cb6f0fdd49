// deployer/src/config.rs

use dotenv::dotenv;
use eyre::{Result, WrapErr};
use std::env;

const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts";

#[derive(Debug, Clone)]
pub struct Config {
    // Network & Keys
    pub http_rpc_url: String,
    pub deployer_private_key: String,

    // Artifact Resolution
    pub artifacts_dir: String,
}

pub fn load_config() -> Result<Config> {
    dotenv().ok();

    let parse_string_env = |var_name: &str, default: &str| -> String {
        env::var(var_name)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    // --- Load vars ---
    let http_rpc_url = env::var("HTTP_RPC_URL")
        .wrap_err("HTTP_RPC_URL must be set (the RPC endpoint to deploy through)")?;
    let deployer_private_key = env::var("DEPLOYER_PRIVATE_KEY")
        .wrap_err("DEPLOYER_PRIVATE_KEY must be set (hex private key of the deploying account)")?;
    let artifacts_dir = parse_string_env("ARTIFACTS_DIR", DEFAULT_ARTIFACTS_DIR);

    Ok(Config {
        http_rpc_url,
        deployer_private_key,
        artifacts_dir,
    })
}
// END OF FILE: deployer/src/config.rs
