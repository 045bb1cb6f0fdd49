// deployer/src/chain.rs
// Chain client seam: everything that talks to the network lives behind
// these traits so the deployment procedure itself stays submission-agnostic.

use crate::artifacts::ArtifactRegistry;
use crate::deploy::DeploymentResult;
use async_trait::async_trait;
use ethers::{
    abi::{Abi, Token},
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::LocalWallet,
    types::{Bytes, TransactionReceipt, TxHash, U64},
};
use eyre::{Result, WrapErr};
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, info, warn};

// --- Constants ---
// Confirmation defaults are owned by the chain client, not its callers.
const CONFIRMATION_POLL_INTERVAL_MS: u64 = 5_000;
const CONFIRMATION_TIMEOUT_SECS: u64 = 90;
const TX_SUCCESS_STATUS: U64 = U64([1]);

/// Resolves contract names to deployable factories.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn contract_factory(&self, name: &str) -> Result<Box<dyn ContractFactoryHandle>>;
}

/// A factory for one compiled contract: produces and submits its
/// deployment transaction.
#[async_trait]
pub trait ContractFactoryHandle: Send + Sync {
    async fn deploy(&self, constructor_args: Vec<Token>) -> Result<Box<dyn PendingDeployment>>;
}

/// A deployment transaction that has been submitted but not yet confirmed.
#[async_trait]
pub trait PendingDeployment: Send + Sync {
    /// Blocks until the transaction is included and returns the deployed
    /// contract address. Consumes the pending handle: a deployment is
    /// confirmed at most once.
    async fn confirmed(self: Box<Self>) -> Result<DeploymentResult>;
}

// --- Ethers-backed implementation ---

pub struct EthersChainClient {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
    registry: ArtifactRegistry,
}

impl EthersChainClient {
    pub fn new(
        client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
        registry: ArtifactRegistry,
    ) -> Self {
        Self { client, registry }
    }
}

#[async_trait]
impl ChainClient for EthersChainClient {
    async fn contract_factory(&self, name: &str) -> Result<Box<dyn ContractFactoryHandle>> {
        let artifact = self
            .registry
            .load(name)
            .wrap_err_with(|| format!("Failed to resolve contract factory for `{}`", name))?;
        let bytecode = artifact.deployment_bytecode()?;
        debug!(
            contract = %artifact.contract_name,
            bytecode_bytes = bytecode.len(),
            "Loaded deployment artifact"
        );
        Ok(Box::new(EthersContractFactory {
            client: self.client.clone(),
            contract_name: artifact.contract_name,
            abi: artifact.abi,
            bytecode,
        }))
    }
}

struct EthersContractFactory {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
    contract_name: String,
    abi: Abi,
    bytecode: Bytes,
}

#[async_trait]
impl ContractFactoryHandle for EthersContractFactory {
    async fn deploy(&self, constructor_args: Vec<Token>) -> Result<Box<dyn PendingDeployment>> {
        // Construct the factory with the artifact's ABI and creation bytecode.
        let factory = ContractFactory::new(
            self.abi.clone(),
            self.bytecode.clone(),
            self.client.clone(),
        );

        // An argument list that does not match the constructor signature
        // surfaces here.
        let deployer = factory.deploy_tokens(constructor_args).map_err(|e| {
            eyre::eyre!(
                "Failed to construct deployment call for `{}`: {}",
                self.contract_name,
                e
            )
        })?;

        let pending_tx = self
            .client
            .send_transaction(deployer.tx, None)
            .await
            .wrap_err_with(|| {
                format!(
                    "Failed to send deployment transaction for `{}`",
                    self.contract_name
                )
            })?;
        let tx_hash = pending_tx.tx_hash();
        info!(?tx_hash, contract = %self.contract_name, "Deployment transaction sent");

        Ok(Box::new(EthersPendingDeployment {
            client: self.client.clone(),
            tx_hash,
        }))
    }
}

struct EthersPendingDeployment {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
    tx_hash: TxHash,
}

impl EthersPendingDeployment {
    async fn await_receipt(&self) -> Result<TransactionReceipt> {
        loop {
            let receipt = self
                .client
                .get_transaction_receipt(self.tx_hash)
                .await
                .wrap_err("Failed to query deployment receipt")?;
            if let Some(receipt) = receipt {
                return Ok(receipt);
            }
            debug!(tx_hash = ?self.tx_hash, "No receipt yet, polling again...");
            sleep(Duration::from_millis(CONFIRMATION_POLL_INTERVAL_MS)).await;
        }
    }
}

#[async_trait]
impl PendingDeployment for EthersPendingDeployment {
    async fn confirmed(self: Box<Self>) -> Result<DeploymentResult> {
        let receipt = match timeout(
            Duration::from_secs(CONFIRMATION_TIMEOUT_SECS),
            self.await_receipt(),
        )
        .await
        {
            Ok(receipt) => receipt?,
            Err(_) => {
                warn!(tx_hash = ?self.tx_hash, "Receipt not found within timeout");
                eyre::bail!(
                    "Timed out waiting for deployment receipt ({}s). Hash: {:?}",
                    CONFIRMATION_TIMEOUT_SECS,
                    self.tx_hash
                );
            }
        };

        if receipt.status != Some(TX_SUCCESS_STATUS) {
            eyre::bail!(
                "Deployment transaction reverted on-chain (status {:?}). Hash: {:?}",
                receipt.status,
                self.tx_hash
            );
        }
        let contract_address = receipt.contract_address.ok_or_else(|| {
            eyre::eyre!(
                "Confirmed receipt carries no contract address. Hash: {:?}",
                self.tx_hash
            )
        })?;
        info!(
            ?contract_address,
            block = ?receipt.block_number,
            gas_used = ?receipt.gas_used,
            "Deployment confirmed"
        );

        Ok(DeploymentResult {
            contract_address,
            confirmed: true,
        })
    }
}
// END OF FILE: deployer/src/chain.rs
