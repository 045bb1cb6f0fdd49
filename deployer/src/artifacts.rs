// deployer/src/artifacts.rs
// Module for resolving a contract name to its compiled artifact.
// Artifacts are the Hardhat-format JSON files the build toolchain emits
// (contractName / abi / bytecode); this module only reads them.

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no artifact for contract `{name}` under {dir:?}")]
    NotFound { name: String, dir: PathBuf },

    #[error("failed to read artifact file {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact file {path:?} is not valid artifact JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact for `{name}` carries no deployment bytecode")]
    EmptyBytecode { name: String },

    #[error("artifact bytecode for `{name}` is not valid hex")]
    InvalidBytecode {
        name: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// One compiled contract as the build toolchain wrote it to disk.
/// Unknown JSON fields (sourceName, deployedBytecode, linkReferences, ...)
/// are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: String,
}

impl ContractArtifact {
    /// Decodes the artifact's creation bytecode from its hex form.
    pub fn deployment_bytecode(&self) -> Result<Bytes, ArtifactError> {
        let cleaned = self.bytecode.trim().trim_start_matches("0x");
        if cleaned.is_empty() {
            return Err(ArtifactError::EmptyBytecode {
                name: self.contract_name.clone(),
            });
        }
        let raw = hex::decode(cleaned).map_err(|source| ArtifactError::InvalidBytecode {
            name: self.contract_name.clone(),
            source,
        })?;
        Ok(Bytes::from(raw))
    }
}

/// Resolves contract names against a directory of compiled artifacts.
/// Layout: `<dir>/<ContractName>.json`.
#[derive(Debug, Clone)]
pub struct ArtifactRegistry {
    dir: PathBuf,
}

impl ArtifactRegistry {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        let path = self.dir.join(format!("{}.json", name));
        if !path.is_file() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                dir: self.dir.clone(),
            });
        }
        let raw = fs::read_to_string(&path).map_err(|source| ArtifactError::Unreadable {
            path: path.clone(),
            source,
        })?;
        let artifact: ContractArtifact =
            serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
                path: path.clone(),
                source,
            })?;
        Ok(artifact)
    }
}
// END OF FILE: deployer/src/artifacts.rs
