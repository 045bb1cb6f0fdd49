// tests/artifact_registry_test.rs

use ethers::abi::Abi;
use eyre::Result;
use landshare_swap_deploy::{ArtifactError, ArtifactRegistry, ContractArtifact, SWAP_CONTRACT_NAME};
use std::{fs, path::PathBuf};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "landshare_swap_deploy_{}_{}",
        tag,
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn loads_the_shipped_landshare_swap_artifact() -> Result<()> {
    let registry = ArtifactRegistry::new("artifacts");
    let artifact = registry.load(SWAP_CONTRACT_NAME)?;

    assert_eq!(artifact.contract_name, "LandshareSwap");
    let constructor = artifact
        .abi
        .constructor
        .as_ref()
        .expect("LandshareSwap ABI must carry a constructor");
    assert_eq!(constructor.inputs.len(), 2);

    let bytecode = artifact.deployment_bytecode()?;
    assert!(!bytecode.is_empty());
    Ok(())
}

#[test]
fn unknown_contract_name_is_not_found() {
    let registry = ArtifactRegistry::new("artifacts");
    match registry.load("NoSuchContract") {
        Err(ArtifactError::NotFound { name, .. }) => assert_eq!(name, "NoSuchContract"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn malformed_artifact_json_is_rejected() {
    let dir = scratch_dir("malformed");
    fs::write(dir.join("Broken.json"), "{ this is not json").expect("write fixture");
    let registry = ArtifactRegistry::new(&dir);
    assert!(matches!(
        registry.load("Broken"),
        Err(ArtifactError::Malformed { .. })
    ));
}

#[test]
fn non_hex_bytecode_is_rejected() {
    let artifact = ContractArtifact {
        contract_name: "Broken".to_string(),
        abi: Abi::default(),
        bytecode: "0xnothex".to_string(),
    };
    assert!(matches!(
        artifact.deployment_bytecode(),
        Err(ArtifactError::InvalidBytecode { .. })
    ));
}

#[test]
fn empty_bytecode_is_rejected() {
    let artifact = ContractArtifact {
        contract_name: "Broken".to_string(),
        abi: Abi::default(),
        bytecode: "0x".to_string(),
    };
    assert!(matches!(
        artifact.deployment_bytecode(),
        Err(ArtifactError::EmptyBytecode { .. })
    ));
}
