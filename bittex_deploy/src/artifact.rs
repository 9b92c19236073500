use std::fs;
use std::path::{Path, PathBuf};

use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::Deserialize;

use crate::error::DeployError;

/// One compiled contract as the external toolchain writes it:
/// `<artifacts>/contracts/<Name>.sol/<Name>.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn artifact_path(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
        artifacts_dir
            .join("contracts")
            .join(format!("{contract_name}.sol"))
            .join(format!("{contract_name}.json"))
    }

    /// Resolve the named contract's build artifact. Purely local, runs
    /// before anything touches the network.
    pub fn resolve(artifacts_dir: &Path, contract_name: &str) -> Result<Self, DeployError> {
        let path = Self::artifact_path(artifacts_dir, contract_name);

        let raw = fs::read_to_string(&path).map_err(|_| DeployError::ArtifactNotFound {
            name: contract_name.to_owned(),
            path: path.clone(),
        })?;

        let artifact: ContractArtifact =
            serde_json::from_str(&raw).map_err(|e| DeployError::InvalidArtifact {
                name: contract_name.to_owned(),
                detail: e.to_string(),
            })?;

        // interfaces and abstract contracts compile to an empty "0x"
        if artifact.bytecode.is_empty() {
            return Err(DeployError::InvalidArtifact {
                name: contract_name.to_owned(),
                detail: "artifact has no creation bytecode".to_owned(),
            });
        }

        Ok(artifact)
    }
}
