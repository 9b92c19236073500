use std::path::PathBuf;

use ethers::contract::ContractError;
use ethers::providers::{Middleware, ProviderError};
use thiserror::Error;

/// Everything that can stop a deployment, tagged by cause. All variants
/// bubble unhandled to the binary's single catch site.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),

    #[error("no signing credential: set {0}")]
    MissingCredential(&'static str),

    #[error("signing credential is not a valid 32-byte hex private key")]
    InvalidCredential,

    #[error("no build artifact for contract `{name}` at {path} (run the compiler toolchain first)")]
    ArtifactNotFound { name: String, path: PathBuf },

    #[error("build artifact for contract `{name}` is unusable: {detail}")]
    InvalidArtifact { name: String, detail: String },

    #[error("invalid rpc endpoint `{0}`")]
    InvalidEndpoint(String),

    #[error("endpoint reports chain id {actual}, profile expects {expected}")]
    ChainIdMismatch { expected: u64, actual: u64 },

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("deployment reverted: {0}")]
    Reverted(String),

    #[error("network error: {0}")]
    Network(String),
}

impl DeployError {
    /// Sort a raw node/transport message into the closest tagged cause.
    /// Nodes report funding and revert failures as free-form json-rpc
    /// error strings, so matching on the message text is all there is.
    pub(crate) fn from_rpc(message: String) -> Self {
        let lowered = message.to_ascii_lowercase();
        if lowered.contains("insufficient funds") {
            return DeployError::InsufficientFunds(message);
        }
        if lowered.contains("execution reverted") {
            return DeployError::Reverted(message);
        }
        DeployError::Network(message)
    }

    pub(crate) fn from_provider(err: ProviderError) -> Self {
        Self::from_rpc(err.to_string())
    }

    pub(crate) fn from_contract_error<M: Middleware>(err: ContractError<M>) -> Self {
        if err.is_revert() {
            let reason = err
                .decode_revert::<String>()
                .unwrap_or_else(|| "no revert reason given".to_owned());
            return DeployError::Reverted(reason);
        }
        Self::from_rpc(err.to_string())
    }
}
