use std::path::PathBuf;

use ethers::contract::ContractFactory;
use ethers::providers::Middleware;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, H256, U256, U64};

use crate::artifact::ContractArtifact;
use crate::client::{get_provider, get_signer_client, get_wallet};
use crate::config::NetworkProfile;
use crate::error::DeployError;

/// What a confirmed deployment leaves behind. Reported once and dropped,
/// nothing persists it.
#[derive(Clone, Debug)]
pub struct DeploymentResult {
    pub contract_address: Address,
    pub deployer: Address,
    pub transaction_hash: H256,
    pub block_number: Option<U64>,
}

/// One-shot deployment runner for a single network profile.
pub struct ContractDeployer {
    profile: NetworkProfile,
    artifacts_dir: PathBuf,
    wallet: LocalWallet,
}

impl ContractDeployer {
    pub fn new(
        profile: NetworkProfile,
        artifacts_dir: impl Into<PathBuf>,
    ) -> Result<Self, DeployError> {
        let wallet = get_wallet(&profile)?;

        Ok(Self {
            profile,
            artifacts_dir: artifacts_dir.into(),
            wallet,
        })
    }

    /// The account that will pay for the deployment.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Deploy the named contract and wait for it to be mined. A single
    /// best-effort attempt: no retry, no rollback, any failure bubbles up.
    pub async fn deploy(&self, contract_name: &str) -> Result<DeploymentResult, DeployError> {
        // artifact resolution is local and comes first, a missing build
        // output must fail before any network call
        let artifact = ContractArtifact::resolve(&self.artifacts_dir, contract_name)?;

        let provider = get_provider(&self.profile)?;

        // the profile's chain id is asserted against the endpoint before
        // spending anything, a mismatch here means the url points at a
        // different network than the table claims
        let reported = provider
            .get_chainid()
            .await
            .map_err(DeployError::from_provider)?;
        if reported != U256::from(self.profile.chain_id) {
            return Err(DeployError::ChainIdMismatch {
                expected: self.profile.chain_id,
                actual: reported.as_u64(),
            });
        }

        let deployer = self.wallet.address();
        let balance = provider
            .get_balance(deployer, None)
            .await
            .map_err(DeployError::from_provider)?;
        if balance.is_zero() {
            return Err(DeployError::InsufficientFunds(format!(
                "deployer {deployer:?} has zero balance on chain {}",
                self.profile.chain_id
            )));
        }

        let client = get_signer_client(provider, self.wallet.clone());

        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, client);
        let (contract, receipt) = factory
            .deploy(())
            .map_err(DeployError::from_contract_error)?
            // BNB chain does not accept eip-1559 transactions
            .legacy()
            .send_with_receipt()
            .await
            .map_err(DeployError::from_contract_error)?;

        Ok(DeploymentResult {
            contract_address: contract.address(),
            deployer,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}
