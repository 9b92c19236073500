use crate::error::DeployError;

pub const BNB_TESTNET: &str = "BNB_Testnet";

pub const PRIVATE_KEY_ENV_VAR: &str = "DEPLOYER_PRIVATE_KEY";

/// Static description of one target network. The signing credential is
/// deliberately NOT part of the table, see [`NetworkProfile::signing_key`].
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkProfile {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: u64,
    /// Compiler pin for the external toolchain that produces the build
    /// artifacts. Informational only, nothing here invokes the compiler.
    pub solc_version: String,
}

impl NetworkProfile {
    /// Look a network up by name. `BNB_Testnet` is the only entry.
    pub fn lookup(name: &str) -> Result<Self, DeployError> {
        match name {
            BNB_TESTNET => Ok(Self {
                name: BNB_TESTNET.to_owned(),
                rpc_url: "https://data-seed-prebsc-1-s1.binance.org:8545".to_owned(),
                chain_id: 97,
                solc_version: "0.8.24".to_owned(),
            }),
            other => Err(DeployError::UnknownNetwork(other.to_owned())),
        }
    }

    /// The funding key comes from the environment (or a local .env file),
    /// never from the profile table.
    pub fn signing_key(&self) -> Result<String, DeployError> {
        dotenv::dotenv().ok();

        std::env::var(PRIVATE_KEY_ENV_VAR)
            .map_err(|_| DeployError::MissingCredential(PRIVATE_KEY_ENV_VAR))
    }
}
