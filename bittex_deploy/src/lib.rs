pub mod artifact;
pub mod client;
pub mod config;
pub mod deploy;
pub mod error;

#[cfg(test)]
pub(crate) mod test_utils {
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard};
    use std::{env, fs};

    use crate::config::{NetworkProfile, PRIVATE_KEY_ENV_VAR};

    /// hardhat/anvil dev account #0, pre-funded on any local dev node
    pub const FUNDED_TEST_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    /// a valid key that no dev node pre-funds
    pub const UNFUNDED_TEST_KEY: &str =
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// deploys a contract with empty runtime code
    pub const MINIMAL_ARTIFACT_JSON: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "Bittex",
        "sourceName": "contracts/Bittex.sol",
        "abi": [],
        "bytecode": "0x60006000f3",
        "deployedBytecode": "0x"
    }"#;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Tests touching `DEPLOYER_PRIVATE_KEY` take this lock, the process
    /// environment is shared across the test threads.
    pub fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_signing_key(key: &str) {
        env::set_var(PRIVATE_KEY_ENV_VAR, key);
    }

    /// Profile for a dev node (anvil / hardhat node) read from RPC_URL and
    /// CHAIN_ID, or None when no node is configured.
    pub fn local_profile() -> Option<NetworkProfile> {
        let rpc_url = env::var("RPC_URL").ok()?;
        let chain_id = env::var("CHAIN_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(31337);

        Some(NetworkProfile {
            name: "local".to_owned(),
            rpc_url,
            chain_id,
            solc_version: "0.8.24".to_owned(),
        })
    }

    pub struct ScratchDir {
        root: PathBuf,
    }

    impl ScratchDir {
        pub fn path(&self) -> &Path {
            &self.root
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    /// Lay an artifacts dir out the way the compiler toolchain does:
    /// `<root>/contracts/<Name>.sol/<Name>.json`.
    pub fn write_artifact(contract_name: &str, artifact_json: &str) -> ScratchDir {
        let root = env::temp_dir().join(format!("bittex-artifacts-{}", uuid::Uuid::new_v4()));
        let contract_dir = root.join("contracts").join(format!("{contract_name}.sol"));
        fs::create_dir_all(&contract_dir).unwrap();
        fs::write(
            contract_dir.join(format!("{contract_name}.json")),
            artifact_json,
        )
        .unwrap();

        ScratchDir { root }
    }
}
