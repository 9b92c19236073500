use std::sync::Arc;

use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer, Wallet},
};

use crate::{config::NetworkProfile, error::DeployError};

pub type EtherSigner = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

/// Build the deployer's wallet from the profile's sourced credential,
/// stamped with the profile's chain id to prevent cross-network replay.
pub fn get_wallet(profile: &NetworkProfile) -> Result<LocalWallet, DeployError> {
    let key = profile.signing_key()?;

    let key_bytes = hex::decode(key.trim_start_matches("0x"))
        .map_err(|_| DeployError::InvalidCredential)?;
    let wallet =
        LocalWallet::from_bytes(&key_bytes).map_err(|_| DeployError::InvalidCredential)?;

    Ok(wallet.with_chain_id(profile.chain_id))
}

pub fn get_provider(profile: &NetworkProfile) -> Result<Provider<Http>, DeployError> {
    Provider::<Http>::try_from(profile.rpc_url.as_str())
        .map_err(|_| DeployError::InvalidEndpoint(profile.rpc_url.clone()))
}

pub fn get_signer_client(provider: Provider<Http>, wallet: LocalWallet) -> Arc<EtherSigner> {
    Arc::new(SignerMiddleware::new(provider, wallet))
}
