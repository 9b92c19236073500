use bittex_deploy::{config::NetworkProfile, deploy::ContractDeployer};

const NETWORK: &str = bittex_deploy::config::BNB_TESTNET;
const CONTRACT_NAME: &str = "Bittex";
const ARTIFACTS_DIR: &str = "artifacts";

#[tokio::main]
async fn main() {
    match run().await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let profile = NetworkProfile::lookup(NETWORK)?;
    let deployer = ContractDeployer::new(profile, ARTIFACTS_DIR)?;

    // note that debug fmt of an address is the full '0x..' hex encoding,
    // where as .to_string() truncates it
    println!(
        "Deploying contracts with the account: {:?}",
        deployer.address()
    );

    let deployed = deployer.deploy(CONTRACT_NAME).await?;

    println!("Contract deployed at: {:?}", deployed.contract_address);

    Ok(())
}
