// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path, process::Output};

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Creation code for a contract whose runtime code is a single `STOP`.
const STOP_INITCODE: &str = "0x6001600c60003960016000f300";

/// First prefunded key of a local development node.
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Nothing listens here, so every RPC call fails fast.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

fn project(manifest: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Deploy.toml"), manifest).unwrap();
    let artifact_dir = dir.path().join("artifacts/contracts/IPFSStorage.sol");
    fs::create_dir_all(&artifact_dir).unwrap();
    fs::write(
        artifact_dir.join("IPFSStorage.json"),
        format!(
            r#"{{
  "_format": "hh-sol-artifact-1",
  "contractName": "IPFSStorage",
  "sourceName": "contracts/IPFSStorage.sol",
  "abi": [],
  "bytecode": "{STOP_INITCODE}",
  "deployedBytecode": "0x00",
  "linkReferences": {{}},
  "deployedLinkReferences": {{}}
}}"#
        ),
    )
    .unwrap();
    dir
}

fn chaindeploy(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chaindeploy").unwrap();
    cmd.current_dir(dir)
        .env_remove("CHAINDEPLOY_NETWORK")
        .env_remove("CHAINDEPLOY_CONFIG");
    cmd
}

fn assert_failed(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(!stdout.contains("Contract deployed to"), "stdout: {stdout}");
    assert!(!stdout.contains("0x"), "stdout: {stdout}");
    stderr
}

#[test]
fn lists_networks() {
    let dir = project(
        r#"
defaultNetwork = "bsc-testnet"

[networks.bsc-testnet]
accounts = [""]
chainId = 97
url = "https://data-seed-prebsc-1-s1.binance.org:8545/"
gas = 2100000
gasPrice = 10000000000
"#,
    );
    let output = chaindeploy(dir.path()).arg("networks").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "hardhat\n  url: http://127.0.0.1:8545\n  chain id: auto\n\
         bsc-testnet (default)\n  url: https://data-seed-prebsc-1-s1.binance.org:8545/\n  chain id: 97\n"
    );
}

#[test]
fn missing_artifact_fails() {
    let dir = project("");
    let output = chaindeploy(dir.path())
        .args(["deploy", "Missing"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("artifact for contract \"Missing\" not found"));
}

#[test]
fn empty_account_key_fails_at_signing() {
    let dir = project(&format!(
        r#"
[networks.ropsten]
accounts = [""]
chainId = 3
url = "{DEAD_ENDPOINT}"
gas = 4100000
gasPrice = 50000000000
"#
    ));
    let output = chaindeploy(dir.path())
        .args(["deploy", "IPFSStorage", "--network", "ropsten"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("invalid key for account #0"), "stderr: {stderr}");
}

#[test]
fn unreachable_endpoint_fails() {
    let dir = project(&format!(
        r#"
[networks.local]
accounts = ["{DEV_KEY}"]
chainId = 31337
url = "{DEAD_ENDPOINT}"
gas = 2100000
gasPrice = 10000000000
"#
    ));
    let output = chaindeploy(dir.path())
        .args(["deploy", "IPFSStorage", "--timeout", "5"])
        .env("CHAINDEPLOY_NETWORK", "local")
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("error"), "stderr: {stderr}");
}

#[test]
fn unknown_network_fails() {
    let dir = project("");
    let output = chaindeploy(dir.path())
        .args(["deploy", "IPFSStorage", "--network", "goerli"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("unknown network \"goerli\""));
}

#[test]
fn explicit_manifest_must_exist() {
    let dir = project("");
    let output = chaindeploy(dir.path())
        .args(["deploy", "IPFSStorage", "--config", "Missing.toml"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("missing Missing.toml"));
}

#[test]
fn constructor_mismatch_fails_before_sending() {
    let dir = project(&format!(
        r#"
[networks.hardhat]
url = "{DEAD_ENDPOINT}"
"#
    ));
    let output = chaindeploy(dir.path())
        .args(["deploy", "IPFSStorage", "--constructor-args", "1"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("contract has no constructor"));
}

#[test]
fn config_locates_artifacts_next_to_manifest() {
    let dir = project(&format!(
        r#"
[networks.hardhat]
url = "{DEAD_ENDPOINT}"
"#
    ));
    let workdir = dir.path().join("scripts");
    fs::create_dir(&workdir).unwrap();

    let output = chaindeploy(&workdir)
        .args(["deploy", "IPFSStorage", "--config", "../Deploy.toml"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(!stderr.contains("not found"), "stderr: {stderr}");
    assert!(stderr.contains("rpc error"), "stderr: {stderr}");

    let output = chaindeploy(&workdir)
        .args(["deploy", "IPFSStorage", "--config", "../Deploy.toml"])
        .args(["--artifacts", "artifacts"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(
        stderr.contains("artifact for contract \"IPFSStorage\" not found in artifacts"),
        "stderr: {stderr}"
    );
}

#[cfg(feature = "integration-tests")]
mod integration_test {
    use chaindeploy_tools::devnet::{Node, DEVNET_CHAIN_ID, DEVNET_PRIVATE_KEY};
    use eyre::Result;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn deploy_prints_only_the_address() -> Result<()> {
        let devnode = Node::new().await?;
        let dir = project(&format!(
            r#"
defaultNetwork = "devnet"

[networks.devnet]
accounts = ["{DEVNET_PRIVATE_KEY}"]
chainId = {DEVNET_CHAIN_ID}
url = "{}"
gas = 2100000
gasPrice = 10000000000
"#,
            devnode.rpc()
        ));

        let output = chaindeploy(dir.path())
            .args(["deploy", "IPFSStorage"])
            .output()?;
        assert_eq!(output.status.code(), Some(0));
        // First contract created by the first prefunded account.
        assert_eq!(
            String::from_utf8(output.stdout)?,
            "Contract deployed to: 0x5FbDB2315678afecb367f032d93F642f64180aa3\n"
        );
        Ok(())
    }
}
