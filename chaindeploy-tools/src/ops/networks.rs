// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::{self, Write};

use crate::{
    core::manifest::{DeployManifest, NetworkProfile},
    utils::format_gwei,
};

/// Print the selectable networks, marking the one used when none is given.
pub fn print_networks(manifest: &DeployManifest, verbose: bool) -> io::Result<()> {
    write_networks(&mut io::stdout().lock(), manifest, verbose)
}

fn write_networks(
    out: &mut impl Write,
    manifest: &DeployManifest,
    verbose: bool,
) -> io::Result<()> {
    let default = manifest.network(None).ok().map(|profile| profile.name);
    for name in manifest.network_names() {
        let Ok(profile) = manifest.network(Some(name)) else {
            continue;
        };
        let marker = if default.as_deref() == Some(name) {
            " (default)"
        } else {
            ""
        };
        writeln!(out, "{name}{marker}")?;
        writeln!(out, "  url: {}", profile.url)?;
        writeln!(out, "  chain id: {}", display_or_auto(profile.chain_id))?;
        if verbose {
            write_details(out, &profile)?;
        }
    }

    if verbose {
        for compiler in &manifest.solidity.compilers {
            let optimizer = compiler.settings.optimizer;
            writeln!(
                out,
                "solidity {} (optimizer: {}, runs: {})",
                compiler.version,
                if optimizer.enabled { "on" } else { "off" },
                optimizer.runs
            )?;
        }
        writeln!(
            out,
            "explorer api key: {}",
            if manifest.etherscan.api_key.is_empty() {
                "unset"
            } else {
                "set"
            }
        )?;
    }
    Ok(())
}

fn write_details(out: &mut impl Write, profile: &NetworkProfile) -> io::Result<()> {
    writeln!(out, "  gas: {}", display_or_auto(profile.gas))?;
    let gas_price = profile
        .gas_price
        .map(format_gwei)
        .unwrap_or_else(|| "auto".to_owned());
    writeln!(out, "  gas price: {gas_price}")?;
    let accounts = if profile.uses_node_accounts() {
        "node".to_owned()
    } else {
        profile.accounts.len().to_string()
    };
    writeln!(out, "  accounts: {accounts}")?;
    writeln!(
        out,
        "  confirmations: {} (timeout {}s)",
        profile.confirmations,
        profile.confirmation_timeout.as_secs()
    )
}

fn display_or_auto(value: Option<impl ToString>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "auto".to_owned())
}
