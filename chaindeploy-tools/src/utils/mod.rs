// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::utils::format_units;

use color::Color;

pub mod color;

/// Decode a hex string with or without a `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Pretty-prints a wei amount in gwei.
pub fn format_gwei(wei: u128) -> String {
    match format_units(wei, "gwei") {
        Ok(text) => format!("{text} gwei"),
        Err(_) => "???".red(),
    }
}

/// Pretty-prints a wei amount in ether, colored by how expensive it is.
pub fn format_eth(wei: u128) -> String {
    let Ok(text) = format_units(wei, "ether") else {
        return "???".red();
    };
    let eth = text.parse::<f64>().unwrap_or(f64::MAX);
    let text = format!("{text} ETH");
    if eth <= 0.01 {
        text.mint()
    } else if eth <= 0.1 {
        text.yellow()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_with_and_without_prefix() {
        assert_eq!(decode0x("0x6001").unwrap(), vec![0x60, 0x01]);
        assert_eq!(decode0x(" 6001\n").unwrap(), vec![0x60, 0x01]);
        assert_eq!(decode0x("").unwrap(), Vec::<u8>::new());
        assert!(decode0x("0xzz").is_err());
    }

    #[test]
    fn gwei_formatting() {
        assert_eq!(format_gwei(10_000_000_000), "10.000000000 gwei");
    }
}
