// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{JsonAbi, StateMutability},
    primitives::U256,
};

use super::DeploymentError::{self, InvalidConstructor};

/// ABI-encode constructor arguments given as strings, to be appended to the creation bytecode.
pub fn encode_args(
    abi: &JsonAbi,
    args: &[String],
    value: U256,
) -> Result<Vec<u8>, DeploymentError> {
    let Some(constructor) = &abi.constructor else {
        if !args.is_empty() {
            return Err(InvalidConstructor(format!(
                "contract has no constructor but {} arguments were given",
                args.len()
            )));
        }
        if !value.is_zero() {
            return Err(InvalidConstructor(
                "attempting to send Ether to a contract without a payable constructor".to_string(),
            ));
        }
        return Ok(Vec::new());
    };

    if constructor.state_mutability != StateMutability::Payable && !value.is_zero() {
        return Err(InvalidConstructor(
            "attempting to send Ether to non-payable constructor".to_string(),
        ));
    }
    if args.len() != constructor.inputs.len() {
        return Err(InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor
                .inputs
                .iter()
                .map(|param| param.ty.as_str())
                .collect::<Vec<_>>(),
            constructor.inputs.len(),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            InvalidConstructor(format!("could not parse constructor arg {param}: {err}"))
        })?;
        values.push(value);
    }

    constructor
        .abi_encode_input_raw(&values)
        .map_err(|err| InvalidConstructor(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABI: &str = r#"[{
        "type": "constructor",
        "inputs": [
            {"name": "initial", "type": "uint256", "internalType": "uint256"},
            {"name": "label", "type": "string", "internalType": "string"}
        ],
        "stateMutability": "nonpayable"
    }]"#;

    fn abi() -> JsonAbi {
        serde_json::from_str(ABI).unwrap()
    }

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_constructor_encodes_nothing() {
        let abi = JsonAbi::default();
        assert!(encode_args(&abi, &[], U256::ZERO).unwrap().is_empty());
        assert!(encode_args(&abi, &args(&["1"]), U256::ZERO).is_err());
        assert!(encode_args(&abi, &[], U256::from(1)).is_err());
    }

    #[test]
    fn encodes_coerced_values() {
        let encoded = encode_args(&abi(), &args(&["42", "hello"]), U256::ZERO).unwrap();
        // uint256 head, string offset, string length, string data
        assert_eq!(encoded.len(), 4 * 32);
        assert_eq!(encoded[..32], U256::from(42).to_be_bytes::<32>());
        assert_eq!(&encoded[96..101], b"hello");
    }

    #[test]
    fn rejects_argument_count_mismatch() {
        let err = encode_args(&abi(), &args(&["42"]), U256::ZERO).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid constructor: mismatch number of constructor arguments \
             (want [\"uint256\", \"string\"] (2); got 1)"
        );
    }

    #[test]
    fn rejects_value_for_non_payable() {
        let err = encode_args(&abi(), &args(&["42", "hello"]), U256::from(1)).unwrap_err();
        assert!(matches!(err, InvalidConstructor(_)));
    }

    #[test]
    fn rejects_unparsable_value() {
        let err = encode_args(&abi(), &args(&["forty-two", "hello"]), U256::ZERO).unwrap_err();
        assert!(err.to_string().contains("could not parse constructor arg"));
    }
}
