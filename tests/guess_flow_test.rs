//! End-to-end inference over hand-encoded calldata
//!
//! Each vector is written out word by word so the layout under test is
//! visible in the fixture itself.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Address, U256};
use sigsniff::{guess_abi_encoded_data, guess_fragment};

#[test]
fn test_single_uint() {
    let data = hex::decode(
        "000000000000000000000000000000000000000000000000000000000000002a",
    )
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(types, vec![DynSolType::Uint(256)]);
}

#[test]
fn test_address_and_uint() {
    let data = hex::decode(concat!(
        "000000000000000000000000742d35cc6634c0532925a3b844bc9e7595f0beb0",
        "00000000000000000000000000000000000000000000000000000000000f4240",
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(types, vec![DynSolType::Address, DynSolType::Uint(256)]);
}

#[test]
fn test_single_string() {
    let data = hex::decode(concat!(
        "0000000000000000000000000000000000000000000000000000000000000020", // offset
        "0000000000000000000000000000000000000000000000000000000000000005", // length
        "68656c6c6f000000000000000000000000000000000000000000000000000000", // "hello"
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(types, vec![DynSolType::String]);
}

#[test]
fn test_dynamic_bytes_stay_bytes() {
    // five bytes that are not valid UTF-8
    let data = hex::decode(concat!(
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000005",
        "fff0f1f2f3000000000000000000000000000000000000000000000000000000",
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(types, vec![DynSolType::Bytes]);
}

#[test]
fn test_uint_array() {
    let data = hex::decode(concat!(
        "0000000000000000000000000000000000000000000000000000000000000020", // offset
        "0000000000000000000000000000000000000000000000000000000000000003", // length
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "0000000000000000000000000000000000000000000000000000000000000003",
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(
        types,
        vec![DynSolType::Array(Box::new(DynSolType::Uint(256)))]
    );
}

#[test]
fn test_string_array() {
    let data = hex::decode(concat!(
        "0000000000000000000000000000000000000000000000000000000000000020", // outer offset
        "0000000000000000000000000000000000000000000000000000000000000002", // outer length
        "0000000000000000000000000000000000000000000000000000000000000040", // offset of "a"
        "0000000000000000000000000000000000000000000000000000000000000080", // offset of "bb"
        "0000000000000000000000000000000000000000000000000000000000000001",
        "6100000000000000000000000000000000000000000000000000000000000000", // "a"
        "0000000000000000000000000000000000000000000000000000000000000002",
        "6262000000000000000000000000000000000000000000000000000000000000", // "bb"
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(types, vec![DynSolType::Array(Box::new(DynSolType::String))]);
}

#[test]
fn test_array_of_uint_string_tuples() {
    let data = hex::decode(concat!(
        "0000000000000000000000000000000000000000000000000000000000000020", // outer offset
        "0000000000000000000000000000000000000000000000000000000000000002", // outer length
        "0000000000000000000000000000000000000000000000000000000000000040", // offset of (1, "a")
        "00000000000000000000000000000000000000000000000000000000000000c0", // offset of (2, "bb")
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000040",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "6100000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "0000000000000000000000000000000000000000000000000000000000000040",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "6262000000000000000000000000000000000000000000000000000000000000",
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(
        types,
        vec![DynSolType::Array(Box::new(DynSolType::Tuple(vec![
            DynSolType::Uint(256),
            DynSolType::String,
        ])))]
    );
}

#[test]
fn test_empty_dynamic_payload_keeps_the_sentinel() {
    let data = hex::decode(concat!(
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(
        types,
        vec![DynSolType::Array(Box::new(DynSolType::Tuple(Vec::new())))]
    );
}

#[test]
fn test_guessed_types_redecode() {
    // round-trip soundness: whatever was guessed must decode the input
    let data = hex::decode(concat!(
        "000000000000000000000000742d35cc6634c0532925a3b844bc9e7595f0beb0",
        "0000000000000000000000000000000000000000000000000000000000000060",
        "000000000000000000000000000000000000000000000000000000000000002a",
        "0000000000000000000000000000000000000000000000000000000000000005",
        "68656c6c6f000000000000000000000000000000000000000000000000000000",
    ))
    .unwrap();

    let types = guess_abi_encoded_data(&data).unwrap();
    let tuple = DynSolType::Tuple(types.clone());
    assert!(tuple.abi_decode_sequence(&data).is_ok(), "guessed {types:?}");
}

#[test]
fn test_encoded_values_guess_back() {
    let values = DynSolValue::Tuple(vec![
        DynSolValue::Address(Address::from([0x11; 20])),
        DynSolValue::Uint(U256::from(42u64), 256),
        DynSolValue::String("hello".to_string()),
    ]);
    let data = values.abi_encode_params();

    let types = guess_abi_encoded_data(&data).unwrap();
    assert_eq!(
        types,
        vec![
            DynSolType::Address,
            DynSolType::Uint(256),
            DynSolType::String,
        ]
    );
}

#[test]
fn test_fragment_wraps_the_selector() {
    let data = hex::decode(concat!(
        "a9059cbb",
        "000000000000000000000000000000000000000000000000000000000000002a",
    ))
    .unwrap();

    let fragment = guess_fragment(&data).unwrap();
    assert_eq!(fragment.name, "guessed_a9059cbb");
    assert_eq!(fragment.selector_hex(), "0xa9059cbb");
    assert_eq!(fragment.signature(), "guessed_a9059cbb(uint256)");

    // the parameter list matches a direct guess of the payload
    assert_eq!(fragment.inputs, guess_abi_encoded_data(&data[4..]).unwrap());
}

#[test]
fn test_fragment_rejects_short_calldata() {
    assert!(guess_fragment(&[]).is_none());
    assert!(guess_fragment(&[0xa9, 0x05]).is_none());
}
