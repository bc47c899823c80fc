//! Tests for bitstring construction and bit addressing.

mod utils;

use insta::assert_snapshot;
use rstest::rstest;
use serde_json::json;
use status_bitstring::{BitOrder, Bitstring, Error, Options, Source};
use utils::bitstring;

#[rstest]
#[case(1, 1)]
#[case(7, 1)]
#[case(8, 1)]
#[case(9, 2)]
#[case(131_072, 16_384)]
fn zeroed(#[case] length: usize, #[case] bytes: usize) {
    utils::init_tracer();

    let bitstring = Bitstring::with_length(length).expect("should create");
    assert_eq!(bitstring.len(), length);
    assert_eq!(bitstring.as_bytes().len(), bytes);
    assert!((0..length).all(|p| !bitstring.get(p).expect("in range")));
}

#[rstest]
fn set_is_isolated(#[values(BitOrder::Msb0, BitOrder::Lsb0)] order: BitOrder) {
    let mut bitstring = Bitstring::new(Source::Length(20), order).expect("should create");

    for p in 0..20 {
        bitstring.set(p, true).expect("should set");
        for q in 0..20 {
            assert_eq!(bitstring.get(q).expect("in range"), p == q, "set {p}, read {q}");
        }
        bitstring.set(p, false).expect("should clear");
        assert!(!bitstring.get(p).expect("in range"));
    }
}

#[rstest]
#[case(BitOrder::Msb0, 8)]
#[case(BitOrder::Lsb0, 16)]
fn set_bit_4(#[case] order: BitOrder, #[case] expected: u8) {
    let mut bitstring = Bitstring::new(Source::Length(8), order).expect("should create");
    bitstring.set(4, true).expect("should set");
    assert_eq!(bitstring.as_bytes(), &[expected]);
}

#[test]
fn clear_bit_4() {
    let mut bitstring = Bitstring::from_bytes([0xFF]).expect("should create");
    assert!((0..8).all(|p| bitstring.get(p).expect("in range")));

    bitstring.set(4, false).expect("should clear");
    assert_eq!(bitstring.len(), 8);
    assert_eq!(bitstring.as_bytes(), &[0b1111_0111]);
    assert!(!bitstring.get(4).expect("in range"));
}

#[test]
fn buffer_kept_verbatim() {
    let bitstring =
        Bitstring::new(Source::Buffer(vec![0x01, 0x80]), BitOrder::Lsb0).expect("should create");
    assert_eq!(bitstring.len(), 16);
    assert!(bitstring.get(0).expect("in range"));
    assert!(bitstring.get(15).expect("in range"));
    assert_eq!(bitstring.bit_order(), BitOrder::Lsb0);
    assert_eq!(bitstring.into_bytes(), vec![0x01, 0x80]);
}

#[rstest]
fn out_of_range(mut bitstring: Bitstring) {
    let err = bitstring.get(8).expect_err("should be out of range");
    assert_eq!(err, Error::OutOfRange { position: 8, length: 8 });
    assert_snapshot!(err.to_string(), @"position 8 is out of range 0..7");

    assert!(bitstring.set(usize::MAX, true).is_err());
    assert_eq!(bitstring.as_bytes(), &[0]);
}

#[test]
fn options_both() {
    let options = Options {
        length: Some(4),
        buffer: Some(vec![0]),
        bit_order: None,
    };
    let err = Bitstring::try_from(options).expect_err("should be invalid");
    assert_snapshot!(err.to_string(), @"only one of `length` or `buffer` must be given");
}

#[test]
fn options_neither() {
    let err = Bitstring::try_from(Options::default()).expect_err("should be invalid");
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn options_from_json() {
    let options: Options =
        serde_json::from_value(json!({"length": 12, "bitOrder": "lsb0"})).expect("should parse");
    let bitstring = Bitstring::try_from(options).expect("should create");
    assert_eq!(bitstring.len(), 12);
    assert_eq!(bitstring.as_bytes().len(), 2);
    assert_eq!(bitstring.bit_order(), BitOrder::Lsb0);

    let bad = serde_json::from_value::<Options>(json!({"length": 8, "bitOrder": "little"}));
    assert!(bad.is_err());
}

#[test]
fn zero_length_json() {
    let err = Bitstring::try_from(Options {
        length: Some(0),
        ..Options::default()
    })
    .expect_err("should be invalid");
    assert_eq!(
        err.to_json(),
        json!({
            "error": "invalid_argument",
            "error_description": "`length` must be a positive integer"
        })
    );
}
