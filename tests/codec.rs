//! Tests for compressing and encoding bitstrings.

mod utils;

use base64ct::{Base64UrlUnpadded, Encoding};
use rstest::rstest;
use status_bitstring::{codec, BitOrder, Bitstring, Error};
use utils::bitstring;

#[rstest]
fn encode_decode(mut bitstring: Bitstring) {
    utils::init_tracer();

    bitstring.set(1, true).expect("should set");
    bitstring.set(4, true).expect("should set");

    let encoded = bitstring.encode_bits().expect("should encode");
    assert_eq!(bitstring.len(), 8);
    assert_eq!(bitstring.as_bytes().len(), 1);

    let decoded = codec::decode(&encoded).expect("should decode");
    assert_eq!(decoded, vec![0b0100_1000]);
    assert_eq!(decoded, bitstring.as_bytes());
}

#[rstest]
fn compress_decompress(mut bitstring: Bitstring) {
    bitstring.set(1, true).expect("should set");
    bitstring.set(4, true).expect("should set");

    let compressed = bitstring.compress_bits().expect("should compress");
    let uncompressed = codec::decompress(&compressed).expect("should decompress");
    assert_eq!(uncompressed, bitstring.as_bytes());

    let rebuilt = Bitstring::from_compressed(&compressed, BitOrder::Msb0).expect("should rebuild");
    assert_eq!(rebuilt, bitstring);
}

fn sparse() -> Vec<u8> {
    let mut bytes = vec![0; 16_384];
    bytes[1_000] = 0x10;
    bytes
}

#[rstest]
#[case::single(vec![0])]
#[case::ones(vec![0xFF; 3])]
#[case::sparse(sparse())]
#[case::mixed((0..=255).collect())]
fn round_trip(#[case] bytes: Vec<u8>) {
    let compressed = codec::compress(&bytes).expect("should compress");
    assert_eq!(codec::decompress(&compressed).expect("should decompress"), bytes);

    let encoded = codec::encode(&bytes).expect("should encode");
    assert_eq!(codec::decode(&encoded).expect("should decode"), bytes);
}

#[test]
fn sparse_list_is_small() {
    let mut bitstring = Bitstring::with_length(131_072).expect("should create");
    bitstring.set(42, true).expect("should set");
    bitstring.set(100_000, true).expect("should set");

    let encoded = bitstring.encode_bits().expect("should encode");
    assert!(encoded.len() < 1_000);

    let rebuilt = Bitstring::from_encoded(&encoded, BitOrder::Msb0).expect("should rebuild");
    assert!(rebuilt.get(42).expect("in range"));
    assert!(rebuilt.get(100_000).expect("in range"));
    assert_eq!(rebuilt.count_ones(), 2);
}

#[test]
fn foreign_encoding() {
    // pako gzip + base64url-universal output for the byte 0b0001_0010
    let bitstring = Bitstring::from_encoded("H4sIAAAAAAAAAxMCAMWeuyEBAAAA", BitOrder::Lsb0)
        .expect("should rebuild");
    assert_eq!(bitstring.as_bytes(), &[0b0001_0010]);
    assert!(bitstring.get(1).expect("in range"));
    assert!(bitstring.get(4).expect("in range"));
}

#[test]
fn multi_member() {
    let mut compressed = codec::compress(&[0xFF, 0x00]).expect("should compress");
    compressed.extend(codec::compress(&[0x48]).expect("should compress"));

    let bitstring =
        Bitstring::from_compressed(&compressed, BitOrder::Msb0).expect("should rebuild");
    assert_eq!(bitstring.len(), 24);
    assert_eq!(bitstring.as_bytes(), &[0xFF, 0x00, 0x48]);
}

fn trailing_garbage() -> String {
    let mut compressed = codec::compress(&[1]).expect("should compress");
    compressed.extend_from_slice(b"garbage");
    Base64UrlUnpadded::encode_string(&compressed)
}

#[rstest]
#[case::not_base64("not base64!")]
#[case::padded("H4sIAAAAAAAAAxMCAMWeuyEBAAAA==")]
#[case::not_gzip("bm90IGd6aXA")]
#[case::truncated("H4sIAAAAAAAAAxMCAMWe")]
#[case::trailing_garbage(&trailing_garbage())]
fn bad_encoding(#[case] encoded: &str) {
    let err = codec::decode(encoded).expect_err("should fail");
    assert!(matches!(err, Error::Format(_)), "{err}");
    assert_eq!(err.code(), "format_error");
}
