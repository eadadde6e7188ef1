//! tests/extract_tests.rs
//! Trailing hash segment: borrowed extraction and fixed-size decoding

mod common;

use argon2_params::{decode_hash, extract_hash, Argon2Params, ParamsError, HASH_LEN};
use common::SAMPLE_HASH_STRING;

/// Bytes 0x00..=0x1f, unpadded base64.
const COUNTING_HASH_B64: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

fn counting_hash() -> [u8; HASH_LEN] {
    core::array::from_fn(|i| i as u8)
}

fn full_hash_string(segment: &str) -> String {
    format!("$argon2id$v=19$m=65536,t=3,p=4$AAECAwQFBgcICQoLDA0ODw${segment}")
}

#[test]
fn extracts_literal_example() {
    let segment = extract_hash(SAMPLE_HASH_STRING).unwrap();
    assert_eq!(segment, b"aGFzaGRhdGExMjM0NTY3ODkwMTIzNDU2");
}

#[test]
fn extracted_view_borrows_input() {
    let segment = extract_hash(SAMPLE_HASH_STRING).unwrap();
    let start = SAMPLE_HASH_STRING.len() - segment.len();
    assert!(std::ptr::eq(segment.as_ptr(), SAMPLE_HASH_STRING[start..].as_ptr()));
}

#[test]
fn extract_ignores_trailing_nul() {
    let mut with_nul = SAMPLE_HASH_STRING.to_vec();
    with_nul.push(0);
    assert_eq!(
        extract_hash(&with_nul).unwrap(),
        b"aGFzaGRhdGExMjM0NTY3ODkwMTIzNDU2"
    );
}

#[test]
fn extract_without_delimiter_is_decode_error() {
    assert!(matches!(
        extract_hash(b"aGFzaGRhdGExMjM0NTY3ODkwMTIzNDU2"),
        Err(ParamsError::Decode(_))
    ));
}

#[test]
fn decode_hash_reproduces_known_pattern() {
    let encoded = full_hash_string(COUNTING_HASH_B64);
    let mut out = [0u8; HASH_LEN];
    decode_hash(encoded.as_bytes(), &mut out).unwrap();
    assert_eq!(out, counting_hash());
}

#[test]
fn decode_hash_accepts_padded_segment() {
    let encoded = full_hash_string(&format!("{COUNTING_HASH_B64}="));
    let mut out = [0u8; HASH_LEN];
    decode_hash(encoded.as_bytes(), &mut out).unwrap();
    assert_eq!(out, counting_hash());
}

#[test]
fn decode_hash_rejects_wrong_buffer_sizes() {
    let encoded = full_hash_string(COUNTING_HASH_B64);
    for size in [0, 31, 33, 64] {
        let mut out = vec![0u8; size];
        assert_eq!(
            decode_hash(encoded.as_bytes(), &mut out),
            Err(ParamsError::LengthMismatch {
                expected: HASH_LEN,
                actual: size
            })
        );
    }
}

#[test]
fn decode_hash_rejects_wrong_payload_length() {
    // The literal example's segment is only 24 bytes.
    let mut out = [0u8; HASH_LEN];
    assert!(matches!(
        decode_hash(SAMPLE_HASH_STRING, &mut out),
        Err(ParamsError::Decode(_))
    ));

    let long = full_hash_string(&format!("{COUNTING_HASH_B64}AAAA"));
    assert!(matches!(
        decode_hash(long.as_bytes(), &mut out),
        Err(ParamsError::Decode(_))
    ));
}

#[test]
fn decode_hash_rejects_bad_alphabet() {
    let bad = full_hash_string(&COUNTING_HASH_B64.replace('A', "*"));
    let mut out = [0u8; HASH_LEN];
    assert!(matches!(
        decode_hash(bad.as_bytes(), &mut out),
        Err(ParamsError::Decode(_))
    ));
}

#[test]
fn params_prefix_and_hash_segment_come_from_the_same_string() {
    let encoded = full_hash_string(COUNTING_HASH_B64);
    let params = Argon2Params::from_encoded_hash(encoded.as_bytes()).unwrap();
    assert_eq!(params.salt, common::COUNTING_SALT);
    assert_eq!(params.memory_cost, 65_536);

    let mut out = [0u8; HASH_LEN];
    decode_hash(encoded.as_bytes(), &mut out).unwrap();
    assert_eq!(out, counting_hash());
}
