//! Published test vectors for every registered algorithm.
//!
//! Each vector is checked through the public [`Checksum`] surface so the
//! registry routing, the accumulator and the hex rendering are exercised
//! together.

use checksums::{Checksum, Family, available_algorithms};

// ============================================================================
// Helper Functions
// ============================================================================

fn hex_of(name: &str, input: &[u8]) -> String {
    let mut sum = Checksum::new(name).expect("registered algorithm");
    sum.update(input);
    sum.to_hex()
}

// ============================================================================
// Section 1: Empty input
// ============================================================================

#[test]
fn empty_input_digests_match_published_values() {
    let vectors = [
        ("md4", "31d6cfe0d16ae931b73c59d7e0c089c0"),
        ("md5", "d41d8cd98f00b204e9800998ecf8427e"),
        ("sha1", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (
            "sha224",
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
        ),
        (
            "sha256",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            "sha3_256",
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        ),
        (
            "blake2s",
            "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9",
        ),
        ("ripemd160", "9c1185a5c5e9fc54612808977ee8f548b2258d31"),
        (
            "sm3",
            "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b",
        ),
        ("xxh64", "ef46db3751d8e999"),
        ("crc32", "00000000"),
        ("adler32", "00000000"),
        (
            "shake_128",
            "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
        ),
        (
            "shake_256",
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
        ),
    ];

    for (name, expected) in vectors {
        assert_eq!(hex_of(name, b""), expected, "{name} of empty input");
    }
}

// ============================================================================
// Section 2: "abc"
// ============================================================================

#[test]
fn abc_digests_match_published_values() {
    let vectors = [
        ("md4", "a448017aaf21d8525fc10ae87aa6729d"),
        ("md5", "900150983cd24fb0d6963f7d28e17f72"),
        ("sha1", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            "sha256",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            "sha512",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        ("ripemd160", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
        ("adler32", "024a0126"),
        ("crc32", "352441c2"),
    ];

    for (name, expected) in vectors {
        assert_eq!(hex_of(name, b"abc"), expected, "{name} of \"abc\"");
    }
}

#[test]
fn crc32_check_value() {
    let mut crc = Checksum::new("crc32").unwrap();
    crc.update(b"123456789");
    assert_eq!(crc.to_int(), Some(0xcbf4_3926));
    assert_eq!(crc.to_string(), "0xcbf43926");
}

// ============================================================================
// Section 3: Registry coverage
// ============================================================================

#[test]
fn every_registered_algorithm_produces_its_declared_length() {
    for name in available_algorithms() {
        let mut sum = Checksum::new(name).unwrap();
        sum.update(b"registry coverage");
        let bytes = sum.to_bytes();
        assert_eq!(bytes.len(), sum.output_length(), "{name}");
        match sum.algorithm().output_len() {
            Some(fixed) => assert_eq!(bytes.len(), fixed, "{name}"),
            None => assert_eq!(bytes.len(), checksums::DEFAULT_OUTPUT_LENGTH, "{name}"),
        }
    }
}

#[test]
fn rolling_family_is_exactly_crc32_and_adler32() {
    let rolling: Vec<&str> = available_algorithms()
        .into_iter()
        .filter(|name| checksums::resolve(name).unwrap().family() == Family::Rolling)
        .collect();
    assert_eq!(rolling, ["adler32", "crc32"]);
}
