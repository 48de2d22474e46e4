//! scrypt known-answer and property tests.
//!
//! The known-answer vectors are from RFC 7914 section 12.

use hex_literal::hex;
use scrypt::{derive_key, scrypt, InvalidParams, Params};

struct Vector {
    password: &'static [u8],
    salt: &'static [u8],
    n: u32,
    r: u32,
    p: u32,
    expected: [u8; 64],
}

const VECTORS: &[Vector] = &[
    Vector {
        password: b"",
        salt: b"",
        n: 16,
        r: 1,
        p: 1,
        expected: hex!(
            "77d6576238657b203b19ca42c18a0497"
            "f16b4844e3074ae8dfdffa3fede21442"
            "fcd0069ded0948f8326a753a0fc81f17"
            "e8d3e0fb2e0d3628cf35e20c38d18906"
        ),
    },
    Vector {
        password: b"password",
        salt: b"NaCl",
        n: 1024,
        r: 8,
        p: 16,
        expected: hex!(
            "fdbabe1c9d3472007856e7190d01e9fe"
            "7c6ad7cbc8237830e77376634b373162"
            "2eaf30d92e22a3886ff109279d9830da"
            "c727afb94a83ee6d8360cbdfa2cc0640"
        ),
    },
    Vector {
        password: b"pleaseletmein",
        salt: b"SodiumChloride",
        n: 16384,
        r: 8,
        p: 1,
        expected: hex!(
            "7023bdcb3afd7348461c06cd81fd38eb"
            "fda8fbba904f8e3ea9b543f6545da1f2"
            "d5432955613f0fcf62d49705242a9af9"
            "e61e85dc0d651e40dfcf017b45575887"
        ),
    },
];

#[test]
fn rfc7914_vectors() {
    for v in VECTORS {
        let params = Params::new(v.n, v.r, v.p).unwrap();
        let key = derive_key(v.password, v.salt, &params, 64).unwrap();
        assert_eq!(key, v.expected, "N={} r={} p={}", v.n, v.r, v.p);
    }
}

/// The fourth RFC 7914 vector needs a gibibyte of scratch memory and a
/// noticeable amount of CPU time, so it only runs with `--ignored`.
#[test]
#[ignore]
fn rfc7914_vector_n_2_20() {
    let params = Params::new(1 << 20, 8, 1).unwrap();
    let key = derive_key(b"pleaseletmein", b"SodiumChloride", &params, 64).unwrap();
    assert_eq!(
        key,
        hex!(
            "2101cb9b6a511aaeaddbbe09cf70f881"
            "ec568d574a2ffd4dabe5ee9820adaa47"
            "8e56fd8f4ba5d09ffa1c6d927c40f4c3"
            "37304049e8a952fbcbf45c6fa77a41a4"
        )
    );
}

#[test]
fn fills_the_caller_buffer_exactly() {
    let params = Params::new(16, 1, 1).unwrap();
    let mut out = [0u8; 64];
    scrypt(b"", b"", &params, &mut out).unwrap();
    assert_eq!(out, VECTORS[0].expected);
}

#[test]
fn output_has_the_requested_length() {
    let params = Params::new(16, 1, 1).unwrap();
    for key_len in [0, 1, 16, 31, 32, 33, 64, 100] {
        let key = derive_key(b"password", b"salt", &params, key_len).unwrap();
        assert_eq!(key.len(), key_len);
    }
}

#[test]
fn truncation_is_a_prefix() {
    // PBKDF2 output is a stream, so a shorter key is a prefix of a
    // longer one derived from the same inputs.
    let params = Params::new(16, 2, 2).unwrap();
    let long = derive_key(b"password", b"salt", &params, 100).unwrap();
    let short = derive_key(b"password", b"salt", &params, 33).unwrap();
    assert_eq!(short.as_slice(), &long[..33]);
}

#[test]
fn deterministic() {
    let params = Params::new(64, 2, 3).unwrap();
    let a = derive_key(b"secret", b"pepper", &params, 48).unwrap();
    let b = derive_key(b"secret", b"pepper", &params, 48).unwrap();
    assert_eq!(a, b);
}

#[test]
fn inputs_all_matter() {
    let params = Params::new(16, 1, 1).unwrap();
    let base = derive_key(b"password", b"salt", &params, 32).unwrap();

    let other_pw = derive_key(b"passwore", b"salt", &params, 32).unwrap();
    let other_salt = derive_key(b"password", b"tlas", &params, 32).unwrap();
    let other_n = derive_key(
        b"password",
        b"salt",
        &Params::new(32, 1, 1).unwrap(),
        32,
    )
    .unwrap();

    assert_ne!(base, other_pw);
    assert_ne!(base, other_salt);
    assert_ne!(base, other_n);
}

#[test]
fn rejects_unsound_parameters() {
    assert_eq!(Params::new(3, 1, 1), Err(InvalidParams::CostN));
    assert_eq!(Params::new(2, 1 << 28, 4), Err(InvalidParams::TooLarge));
}
