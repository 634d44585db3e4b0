use keccak_variant_lab::sha256;

#[test]
fn fips_short_vectors() {
    let cases: [(&[u8], &str); 2] = [
        (
            b"",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            b"abc",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(hex::encode(sha256(input)), expected, "input {input:?}");
    }
}

#[test]
fn domain_separated_seed_for_plaintext_abc() {
    let mut message = b"KECCAK_VARIANT_MSG_PSJ".to_vec();
    message.extend_from_slice(b"abc");
    let seed = sha256(&message);
    assert_eq!(seed.len(), 32);
}
