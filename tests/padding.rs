use keccak_variant_lab::{apply_sha3_padding, init_state_from_message, Error};

#[test]
fn padded_length_is_always_a_multiple_of_the_rate() {
    const RATE: usize = 136;
    for len in [0usize, 1, 135, 136, 137, 271, 272, 300] {
        let msg = vec![0u8; len];
        let mut buf = vec![0u8; len + RATE];
        let padded_len = apply_sha3_padding(&msg, &mut buf).unwrap();
        assert_eq!(padded_len % RATE, 0);
        assert!(padded_len >= len + 1);
    }
}

#[test]
fn undersized_buffer_reports_the_exact_shortfall() {
    let msg = vec![0u8; 50];
    let mut buf = [0u8; 8];
    match apply_sha3_padding(&msg, &mut buf) {
        Err(Error::PaddingBufferTooSmall { needed, available }) => {
            assert_eq!(needed, 136);
            assert_eq!(available, 8);
        }
        other => panic!("expected PaddingBufferTooSmall, got {other:?}"),
    }
}

#[test]
fn absorbed_state_is_independent_of_trailing_buffer_garbage() {
    let state_a = init_state_from_message(b"the quick brown fox").unwrap();
    let state_b = init_state_from_message(b"the quick brown fox").unwrap();
    assert_eq!(state_a, state_b);
}

#[test]
fn one_byte_messages_differ_in_their_absorbed_state() {
    let state_a = init_state_from_message(b"a").unwrap();
    let state_b = init_state_from_message(b"b").unwrap();
    assert_ne!(state_a, state_b);
}
