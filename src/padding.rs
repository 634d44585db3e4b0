//! SHA-3 pad10*1 padding and single-block rate absorption.
use crate::error::Error;

/// SHA3-256 rate in bytes (1088 bits).
pub const RATE_BYTES: usize = 136;

/// Apply SHA-3 pad10*1 with domain byte `0x06`: copy `message`, set the byte
/// right after it to `0x06`, zero-fill, then OR `0x80` into the final byte of
/// the last rate block. The padded length reserves at least one byte past
/// the message and rounds up to the next multiple of [`RATE_BYTES`]. Returns
/// the padded length.
///
/// When the domain byte and the final-bit byte land on the same byte (the
/// message fills every byte but the last of a block), that byte becomes
/// `0x06 | 0x80 = 0x86`.
pub fn apply_sha3_padding(message: &[u8], out_buf: &mut [u8]) -> Result<usize, Error> {
    let n = message.len();
    let padded_len = (n / RATE_BYTES + 1) * RATE_BYTES;

    if out_buf.len() < padded_len {
        return Err(Error::PaddingBufferTooSmall {
            needed: padded_len,
            available: out_buf.len(),
        });
    }

    out_buf[..n].copy_from_slice(message);
    out_buf[n..padded_len].fill(0);
    out_buf[n] |= 0x06;
    out_buf[padded_len - 1] |= 0x80;

    Ok(padded_len)
}

/// Initialize a 25-lane Keccak state from a binary message: pad it to one
/// (or more, though only the first is absorbed) rate block and XOR the
/// first [`RATE_BYTES`] bytes into lanes `0..17`, little-endian per lane.
/// Lanes `17..25` (the capacity) stay zero.
pub fn init_state_from_message(message: &[u8]) -> Result<[u64; 25], Error> {
    let mut buf = vec![0u8; message.len() + RATE_BYTES];
    let padded_len = apply_sha3_padding(message, &mut buf)?;
    let block = &buf[..padded_len.min(RATE_BYTES)];

    let mut state = [0u64; 25];
    for i in 0..17 {
        let lane_bytes: [u8; 8] = block[8 * i..8 * i + 8].try_into().expect("slice has length 8");
        state[i] = u64::from_le_bytes(lane_bytes);
    }
    Ok(state)
}

/// Initialize state from a UTF-8 plaintext message (bytes of the string).
pub fn init_state_from_plaintext(plaintext: &str) -> Result<[u64; 25], Error> {
    init_state_from_message(plaintext.as_bytes())
}
