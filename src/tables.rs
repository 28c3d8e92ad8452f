//! Compile-time lookup tables for the standard alphabet.

use crate::PAD_BYTE;

/// Marks bytes that are neither alphabet symbols nor padding.
pub(crate) const INVALID_VALUE: u8 = 255;
/// Marks the padding byte. Outside the 6-bit range so it can't collide with a symbol value.
pub(crate) const PAD_VALUE: u8 = 64;

/// The standard alphabet (uses `+` and `/`).
///
/// See [RFC 4648](https://tools.ietf.org/html/rfc4648#section-4).
pub const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// 6-bit value -> printable symbol
pub(crate) const ENCODE_TABLE: [u8; 64] = encode_table(STANDARD_ALPHABET);

/// printable symbol -> 6-bit value, [PAD_VALUE], or [INVALID_VALUE]
pub(crate) const DECODE_TABLE: [u8; 256] = decode_table(STANDARD_ALPHABET);

const fn encode_table(symbols: &[u8; 64]) -> [u8; 64] {
    // a way to copy that's allowed in const fn
    let mut encode_table = [0_u8; 64];
    let mut index = 0;
    while index < 64 {
        encode_table[index] = symbols[index];
        index += 1;
    }

    encode_table
}

/// Returns a table mapping base64 bytes as the lookup index to either:
/// - [INVALID_VALUE] for bytes that aren't members of the alphabet
/// - [PAD_VALUE] for the padding byte
/// - a byte whose lower 6 bits are the value that was encoded into the index byte
const fn decode_table(symbols: &[u8; 64]) -> [u8; 256] {
    let mut decode_table = [INVALID_VALUE; 256];

    // Since the table is full of `INVALID_VALUE` already, we only need to overwrite
    // the parts that are valid.
    let mut index = 0;
    while index < 64 {
        // The index in the alphabet is the 6-bit value we care about.
        // Since the index is in 0-63, it is safe to cast to u8.
        decode_table[symbols[index] as usize] = index as u8;
        index += 1;
    }

    decode_table[PAD_BYTE as usize] = PAD_VALUE;

    decode_table
}
