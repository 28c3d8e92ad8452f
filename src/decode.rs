use byteorder::{BigEndian, ByteOrder};

#[cfg(any(feature = "alloc", feature = "std", test))]
use alloc::vec::Vec;

use crate::tables::{DECODE_TABLE, INVALID_VALUE, PAD_VALUE};
use crate::{Error, NEWLINE, PAD_BYTE};

// symbols per group, and the bytes a full group decodes to
const INPUT_CHUNK_LEN: usize = 4;
const DECODED_CHUNK_LEN: usize = 3;

///Decode wrapped base64 as octets.
///Returns a Result containing a Vec<u8>.
///
///Newlines anywhere in the input are ignored.
///
///# Example
///
///```rust
///let bytes = wrapped_base64::decode("aGVsbG8g\nd29ybGQ=\n").unwrap();
///assert_eq!(b"hello world", &bytes[..]);
///```
#[cfg(any(feature = "alloc", feature = "std", test))]
pub fn decode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::<u8>::new();

    decode_vec(input, &mut buffer).map(|_| buffer)
}

///Decode wrapped base64 as octets.
///Appends to the supplied buffer to avoid allocation.
///
///If the input is invalid, the buffer is left as it was.
///
///# Example
///
///```rust
///let mut buffer = Vec::<u8>::new();
///wrapped_base64::decode_vec("Zm9v\n", &mut buffer).unwrap();
///wrapped_base64::decode_vec("YmFy\n", &mut buffer).unwrap();
///assert_eq!(b"foobar", &buffer[..]);
///```
#[cfg(any(feature = "alloc", feature = "std", test))]
pub fn decode_vec<T: ?Sized + AsRef<[u8]>>(
    input: &T,
    buffer: &mut Vec<u8>,
) -> Result<(), Error> {
    let input_bytes = input.as_ref();

    let decoded_len = decoded_len(input_bytes)?;

    let starting_output_len = buffer.len();
    let total_len = starting_output_len
        .checked_add(decoded_len)
        .ok_or(Error::SizeOverflow)?;
    buffer.resize(total_len, 0);

    let bytes_written = decode_validated(input_bytes, &mut buffer[starting_output_len..]);
    debug_assert_eq!(decoded_len, bytes_written);

    Ok(())
}

/// Decode the input into the provided output slice.
///
/// Returns the number of bytes written, which is always [decoded_len] of the input. Nothing
/// past that is written.
///
/// # Errors
///
/// - [Error::InvalidCharacter] or [Error::InvalidLength] if the input is malformed. These are
///   detected before anything is written.
/// - [Error::BufferTooSmall] if `output` is shorter than the decoded length. Nothing is written.
pub fn decode_slice<T: ?Sized + AsRef<[u8]>>(
    input: &T,
    output: &mut [u8],
) -> Result<usize, Error> {
    let input_bytes = input.as_ref();

    let required = decoded_len(input_bytes)?;
    if output.len() < required {
        return Err(Error::BufferTooSmall { required });
    }

    let bytes_written = decode_validated(input_bytes, &mut output[..required]);
    debug_assert_eq!(required, bytes_written);

    Ok(bytes_written)
}

/// Calculate the exact decoded length of the input.
///
/// The whole input is validated to find the padding, so this reports the same malformed-input
/// errors that decoding would.
///
/// # Errors
///
/// - [Error::InvalidCharacter] for the first byte that isn't a newline, an alphabet symbol, or
///   correctly placed padding. Padding is only allowed as the last one or two symbols of the
///   final group. A symbol after padding is reported at the first padding byte.
/// - [Error::InvalidLength] if the number of non-newline characters isn't a multiple of 4.
pub fn decoded_len<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<usize, Error> {
    let mut symbols = 0_usize;
    let mut padding_bytes = 0_usize;
    let mut first_padding_index = 0_usize;

    for (index, &byte) in input.as_ref().iter().enumerate() {
        if byte == NEWLINE {
            continue;
        }

        match DECODE_TABLE[byte as usize] {
            INVALID_VALUE => return Err(Error::InvalidCharacter { offset: index, byte }),
            PAD_VALUE => {
                // There can be bad padding in a few ways:
                // 1 - Padding with non-padding characters after it
                // 2 - Padding after zero or one non-padding characters before it
                //     in the current quad.
                // 3 - More than two characters of padding. Any third one lands in the first
                //     position of the next quad, which is caught by #2.
                if (symbols + padding_bytes) % INPUT_CHUNK_LEN < 2 {
                    // Check for case #2.
                    let offset = if padding_bytes > 0 {
                        first_padding_index
                    } else {
                        index
                    };
                    return Err(Error::InvalidCharacter {
                        offset,
                        byte: PAD_BYTE,
                    });
                }

                if padding_bytes == 0 {
                    first_padding_index = index;
                }

                padding_bytes += 1;
            }
            _ => {
                // Check for case #1. Report error as first erroneous padding.
                if padding_bytes > 0 {
                    return Err(Error::InvalidCharacter {
                        offset: first_padding_index,
                        byte: PAD_BYTE,
                    });
                }

                symbols += 1;
            }
        }
    }

    // both counts are bounded by the input length, so this can't overflow
    let quad_symbols = symbols + padding_bytes;
    if quad_symbols % INPUT_CHUNK_LEN != 0 {
        return Err(Error::InvalidLength);
    }

    Ok(quad_symbols / INPUT_CHUNK_LEN * DECODED_CHUNK_LEN - padding_bytes)
}

/// Decode input that [decoded_len] has already accepted.
///
/// `output` must hold at least the decoded length. Returns the number of bytes written.
fn decode_validated(input: &[u8], output: &mut [u8]) -> usize {
    let mut accum: u32 = 0;
    let mut morsels_in_accum = 0;
    let mut output_index = 0;

    for &byte in input {
        if byte == NEWLINE {
            continue;
        }

        let morsel = DECODE_TABLE[byte as usize];
        if morsel == PAD_VALUE {
            // padding only ever trails the input
            break;
        }

        accum = accum << 6 | u32::from(morsel);
        morsels_in_accum += 1;

        if morsels_in_accum == INPUT_CHUNK_LEN {
            BigEndian::write_u24(
                &mut output[output_index..(output_index + DECODED_CHUNK_LEN)],
                accum,
            );
            output_index += DECODED_CHUNK_LEN;

            accum = 0;
            morsels_in_accum = 0;
        }
    }

    // a padded final quad; any bits below the last whole byte are dropped
    match morsels_in_accum {
        0 => {}
        2 => {
            output[output_index] = (accum >> 4) as u8;
            output_index += 1;
        }
        3 => {
            BigEndian::write_u16(
                &mut output[output_index..(output_index + 2)],
                (accum >> 2) as u16,
            );
            output_index += 2;
        }
        _ => unreachable!("Impossible: validated input has only 2 or 3 symbols before padding"),
    }

    output_index
}
