use byteorder::{BigEndian, ByteOrder};

#[cfg(any(feature = "alloc", feature = "std", test))]
use alloc::string::String;

use crate::tables::ENCODE_TABLE;
use crate::{Error, LINE_LEN, NEWLINE, PAD_BYTE};

/// Input bytes that encode to exactly one full line.
const LINE_INPUT_LEN: usize = LINE_LEN / 4 * 3;

///Encode arbitrary octets as wrapped base64.
///Returns a String.
///
///# Example
///
///```rust
///let b64 = wrapped_base64::encode(b"hello world").unwrap();
///assert_eq!("aGVsbG8gd29ybGQ=\n", b64);
///```
///
///# Errors
///
///[Error::SizeOverflow] if the encoded length can't be represented.
#[cfg(any(feature = "alloc", feature = "std", test))]
pub fn encode<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<String, Error> {
    let mut buf = String::new();

    encode_string(input, &mut buf).map(|_| buf)
}

///Encode arbitrary octets as wrapped base64.
///Appends to the supplied output buffer, growing it as needed.
///
///# Example
///
///```rust
///let mut buf = String::from("-----BEGIN DATA-----\n");
///wrapped_base64::encode_string(b"hello world", &mut buf).unwrap();
///buf.push_str("-----END DATA-----\n");
///
///assert_eq!("-----BEGIN DATA-----\naGVsbG8gd29ybGQ=\n-----END DATA-----\n", buf);
///```
#[cfg(any(feature = "alloc", feature = "std", test))]
pub fn encode_string<T: ?Sized + AsRef<[u8]>>(
    input: &T,
    output_buf: &mut String,
) -> Result<(), Error> {
    let input_bytes = input.as_ref();

    let encoded_len = encoded_len(input_bytes.len()).ok_or(Error::SizeOverflow)?;
    let mut buf = alloc::vec![0; encoded_len];

    let bytes_written = encode_slice(input_bytes, &mut buf[..])?;
    debug_assert_eq!(encoded_len, bytes_written);

    output_buf.push_str(core::str::from_utf8(&buf).expect("base64 is always valid UTF-8"));

    Ok(())
}

/// Encode arbitrary octets as wrapped base64 into the supplied slice.
///
/// Returns the number of bytes written, which is always [encoded_len] of the input length.
/// Use [encoded_len] to size the slice ahead of time.
///
/// # Errors
///
/// - [Error::BufferTooSmall] if `output` is shorter than the encoded length. Nothing is written.
/// - [Error::SizeOverflow] if the encoded length can't be represented. Nothing is written.
pub fn encode_slice<T: ?Sized + AsRef<[u8]>>(
    input: &T,
    output: &mut [u8],
) -> Result<usize, Error> {
    let input_bytes = input.as_ref();

    let required = encoded_len(input_bytes.len()).ok_or(Error::SizeOverflow)?;
    if output.len() < required {
        return Err(Error::BufferTooSmall { required });
    }

    let mut output_index = 0;
    // every line but the last is exactly LINE_LEN symbols, and all get a newline
    for line in input_bytes.chunks(LINE_INPUT_LEN) {
        output_index += encode_line(line, &mut output[output_index..]);
        output[output_index] = NEWLINE;
        output_index += 1;
    }

    debug_assert_eq!(required, output_index);

    Ok(output_index)
}

/// Calculate the wrapped base64 encoded length for a given input length, including padding and
/// newlines.
///
/// Returns `None` if the encoded length can't be represented in `usize`.
pub fn encoded_len(bytes_len: usize) -> Option<usize> {
    let rem = bytes_len % 3;

    let complete_input_chunks = bytes_len / 3;
    let complete_chunk_output = complete_input_chunks.checked_mul(4)?;
    let data_len = if rem > 0 {
        complete_chunk_output.checked_add(4)?
    } else {
        complete_chunk_output
    };

    // a partial last line still gets its own newline
    let newlines = data_len / LINE_LEN + usize::from(data_len % LINE_LEN != 0);

    data_len.checked_add(newlines)
}

/// Encode at most [LINE_INPUT_LEN] bytes, with padding but without the newline.
///
/// Returns the number of bytes written.
fn encode_line(input: &[u8], output: &mut [u8]) -> usize {
    const LOW_SIX_BITS: u32 = 0x3F;

    debug_assert!(input.len() <= LINE_INPUT_LEN);

    let mut output_index = 0;

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        // populate low 24 bits from 3 bytes
        let chunk_int = BigEndian::read_u24(chunk);

        output[output_index] = ENCODE_TABLE[(chunk_int >> 18) as usize];
        output[output_index + 1] = ENCODE_TABLE[((chunk_int >> 12) & LOW_SIX_BITS) as usize];
        output[output_index + 2] = ENCODE_TABLE[((chunk_int >> 6) & LOW_SIX_BITS) as usize];
        output[output_index + 3] = ENCODE_TABLE[(chunk_int & LOW_SIX_BITS) as usize];

        output_index += 4;
    }

    match *chunks.remainder() {
        [byte] => {
            output[output_index] = ENCODE_TABLE[(byte >> 2) as usize];
            output[output_index + 1] = ENCODE_TABLE[((byte << 4) & 0x3F) as usize];
            output_index += 2;
        }
        [first, second] => {
            // high six bits of first
            output[output_index] = ENCODE_TABLE[(first >> 2) as usize];
            // bottom 2 bits of first, high 4 bits of second
            output[output_index + 1] = ENCODE_TABLE[((first << 4 | second >> 4) & 0x3F) as usize];
            // bottom 4 bits of second, with the 2 bottom bits as zero
            output[output_index + 2] = ENCODE_TABLE[((second << 2) & 0x3F) as usize];
            output_index += 3;
        }
        _ => {}
    }

    output_index + add_padding(input.len(), &mut output[output_index..])
}

/// Write padding characters.
/// `output` is the slice where padding should be written, of length at least 2.
///
/// Returns the number of padding bytes written.
pub(crate) fn add_padding(input_len: usize, output: &mut [u8]) -> usize {
    let rem = input_len % 3;
    let mut bytes_written = 0;
    for _ in 0..((3 - rem) % 3) {
        output[bytes_written] = PAD_BYTE;
        bytes_written += 1;
    }

    bytes_written
}
