//! RFC 1521 base64 with line wrapping.
//!
//! Encoded output uses the standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding, and
//! inserts a newline after every 64 characters. Non-empty output always ends with exactly one
//! newline. This is the layout of PEM and MIME bodies.
//!
//! The decoder accepts that layout, and also tolerates newlines anywhere else in the input,
//! since real-world input is often re-wrapped or concatenated. Any other byte outside the
//! alphabet is an error.
//!
//! # Allocation-free use
//!
//! Each direction has a size query and a slice writer, so callers can size their own buffers:
//!
//! ```
//! let input = b"hello world";
//!
//! let mut encoded = [0_u8; 32];
//! let len = wrapped_base64::encoded_len(input.len()).unwrap();
//! assert_eq!(len, wrapped_base64::encode_slice(input, &mut encoded).unwrap());
//! assert_eq!(b"aGVsbG8gd29ybGQ=\n", &encoded[..len]);
//!
//! let mut decoded = [0_u8; 16];
//! assert_eq!(11, wrapped_base64::decoded_len(&encoded[..len]).unwrap());
//! assert_eq!(11, wrapped_base64::decode_slice(&encoded[..len], &mut decoded).unwrap());
//! assert_eq!(input, &decoded[..11]);
//! ```
//!
//! A slice that is too short is reported with the size that would have been needed, and is
//! left untouched:
//!
//! ```
//! use wrapped_base64::Error;
//!
//! let mut tiny = [0_u8; 1];
//! assert_eq!(
//!     Err(Error::BufferTooSmall { required: 5 }),
//!     wrapped_base64::encode_slice(&[0x01_u8], &mut tiny)
//! );
//! ```
//!
//! # `String` and `Vec`
//!
//! With the `alloc` feature (enabled by `std`, which is on by default):
//!
//! ```
//! let encoded = wrapped_base64::encode(&[0x01_u8, 0x02, 0x03]).unwrap();
//! assert_eq!("AQID\n", encoded);
//!
//! assert_eq!(vec![0x01_u8], wrapped_base64::decode("A\nQ\n=\n=\n").unwrap());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![forbid(unsafe_code)]

#[cfg(any(feature = "alloc", feature = "std", test))]
extern crate alloc;

mod decode;
mod encode;
mod error;
pub mod tables;


#[cfg(any(feature = "alloc", feature = "std", test))]
pub use crate::decode::{decode, decode_vec};
pub use crate::decode::{decode_slice, decoded_len};
#[cfg(any(feature = "alloc", feature = "std", test))]
pub use crate::encode::{encode, encode_string};
pub use crate::encode::{encode_slice, encoded_len};
pub use crate::error::{Error, ERR_BUFFER_TOO_SMALL, ERR_INVALID_CHARACTER};

/// The padding byte.
pub const PAD_BYTE: u8 = b'=';

/// The line separator written by the encoder and skipped by the decoder.
pub const NEWLINE: u8 = b'\n';

/// Encoded characters per line, not counting the newline.
pub const LINE_LEN: usize = 64;
