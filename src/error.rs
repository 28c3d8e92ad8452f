use core::fmt;

#[cfg(any(feature = "std", test))]
use std::error;

/// Errors that can occur while encoding or decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The output slice can't hold the result. Nothing was written.
    BufferTooSmall {
        /// The output length that would have been needed.
        required: usize,
    },
    /// An invalid byte was found in the input, or padding was found somewhere other than the
    /// end of the final group. The offset and offending byte are provided.
    InvalidCharacter {
        /// Offset of the byte in the input, newlines included.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The number of non-newline characters is not a multiple of 4.
    InvalidLength,
    /// The required output length cannot be represented as a `usize`.
    SizeOverflow,
}

/// mbed TLS `MBEDTLS_ERR_BASE64_BUFFER_TOO_SMALL`
pub const ERR_BUFFER_TOO_SMALL: i32 = -0x002A;
/// mbed TLS `MBEDTLS_ERR_BASE64_INVALID_CHARACTER`
pub const ERR_INVALID_CHARACTER: i32 = -0x002C;

impl Error {
    /// The status code the equivalent mbed TLS call would return.
    ///
    /// An unrepresentable size is reported as a buffer that is too small, since the C API has
    /// no separate code for it.
    pub fn code(&self) -> i32 {
        match *self {
            Error::BufferTooSmall { .. } | Error::SizeOverflow => ERR_BUFFER_TOO_SMALL,
            Error::InvalidCharacter { .. } | Error::InvalidLength => ERR_INVALID_CHARACTER,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall { required } => {
                write!(f, "Output buffer too small, {} bytes required.", required)
            }
            Error::InvalidCharacter { offset, byte } => {
                write!(f, "Invalid byte {}, offset {}.", byte, offset)
            }
            Error::InvalidLength => write!(f, "Encoded text must be a multiple of 4 symbols."),
            Error::SizeOverflow => write!(f, "Output length overflows usize."),
        }
    }
}

#[cfg(any(feature = "std", test))]
impl error::Error for Error {}
