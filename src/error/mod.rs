//! Error handling for the codec
//!
//! The codec itself only ever fails with `ChecksumMismatch`, `InvalidCharacter`
//! or `TooShort`. The remaining variants belong to the CLI and config layers.

use std::fmt;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Checksum embedded in the token does not match the recomputed one
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
    /// Character outside the base58 alphabet
    InvalidCharacter { character: char, position: usize },
    /// Decoded buffer cannot hold a version byte and a checksum
    TooShort { length: usize },
    /// Malformed hex input
    InvalidHex(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl CodecError {
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, CodecError::ChecksumMismatch { .. })
    }

    pub fn is_invalid_character(&self) -> bool {
        matches!(self, CodecError::InvalidCharacter { .. })
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::ChecksumMismatch { expected, actual } => write!(
                f,
                "Checksum mismatch: expected {}, found {}",
                data_encoding::HEXLOWER.encode(expected),
                data_encoding::HEXLOWER.encode(actual)
            ),
            CodecError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid base58 character {character:?} at position {position}"
            ),
            CodecError::TooShort { length } => write!(
                f,
                "Decoded value too short: {length} bytes, need at least 5"
            ),
            CodecError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            CodecError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CodecError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::Config(err.to_string())
    }
}

impl From<data_encoding::DecodeError> for CodecError {
    fn from(err: data_encoding::DecodeError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}
