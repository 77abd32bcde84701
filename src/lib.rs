//! # b58check - Base58Check encoding
//!
//! Turns a byte payload plus a one-byte version tag into a short text token
//! with a built-in checksum, and back. This is the encoding under Bitcoin
//! style addresses and WIF private keys.
//!
//! ## Layout
//! - `codec/`: the encoder and decoder (alphabet, radix conversion, checksum)
//! - `versions/`: version bytes for common networks
//! - `error/`: the error type shared by everything
//! - `config/`: settings for the command-line tool
//! - `cli/`: argument parsing for the command-line tool
//! - `utils/`: SHA-256 and hex helpers
//!
//! ## Example
//! ```
//! let token = b58check::encode(&[0u8; 20], 0);
//! assert_eq!(token, "1111111111111111111114oLvT2");
//! assert_eq!(b58check::decode(&token).unwrap(), vec![0u8; 20]);
//! assert!(b58check::is_valid(&token));
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod utils;
pub mod versions;

pub use codec::{
    decode, encode, is_valid, unpack, version_byte, Base58Check, Digest, Sha256, Unpacked,
    ALPHABET, CHECKSUM_LEN, ZERO_DIGIT,
};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{CodecError, Result};
pub use versions::{Network, TokenKind};
