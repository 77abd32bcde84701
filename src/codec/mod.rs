//! Base58Check codec engine
//!
//! A token is `base58(version ++ payload ++ checksum)` where the checksum is
//! the first four bytes of a double SHA-256 over `version ++ payload`. Each
//! leading zero byte is written as a literal `'1'` since the big-integer
//! conversion in between would otherwise drop it.
//!
//! The free functions use SHA-256. Build a [`Base58Check`] with
//! [`Base58Check::with_digest`] to plug in another hash.

pub mod alphabet;
pub mod checksum;
pub mod engine;
pub mod radix;

pub use alphabet::{ALPHABET, ZERO_DIGIT};
pub use checksum::{checksum, Digest, Sha256, CHECKSUM_LEN};
pub use engine::{Base58Check, Unpacked};
pub use radix::{base58_to_bytes, bytes_to_base58, ZeroPrefixed};

use crate::error::Result;

pub fn encode(payload: &[u8], version: u8) -> String {
    Base58Check::new().encode(payload, version)
}

pub fn unpack(token: &str) -> Result<Unpacked> {
    Base58Check::new().unpack(token)
}

pub fn decode(token: &str) -> Result<Vec<u8>> {
    Base58Check::new().decode(token)
}

pub fn version_byte(token: &str) -> Result<u8> {
    Base58Check::new().version_byte(token)
}

pub fn is_valid(token: &str) -> bool {
    Base58Check::new().is_valid(token)
}
