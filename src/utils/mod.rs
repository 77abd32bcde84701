//! Hashing and hex helpers shared by the codec and the CLI

pub mod crypto;

pub use crypto::{hex_decode, hex_encode, sha256_digest};
