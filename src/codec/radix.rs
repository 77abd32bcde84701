//! Arbitrary-precision conversion between base-256 bytes and base58 digits
//!
//! Big-integer conversion drops leading zeros, so the zero run is carried
//! next to the value as an explicit count and restored on the way out.
//!
//! Byte and digit buffers handed out or created here are `Zeroizing`. The
//! `BigUint` inside `ZeroPrefixed` is not: num-bigint has no way to wipe
//! its limbs, so the numeric value lives unwiped until the allocator
//! reuses it.

use super::alphabet::{char_to_digit, digit_to_char, ZERO_DIGIT};
use crate::error::Result;
use num_bigint::BigUint;
use zeroize::Zeroizing;

const BASE: u32 = 58;

/// A big-endian number split into its leading zero digits and its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroPrefixed {
    zeros: usize,
    value: BigUint,
}

impl ZeroPrefixed {
    pub fn from_bytes(bytes: &[u8]) -> ZeroPrefixed {
        let zeros = bytes.iter().take_while(|&&b| b == 0).count();
        ZeroPrefixed {
            zeros,
            value: BigUint::from_bytes_be(&bytes[zeros..]),
        }
    }

    pub fn from_base58(token: &str) -> Result<ZeroPrefixed> {
        let zeros = token.chars().take_while(|&c| c == ZERO_DIGIT).count();
        let mut value = BigUint::default();
        for (position, character) in token.chars().enumerate().skip(zeros) {
            let digit = char_to_digit(character, position)?;
            value = value * BASE + u32::from(digit);
        }
        Ok(ZeroPrefixed { zeros, value })
    }

    pub fn leading_zeros(&self) -> usize {
        self.zeros
    }

    pub fn to_base58(&self) -> String {
        let mut token: String = std::iter::repeat(ZERO_DIGIT).take(self.zeros).collect();
        if !self.is_value_zero() {
            let digits = Zeroizing::new(self.value.to_radix_be(BASE));
            token.extend(digits.iter().map(|&digit| digit_to_char(digit)));
        }
        token
    }

    /// Bytes with the zero run restored
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        if self.is_value_zero() {
            return Zeroizing::new(vec![0u8; self.zeros]);
        }
        let value = Zeroizing::new(self.value.to_bytes_be());
        // Sized up front so no partial copy is left behind by a reallocation
        let mut bytes = Zeroizing::new(Vec::with_capacity(self.zeros + value.len()));
        bytes.resize(self.zeros, 0);
        bytes.extend_from_slice(&value);
        bytes
    }

    fn is_value_zero(&self) -> bool {
        self.value.bits() == 0
    }
}

/// Encode raw bytes as base58, one `'1'` per leading zero byte
pub fn bytes_to_base58(bytes: &[u8]) -> String {
    ZeroPrefixed::from_bytes(bytes).to_base58()
}

/// Decode a base58 string back to raw bytes
pub fn base58_to_bytes(token: &str) -> Result<Zeroizing<Vec<u8>>> {
    Ok(ZeroPrefixed::from_base58(token)?.to_bytes())
}
