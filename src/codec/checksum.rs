//! Double-digest checksum framing

use crate::utils::sha256_digest;

pub const CHECKSUM_LEN: usize = 4;

/// Hash primitive the checksum is derived from. Implementations must be
/// deterministic and return at least `CHECKSUM_LEN` bytes.
pub trait Digest {
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// SHA-256, the digest used by Bitcoin-style addresses and WIF keys
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl Digest for Sha256 {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        sha256_digest(data)
    }
}

/// First four bytes of `digest(digest(framed))`
pub fn checksum<D: Digest + ?Sized>(digest: &D, framed: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = digest.digest(framed);
    let second = digest.digest(&first);
    let mut out = [0u8; CHECKSUM_LEN];
    for (dst, src) in out.iter_mut().zip(second.iter()) {
        *dst = *src;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_of_empty_buffer() {
        assert_eq!(checksum(&Sha256, &[]), [0x5d, 0xf6, 0xe0, 0xe2]);
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let framed = [0x80, 0x01, 0x02, 0x03];
        assert_eq!(checksum(&Sha256, &framed), checksum(&Sha256, &framed));
        assert_ne!(checksum(&Sha256, &framed), checksum(&Sha256, &framed[..3]));
    }

    #[test]
    fn test_custom_digest_is_applied_twice() {
        struct LengthPrefixed;
        impl Digest for LengthPrefixed {
            // Prepends the input length, so every pass shifts the output
            fn digest(&self, data: &[u8]) -> Vec<u8> {
                let mut out = vec![data.len() as u8];
                out.extend_from_slice(data);
                out.resize(out.len().max(4), 0xaa);
                out
            }
        }
        // pass 1: [7] -> [1, 7, 0xaa, 0xaa]; pass 2 -> [4, 1, 7, 0xaa, 0xaa]
        let single = LengthPrefixed.digest(&[7]);
        assert_eq!(single, vec![1, 7, 0xaa, 0xaa]);
        assert_eq!(checksum(&LengthPrefixed, &[7]), [4, 1, 7, 0xaa]);
        assert_ne!(checksum(&LengthPrefixed, &[7])[..], single[..4]);
    }
}
