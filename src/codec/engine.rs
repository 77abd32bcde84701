use super::checksum::{checksum, Digest, Sha256, CHECKSUM_LEN};
use super::radix::ZeroPrefixed;
use crate::error::{CodecError, Result};
use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Smallest decoded buffer: one version byte plus the checksum
const MIN_DECODED_LEN: usize = 1 + CHECKSUM_LEN;

/// A token split back into its parts. Wiped on drop since the payload
/// is often a private key.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Unpacked {
    pub version: u8,
    pub payload: Vec<u8>,
    pub checksum: [u8; CHECKSUM_LEN],
}

impl Unpacked {
    /// Take ownership of the payload, leaving an empty one behind
    pub fn take_payload(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.payload)
    }
}

/// Stateless Base58Check codec over a pluggable digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Check<D = Sha256> {
    digest: D,
}

impl Base58Check<Sha256> {
    pub fn new() -> Self {
        Base58Check { digest: Sha256 }
    }
}

impl<D: Digest> Base58Check<D> {
    pub fn with_digest(digest: D) -> Self {
        Base58Check { digest }
    }

    /// Encode `payload` under `version` into a base58 token
    pub fn encode(&self, payload: &[u8], version: u8) -> String {
        let mut buffer = Zeroizing::new(Vec::with_capacity(MIN_DECODED_LEN + payload.len()));
        buffer.push(version);
        buffer.extend_from_slice(payload);
        let checksum = checksum(&self.digest, &buffer);
        buffer.extend_from_slice(&checksum);

        // The zero run is counted over the whole buffer, checksum included, so
        // an all-zero frame followed by a 0x00 checksum byte still decodes.
        let split = ZeroPrefixed::from_bytes(&buffer);
        let token = split.to_base58();
        debug!(
            "Encoded {} payload bytes under version {version} into {} characters, {} leading zeros",
            payload.len(),
            token.len(),
            split.leading_zeros()
        );
        token
    }

    /// Split a token into version, payload and checksum, verifying the checksum
    pub fn unpack(&self, token: &str) -> Result<Unpacked> {
        let split = ZeroPrefixed::from_base58(token).map_err(|e| {
            debug!("Rejected token: {e}");
            e
        })?;
        let decoded = split.to_bytes();
        if decoded.len() < MIN_DECODED_LEN {
            debug!("Rejected token: {} decoded bytes", decoded.len());
            return Err(CodecError::TooShort {
                length: decoded.len(),
            });
        }

        let (framed, embedded) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        let expected = checksum(&self.digest, framed);
        if expected != embedded {
            let mut actual = [0u8; CHECKSUM_LEN];
            actual.copy_from_slice(embedded);
            debug!("Rejected token: checksum mismatch");
            return Err(CodecError::ChecksumMismatch { expected, actual });
        }

        debug!(
            "Unpacked version {} with {} payload bytes, {} leading zeros",
            framed[0],
            framed.len() - 1,
            split.leading_zeros()
        );
        Ok(Unpacked {
            version: framed[0],
            payload: framed[1..].to_vec(),
            checksum: expected,
        })
    }

    pub fn decode(&self, token: &str) -> Result<Vec<u8>> {
        let mut unpacked = self.unpack(token)?;
        Ok(unpacked.take_payload())
    }

    pub fn version_byte(&self, token: &str) -> Result<u8> {
        Ok(self.unpack(token)?.version)
    }

    /// True only if the token unpacks and re-encodes to exactly itself
    pub fn is_valid(&self, token: &str) -> bool {
        match self.unpack(token) {
            Ok(unpacked) => self.encode(&unpacked.payload, unpacked.version) == token,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{hex_decode, hex_encode};

    const PRIVATE_KEY_HEX: &str =
        "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a";
    const WIF: &str = "5KJvsngHeMpm884wtkJNzQGaCErckhHJBGFsvd3VyK5qMZXj3hS";

    fn codec() -> Base58Check {
        Base58Check::new()
    }

    #[test]
    fn test_encode_wif_private_key() {
        let key = hex_decode(PRIVATE_KEY_HEX).unwrap();
        assert_eq!(codec().encode(&key, 128), WIF);
    }

    #[test]
    fn test_unpack_wif_private_key() {
        let unpacked = codec().unpack(WIF).unwrap();
        assert_eq!(unpacked.version, 128);
        assert_eq!(hex_encode(&unpacked.payload), PRIVATE_KEY_HEX);
        assert_eq!(unpacked.checksum.len(), CHECKSUM_LEN);
        assert!(codec().is_valid(WIF));
    }

    #[test]
    fn test_last_character_flip_is_invalid() {
        let mut token = WIF.to_string();
        let last = token.pop().unwrap();
        token.push(if last == 'S' { 'T' } else { 'S' });
        assert!(!codec().is_valid(&token));
        assert!(codec().unpack(&token).unwrap_err().is_checksum_mismatch());
    }

    #[test]
    fn test_decode_and_version_byte() {
        let key = hex_decode(PRIVATE_KEY_HEX).unwrap();
        assert_eq!(codec().decode(WIF).unwrap(), key);
        assert_eq!(codec().version_byte(WIF).unwrap(), 128);
    }

    #[test]
    fn test_empty_payload() {
        for version in [0u8, 1, 255] {
            let token = codec().encode(&[], version);
            let unpacked = codec().unpack(&token).unwrap();
            assert_eq!(unpacked.version, version);
            assert!(unpacked.payload.is_empty());
        }
    }

    #[test]
    fn test_leading_zeros_in_frame() {
        // version 0 contributes the first zero byte
        let cases: [(u8, Vec<u8>, usize); 4] = [
            (5, vec![0, 1, 2], 0),
            (0, vec![7, 0], 1),
            (0, vec![0, 9], 2),
            (0, [vec![0u8; 9], vec![1]].concat(), 10),
        ];
        for (version, payload, zeros) in cases {
            let token = codec().encode(&payload, version);
            let run = token.chars().take_while(|&c| c == '1').count();
            assert_eq!(run, zeros, "token {token}");
            assert_eq!(codec().decode(&token).unwrap(), payload);
        }
    }

    #[test]
    fn test_all_zero_frame_round_trips() {
        for len in 0..32 {
            let payload = vec![0u8; len];
            let token = codec().encode(&payload, 0);
            assert!(token.starts_with(&"1".repeat(len + 1)));
            assert_eq!(codec().decode(&token).unwrap(), payload);
            assert!(codec().is_valid(&token));
        }
    }

    #[test]
    fn test_encode_matches_plain_base58_of_buffer() {
        use crate::codec::radix::bytes_to_base58;

        for (version, payload) in [(0u8, vec![0u8, 0, 5]), (128, vec![1, 2, 3]), (0, vec![])] {
            let mut buffer = vec![version];
            buffer.extend_from_slice(&payload);
            let sum = checksum(&Sha256, &buffer);
            buffer.extend_from_slice(&sum);

            let token = codec().encode(&payload, version);
            assert_eq!(token, bytes_to_base58(&buffer));
            let split = ZeroPrefixed::from_base58(&token).unwrap();
            assert_eq!(
                split.leading_zeros(),
                ZeroPrefixed::from_bytes(&buffer).leading_zeros()
            );
            assert_eq!(split.to_bytes().as_slice(), buffer.as_slice());
        }
    }

    #[test]
    fn test_too_short_tokens() {
        assert_eq!(
            codec().unpack("").unwrap_err(),
            CodecError::TooShort { length: 0 }
        );
        assert!(!codec().is_valid(""));
        assert!(matches!(
            codec().unpack("1111").unwrap_err(),
            CodecError::TooShort { length: 4 }
        ));
    }

    #[test]
    fn test_invalid_character_is_distinct() {
        let mut token = WIF.to_string();
        token.replace_range(3..4, "0");
        let err = codec().unpack(&token).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidCharacter {
                character: '0',
                position: 3
            }
        );
        assert!(!codec().is_valid(&token));
    }

    #[test]
    fn test_custom_digest_changes_checksum() {
        #[derive(Clone, Copy)]
        struct Reversed;
        impl Digest for Reversed {
            fn digest(&self, data: &[u8]) -> Vec<u8> {
                let mut out = crate::utils::sha256_digest(data);
                out.reverse();
                out
            }
        }

        let custom = Base58Check::with_digest(Reversed);
        let token = custom.encode(b"payload", 42);
        assert_eq!(custom.decode(&token).unwrap(), b"payload");
        assert!(codec().unpack(&token).unwrap_err().is_checksum_mismatch());
    }
}
