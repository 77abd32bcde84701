//! Version bytes used by common Base58Check networks
//!
//! Only the byte selection lives here; deriving keys or hashes is left to
//! callers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// WIF private key versions sit this far above the address version
const PRIVATE_KEY_OFFSET: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Bitcoin,
    Testnet,
    Litecoin,
    Namecoin,
    Peercoin,
    Primecoin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Address,
    PrivateKey,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Bitcoin,
        Network::Testnet,
        Network::Litecoin,
        Network::Namecoin,
        Network::Peercoin,
        Network::Primecoin,
    ];

    pub fn pubkey_hash_version(self) -> u8 {
        match self {
            Network::Bitcoin => 0,
            Network::Testnet => 111,
            Network::Litecoin => 48,
            Network::Namecoin => 52,
            Network::Peercoin => 55,
            Network::Primecoin => 23,
        }
    }

    pub fn private_key_version(self) -> u8 {
        self.pubkey_hash_version().wrapping_add(PRIVATE_KEY_OFFSET)
    }

    pub fn version_for(self, kind: TokenKind) -> u8 {
        match kind {
            TokenKind::Address => self.pubkey_hash_version(),
            TokenKind::PrivateKey => self.private_key_version(),
        }
    }

    /// Reverse lookup of a decoded version byte
    pub fn from_version_byte(version: u8) -> Option<(Network, TokenKind)> {
        Network::ALL.iter().find_map(|&network| {
            if network.pubkey_hash_version() == version {
                Some((network, TokenKind::Address))
            } else if network.private_key_version() == version {
                Some((network, TokenKind::PrivateKey))
            } else {
                None
            }
        })
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(Network::Bitcoin),
            "testnet" => Ok(Network::Testnet),
            "litecoin" | "ltc" => Ok(Network::Litecoin),
            "namecoin" | "nmc" => Ok(Network::Namecoin),
            "peercoin" | "ppc" => Ok(Network::Peercoin),
            "primecoin" | "xpm" => Ok(Network::Primecoin),
            _ => Err(format!(
                "Invalid network: {s}. Valid options: bitcoin, testnet, litecoin, \
                 namecoin, peercoin, primecoin"
            )),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Bitcoin => write!(f, "bitcoin"),
            Network::Testnet => write!(f, "testnet"),
            Network::Litecoin => write!(f, "litecoin"),
            Network::Namecoin => write!(f, "namecoin"),
            Network::Peercoin => write!(f, "peercoin"),
            Network::Primecoin => write!(f, "primecoin"),
        }
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "address" => Ok(TokenKind::Address),
            "private-key" | "wif" => Ok(TokenKind::PrivateKey),
            _ => Err(format!(
                "Invalid token kind: {s}. Valid options: address, private-key"
            )),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Address => write!(f, "address"),
            TokenKind::PrivateKey => write!(f, "private-key"),
        }
    }
}
