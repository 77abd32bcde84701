use crate::versions::{Network, TokenKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "b58check", about = "Base58Check encoder and validator")]
pub struct Opt {
    #[arg(long = "config", global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encode", about = "Encode a hex payload as a Base58Check token")]
    Encode {
        #[arg(help = "Payload bytes as hex")]
        payload: String,
        #[arg(long = "version", help = "Version byte (0-255)")]
        version: Option<u8>,
        #[arg(
            long = "network",
            help = "Pick the version byte for this network (bitcoin, testnet, litecoin, ...)"
        )]
        network: Option<Network>,
        #[arg(
            long = "kind",
            default_value = "address",
            help = "Token kind used with --network: address or private-key"
        )]
        kind: TokenKind,
    },
    #[command(name = "decode", about = "Print the payload of a token as hex")]
    Decode {
        #[arg(help = "Base58Check token")]
        token: String,
    },
    #[command(name = "unpack", about = "Show version, payload and checksum of a token")]
    Unpack {
        #[arg(help = "Base58Check token")]
        token: String,
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },
    #[command(name = "version", about = "Print the version byte of a token")]
    Version {
        #[arg(help = "Base58Check token")]
        token: String,
    },
    #[command(name = "validate", about = "Check one or more tokens")]
    Validate {
        #[arg(required = true, help = "Base58Check tokens")]
        tokens: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode_with_network() {
        let opt = Opt::try_parse_from([
            "b58check",
            "encode",
            "00ff",
            "--network",
            "litecoin",
            "--kind",
            "private-key",
        ])
        .unwrap();
        match opt.command {
            Command::Encode {
                payload,
                version,
                network,
                kind,
            } => {
                assert_eq!(payload, "00ff");
                assert_eq!(version, None);
                assert_eq!(network, Some(Network::Litecoin));
                assert_eq!(kind, TokenKind::PrivateKey);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_version_out_of_range_rejected() {
        let result = Opt::try_parse_from(["b58check", "encode", "00", "--version", "256"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_token() {
        assert!(Opt::try_parse_from(["b58check", "validate"]).is_err());
        let opt =
            Opt::try_parse_from(["b58check", "--config", "c.toml", "validate", "a", "b"]).unwrap();
        assert_eq!(opt.config, Some(PathBuf::from("c.toml")));
    }
}
