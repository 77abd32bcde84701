// This is the entry point for the b58check command-line tool
// Everything interesting lives in the library; here I only parse, dispatch and print
use b58check::cli::{Command, Opt};
use b58check::config::{Config, GLOBAL_CONFIG};
use b58check::utils::{hex_decode, hex_encode};
use b58check::{Base58Check, Network};
use clap::Parser;
use log::{error, warn, LevelFilter};
use std::process;
use std::str::FromStr;

fn main() {
    // I parse the command line first so I know whether an explicit config file was given
    let opt = Opt::parse();

    // An explicit --config must load; otherwise I fall back to the env-driven global config
    let loaded = opt.config.as_deref().map(Config::load);
    let config = match &loaded {
        Some(Ok(config)) => config,
        Some(Err(_)) | None => &*GLOBAL_CONFIG,
    };

    // The log level comes from the config, and RUST_LOG still wins if it is set
    let level = LevelFilter::from_str(&config.get_log_level()).unwrap_or(LevelFilter::Info);
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(Err(e)) = &loaded {
        error!("Error: {e}");
        process::exit(1);
    }

    // Config loading ran before the logger existed, so I report skipped sources now
    for issue in config.issues() {
        warn!("Ignoring config source: {issue}");
    }

    if let Err(e) = run_command(opt.command, config) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Each CLI command maps onto one codec operation
fn run_command(command: Command, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let codec = Base58Check::new();
    match command {
        // When I want to turn a hex payload into a token
        Command::Encode {
            payload,
            version,
            network,
            kind,
        } => {
            let payload = hex_decode(&payload)?;
            // An explicit --version wins, then --network/--kind, then the configured default
            let version = version
                .or_else(|| network.map(|network| network.version_for(kind)))
                .unwrap_or_else(|| config.get_default_version());
            println!("{}", codec.encode(&payload, version));
        }
        // When I only need the payload back, e.g. the hash160 behind an address
        Command::Decode { token } => {
            let payload = codec.decode(&token)?;
            println!("{}", hex_encode(&payload));
        }
        // When I want to see every part of a token, plus which network it belongs to
        Command::Unpack { token, json } => {
            let unpacked = codec.unpack(&token)?;
            let known = Network::from_version_byte(unpacked.version);
            if json {
                let value = serde_json::json!({
                    "version": unpacked.version,
                    "payload": hex_encode(&unpacked.payload),
                    "checksum": hex_encode(&unpacked.checksum),
                    "network": known.map(|(network, _)| network),
                    "kind": known.map(|(_, kind)| kind),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Version:  {}", unpacked.version);
                println!("Payload:  {}", hex_encode(&unpacked.payload));
                println!("Checksum: {}", hex_encode(&unpacked.checksum));
                if let Some((network, kind)) = known {
                    println!("Network:  {network} ({kind})");
                }
            }
        }
        // When I just want the version byte of a token
        Command::Version { token } => {
            println!("{}", codec.version_byte(&token)?);
        }
        // When I want to check a batch of tokens; any invalid one makes the exit code 1
        Command::Validate { tokens } => {
            let expected_network = config.get_network();
            let mut invalid = 0;
            for token in &tokens {
                if !codec.is_valid(token) {
                    invalid += 1;
                    println!("{token}: invalid");
                    continue;
                }
                println!("{token}: valid");
                // is_valid passed, so the version is readable
                if let Ok(version) = codec.version_byte(token) {
                    // I warn when a valid token belongs to a different network than configured
                    match Network::from_version_byte(version) {
                        Some((network, _)) if network != expected_network => warn!(
                            "{token} belongs to {network}, configured network is {}",
                            expected_network
                        ),
                        Some(_) => {}
                        None => warn!("{token} has unrecognized version byte {version}"),
                    }
                }
            }
            if invalid > 0 {
                return Err(format!("{invalid} of {} tokens invalid", tokens.len()).into());
            }
        }
    }
    Ok(())
}
