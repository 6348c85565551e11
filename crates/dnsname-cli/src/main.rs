//! The dnsname program
//!
//! Converts dotted names to their length-prefixed wire form and back,
//! reading and printing the wire form as hex.

#![warn(
    clippy::dbg_macro,
    clippy::unimplemented,
    missing_copy_implementations,
    non_snake_case,
    non_upper_case_globals,
    rust_2018_idioms,
    unreachable_pub
)]

mod logger;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::logger::{LogConfig, logger};

/// Cli struct for all options managed with clap derive api.
#[derive(Debug, Parser)]
#[command(
    name = "dnsname",
    version,
    about = "Converts names to and from their length-prefixed wire form"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print a JSON object with the name, wire form and label count
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    log: LogConfig,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a dotted NAME and print its wire form as hex
    Encode {
        /// Name to encode, e.g. test.eth
        #[arg(value_name = "NAME", allow_hyphen_values = true)]
        name: String,
    },
    /// Decode a hex wire-form name and print it dotted
    Decode {
        /// Wire form as hex, with or without a 0x prefix
        #[arg(value_name = "HEX")]
        hex: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid hex input: {0}")]
    Hex(#[from] data_encoding::DecodeError),

    #[error("decode failed: {0}")]
    Decode(#[from] dnsname::DecodeError),

    #[error("encode failed: {0}")]
    Encode(#[from] dnsname::EncodeError),

    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of one conversion, as printed with `--json`.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Report {
    name: String,
    wire: String,
    labels: usize,
}

fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(HEXLOWER_PERMISSIVE.decode(digits.as_bytes())?)
}

fn convert(command: &Command) -> Result<Report, CliError> {
    match command {
        Command::Encode { name } => {
            let labels = dnsname::validate_text(name)?;
            let wire = dnsname::encode(name)?;
            debug!(labels, len = wire.len(), "encoded {name:?}");
            Ok(Report {
                name: name.clone(),
                wire: HEXLOWER.encode(&wire),
                labels,
            })
        }
        Command::Decode { hex } => {
            let wire = parse_hex(hex)?;
            let labels = dnsname::validate_wire(&wire)?;
            let name = dnsname::decode(&wire)?;
            debug!(labels, len = wire.len(), "decoded {name:?}");
            Ok(Report {
                name,
                wire: HEXLOWER.encode(&wire),
                labels,
            })
        }
    }
}

fn render(cli: &Cli, report: &Report) -> Result<String, CliError> {
    if cli.json {
        return Ok(serde_json::to_string(report)?);
    }
    Ok(match cli.command {
        Command::Encode { .. } => report.wire.clone(),
        Command::Decode { .. } => report.name.clone(),
    })
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let report = convert(&cli.command)?;
    render(cli, &report)
}

/// Run the dnsname program
fn main() -> ExitCode {
    let cli = Cli::parse();
    logger(env!("CARGO_BIN_NAME"), cli.log.level());
    info!("dnsname {}", dnsname::VERSION);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli)
    }

    #[test]
    fn test_encode_prints_hex() {
        let output = run_args(&["dnsname", "encode", "test.eth"]).unwrap();
        assert_eq!(output, "04746573740365746800");
    }

    #[test]
    fn test_decode_prints_name() {
        let output = run_args(&["dnsname", "decode", "04746573740365746800"]).unwrap();
        assert_eq!(output, "test.eth");

        let output = run_args(&["dnsname", "decode", "0x076578616D706C650378797A00"]).unwrap();
        assert_eq!(output, "example.xyz");
    }

    #[test]
    fn test_json_output() {
        let output = run_args(&["dnsname", "--json", "encode", ".pete.test.eth."]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], ".pete.test.eth.");
        assert_eq!(value["wire"], "047065746504746573740365746800");
        assert_eq!(value["labels"], 3);

        // --json is global and may follow the subcommand.
        let output = run_args(&["dnsname", "decode", "00", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "");
        assert_eq!(value["labels"], 0);
    }

    #[test]
    fn test_codec_errors_surface() {
        let err = run_args(&["dnsname", "decode", "04746573740065746800"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Decode(dnsname::DecodeError::UnexpectedTerminator { .. })
        ));

        let long = "a".repeat(64);
        let err = run_args(&["dnsname", "encode", &long]).unwrap_err();
        assert!(matches!(err, CliError::Encode(_)));
    }

    #[test]
    fn test_invalid_hex() {
        let err = run_args(&["dnsname", "decode", "0g"]).unwrap_err();
        assert!(matches!(err, CliError::Hex(_)));

        let err = run_args(&["dnsname", "decode", "047"]).unwrap_err();
        assert!(matches!(err, CliError::Hex(_)));
    }

    #[test]
    fn test_log_flags_parse() {
        let cli = Cli::try_parse_from(["dnsname", "encode", "a", "--debug"]).unwrap();
        assert_eq!(cli.log.level(), Some(tracing::Level::DEBUG));
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        assert!(Cli::try_parse_from(["dnsname"]).is_err());
    }
}
