//! sdpctl - SimDisplay packet tool
//!
//! Encodes packet descriptions into SimDisplay wire bytes, decodes and
//! validates captured packets, and prints the protocol layout. It never talks
//! to a serial port; pipe its output to whatever transport feeds the display.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod input;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{EncodeArgs, PacketSource};
use crate::error::{CliError, USAGE_EXIT_CODE};

#[derive(Parser)]
#[command(name = "sdpctl")]
#[command(about = "SimDisplay packet tool - encode, decode and validate dashboard telemetry packets")]
#[command(version)]
#[command(long_about = "
sdpctl works with the 20-byte SimDisplay telemetry packet sent from a
simulator-side producer to an Arduino dashboard display.

Packet descriptions are JSON or YAML objects keyed by field name; omitted
fields are zero. Use --json for machine-readable output.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        env = "SDPCTL_JSON",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a packet description into wire bytes
    Encode(EncodeArgs),

    /// Decode wire bytes and print every field
    Decode(PacketSource),

    /// Decode wire bytes and check the status value
    Validate(PacketSource),

    /// Show the packet field layout
    Layout,

    /// Show the protocol version tag
    Version,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io_err) = e.print() {
                eprintln!("Failed to print usage: {io_err}");
            }
            // --help and --version are reported on stdout and are not failures.
            return if e.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let log_level = log_level(cli.verbose);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sdpctl={log_level},simdisplay_protocol={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(1);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Encode(args) => commands::encode::execute(args, cli.json),
        Commands::Decode(source) => commands::decode::execute(source, cli.json),
        Commands::Validate(source) => commands::decode::validate_packet(source, cli.json),
        Commands::Layout => {
            commands::info::layout(cli.json);
            Ok(())
        }
        Commands::Version => {
            commands::info::protocol_version(cli.json);
            Ok(())
        }
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_global_json_flag_before_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["sdpctl", "--json", "layout"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["sdpctl", "version", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        let cli0 = Cli::try_parse_from(["sdpctl", "layout"])?;
        assert_eq!(log_level(cli0.verbose), "warn");

        let cli2 = Cli::try_parse_from(["sdpctl", "-vv", "layout"])?;
        assert_eq!(log_level(cli2.verbose), "debug");

        let cli4 = Cli::try_parse_from(["sdpctl", "-vvvv", "layout"])?;
        assert_eq!(log_level(cli4.verbose), "trace");
        Ok(())
    }

    #[test]
    fn parse_encode_args() -> TestResult {
        let cli = Cli::try_parse_from([
            "sdpctl", "encode", "lap.yaml", "--format", "yaml", "--out", "lap.bin", "--strict",
        ])?;
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.input.to_str(), Some("lap.yaml"));
                assert_eq!(args.format, Some(input::DescriptionFormat::Yaml));
                assert_eq!(args.out.as_deref().and_then(|p| p.to_str()), Some("lap.bin"));
                assert!(args.strict);
            }
            _ => return Err("expected encode command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_decode_hex() -> TestResult {
        let cli = Cli::try_parse_from(["sdpctl", "decode", "0200"])?;
        match cli.command {
            Commands::Decode(source) => {
                assert_eq!(source.hex.as_deref(), Some("0200"));
                assert!(source.file.is_none());
            }
            _ => return Err("expected decode command".into()),
        }
        Ok(())
    }

    #[test]
    fn decode_requires_a_source() {
        assert!(Cli::try_parse_from(["sdpctl", "decode"]).is_err());
    }

    #[test]
    fn decode_rejects_both_sources() {
        assert!(Cli::try_parse_from(["sdpctl", "decode", "00", "--file", "p.bin"]).is_err());
    }

    #[test]
    fn usage_errors_go_to_stderr() {
        let missing = Cli::try_parse_from(["sdpctl", "decode"]).err();
        assert!(missing.is_some_and(|e| e.use_stderr()));
        let help = Cli::try_parse_from(["sdpctl", "--help"]).err();
        assert!(help.is_some_and(|e| !e.use_stderr()));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
