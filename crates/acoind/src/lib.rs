//! A-Coin node front-end.
//!
//! Parses the command line, sets up logging, and selects the chain
//! parameters the rest of the process runs with.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::indexing_slicing))]

use std::io::{self, Write};
use std::path::PathBuf;

use acoin_common::{ChainParams, params, select_params_from_flags};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(name = "acoind")]
#[command(about = "A-Coin node: resolves the network parameters for this process.", long_about = None)]
pub struct Args {
    /// Use the test network.
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network.
    #[arg(long)]
    pub regtest: bool,

    /// Directory to store data.
    #[arg(short, long)]
    pub datadir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Print the selected parameters as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Selects the network requested by `args` and prints its parameters.
pub fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let selector = acoin_common::init()?;
    let network = select_params_from_flags(args.testnet, args.regtest)?;
    let params = params();
    debug_assert_eq!(selector.active_network(), network);

    info!(
        %network,
        magic = %params.message_start(),
        port = params.default_port(),
        genesis = %params.genesis_hash(),
        "using chain parameters"
    );
    if params.dns_seeds().is_empty() && params.fixed_seeds().is_empty() {
        warn!(%network, "no bootstrap peers configured");
    }

    report(params, args, &mut io::stdout().lock())?;
    Ok(())
}

/// Writes a description of `params` to `out`.
pub fn report<W: Write>(
    params: &ChainParams,
    args: &Args,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &params.summary())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "network:         {}", params.network())?;
    writeln!(out, "magic:           {}", params.message_start())?;
    writeln!(out, "p2p port:        {}", params.default_port())?;
    writeln!(out, "rpc port:        {}", params.rpc_port())?;
    writeln!(out, "genesis:         {}", params.genesis_hash())?;
    writeln!(out, "rpc auth:        {}", params.require_rpc_auth())?;
    for seed in params.dns_seeds() {
        writeln!(out, "dns seed:        {}", seed.host)?;
    }
    for seed in params.fixed_seeds() {
        writeln!(out, "fixed seed:      {}", seed.address)?;
    }
    if let Some(datadir) = &args.datadir {
        writeln!(out, "data directory:  {}", params.network_data_dir(datadir).display())?;
    }
    Ok(())
}

/// Installs the global tracing subscriber.
pub fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = match args.log_level.parse::<tracing::Level>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!(
                "Invalid log level: {}. Using 'info' as default.",
                args.log_level
            );
            tracing::Level::INFO
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr()) && !args.no_color;

    let subscriber = Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_level(true)
            .with_target(true)
            .with_thread_ids(args.verbose)
            .with_thread_names(args.verbose)
            .with_ansi(use_ansi)
            .with_file(args.verbose)
            .with_line_number(args.verbose)
            .with_timer(ChronoUtc::rfc_3339()),
    );

    subscriber.try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use acoin_common::Network;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("acoind").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.testnet);
        assert!(!args.regtest);
        assert!(!args.json);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.datadir, None);
    }

    #[test]
    fn test_both_network_flags_parse() {
        // Rejected at selection time, not by the parser.
        let args = parse(&["--testnet", "--regtest"]);
        assert!(args.testnet && args.regtest);
    }

    #[test]
    fn test_conflicting_flags_report_usage_text() {
        let args = parse(&["--testnet", "--regtest"]);
        let err = run(&args).unwrap_err();
        assert_eq!(err.to_string(), "-testnet and -regtest cannot be used together");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["acoind", "--signet"]).is_err());
    }

    #[test]
    fn test_report_text() {
        let args = parse(&["--regtest", "--datadir", "/tmp/acoin"]);
        let params = ChainParams::for_network(Network::Regtest).unwrap();

        let mut out = Vec::new();
        report(&params, &args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("network:         regtest"));
        assert!(text.contains("p2p port:        18444"));
        assert!(text.contains("rpc auth:        false"));
        assert!(text.contains("data directory:  /tmp/acoin/regtest"));
        assert!(!text.contains("dns seed"));
    }

    #[test]
    fn test_report_json() {
        let args = parse(&["--json"]);
        let params = ChainParams::main().unwrap();

        let mut out = Vec::new();
        report(&params, &args, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["network"], "main");
        assert_eq!(json["default_port"], 17883);
        assert_eq!(json["dns_seeds"].as_array().unwrap().len(), 8);
        assert_eq!(json["fixed_seeds"], 1);
    }
}
