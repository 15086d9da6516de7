//! toyc - command-line driver for the toy language lexer.
//!
//! Parses arguments with clap, sets up logging, loads `toyc.toml` and
//! prints the token list of one source file.

mod config;
mod error;
mod lex;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Config, OutputFormat};
use error::{Result, ToycError};
use lex::{report_error, run_lex, LexArgs};

/// toyc - scan toy language source into tokens
///
/// Reads FILE (or standard input) and prints one token per line. The whole
/// input is rejected on the first lexical error.
#[derive(Parser, Debug)]
#[command(name = "toyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan toy language source into tokens", long_about = None)]
struct Cli {
    /// Source file to scan; omit or use `-` for standard input
    file: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Reject an integer followed by a dot with no fraction digits
    #[arg(long)]
    strict_dots: bool,

    /// Enable verbose output
    #[arg(short, long, env = "TOYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TOYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TOYC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        // Nothing else can be done if stderr itself is gone.
        let _ = report_error(&err, &mut io::stderr().lock());
        std::process::exit(1);
    }
}

/// Loads configuration, initializes logging and runs the scan.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let args = LexArgs {
        input: cli.file,
        format: cli.format.unwrap_or(config.output.format),
        config: config.lex_config(cli.strict_dots),
    };
    run_lex(&args, &mut io::stdout().lock())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token list on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ToycError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["toyc", "prog.toy"]);
        assert_eq!(cli.file, Some(PathBuf::from("prog.toy")));
        assert_eq!(cli.format, None);
        assert!(!cli.strict_dots);
    }

    #[test]
    fn test_cli_parse_stdin() {
        let cli = Cli::parse_from(["toyc"]);
        assert_eq!(cli.file, None);
        let cli = Cli::parse_from(["toyc", "-"]);
        assert_eq!(cli.file, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["toyc", "--format", "json", "prog.toy"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        let cli = Cli::parse_from(["toyc", "-f", "text", "prog.toy"]);
        assert_eq!(cli.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["toyc", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_strict_dots() {
        let cli = Cli::parse_from(["toyc", "--strict-dots", "prog.toy"]);
        assert!(cli.strict_dots);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["toyc", "--verbose", "prog.toy"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_config() {
        let cli = Cli::parse_from(["toyc", "--config", "/path/to/toyc.toml", "prog.toy"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/toyc.toml")));
    }

    #[test]
    fn test_cli_parse_no_color() {
        let cli = Cli::parse_from(["toyc", "--no-color", "prog.toy"]);
        assert!(cli.no_color);
    }
}
