// Command-line interface for markdown2html
//
// Converts one Markdown file into an HTML fragment file:
//
//  markdown2html <input> <output> [--config <file>] [-v | -q]
//
// Exactly two positional arguments are accepted. Anything else prints the
// usage line on stderr and exits with status 1 before any file is touched.
// A missing input prints "Missing <input>" and exits with status 1 without
// creating the output. The conversion itself lives in md2html-core.
//
// Logging goes to stderr through tracing. The filter comes from RUST_LOG when
// set, otherwise `logging.level` from the configuration. --verbose/--quiet
// override that key on top of every configuration file.

use clap::error::ErrorKind;
use md2html_config::{ConfigError, Loader, Md2HtmlConfig, LOCAL_CONFIG_FILE};
use md2html_core::{convert_file, ConvertError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::build_cli;

const USAGE: &str = "Usage: markdown2html README.md README.html";

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) if is_informational(e.kind()) => e.exit(),
        Err(_) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        verbosity_override(matches.get_flag("verbose"), matches.get_flag("quiet")),
    );
    init_logging(&config);

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    std::process::exit(handle_convert_command(input, output));
}

/// Help and version requests are not usage errors.
fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Run the conversion and map the outcome to an exit status.
fn handle_convert_command(input: &str, output: &str) -> i32 {
    debug!(input = %input, output = %output, "starting conversion");
    match convert_file(input, output) {
        Ok(stats) => {
            info!(
                lines = stats.lines,
                bytes = stats.bytes_written,
                "wrote {output}"
            );
            0
        }
        Err(err @ ConvertError::MissingInput(_)) => {
            eprintln!("{err}");
            1
        }
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

/// Level forced by `-v`/`-q`, layered over every configuration file.
fn verbosity_override(verbose: bool, quiet: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}

fn config_loader(explicit_path: Option<&str>, level: Option<&str>) -> Result<Loader, ConfigError> {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    match level {
        Some(level) => loader.set_override("logging.level", level),
        None => Ok(loader),
    }
}

fn load_cli_config(explicit_path: Option<&str>, level: Option<&str>) -> Md2HtmlConfig {
    config_loader(explicit_path, level)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

fn log_filter(config: &Md2HtmlConfig) -> Result<EnvFilter, String> {
    if std::env::var("RUST_LOG").is_ok() {
        Ok(EnvFilter::from_default_env())
    } else {
        EnvFilter::try_new(&config.logging.level)
            .map_err(|err| format!("Invalid logging.level '{}': {err}", config.logging.level))
    }
}

fn init_logging(config: &Md2HtmlConfig) {
    let filter = log_filter(config).unwrap_or_else(|msg| {
        eprintln!("{msg}");
        std::process::exit(1);
    });

    // Ignore error if a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.logging.ansi)
        .with_target(false)
        .try_init();
}
