use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use falx::{
    RotationConfig, config,
    rotator::{self, Partition, report},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments for falx.
///
/// `--keep` is taken as a raw string so non-numeric values can fall back to
/// the default instead of being rejected, and `ignore_errors` keeps unknown
/// flags from aborting a scheduled run. `--source` is validated by hand so
/// a missing flag exits 1 rather than clap's 2.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Keep the N most recent files in a directory, delete the rest",
    long_about = None,
    ignore_errors = true
)]
struct Args {
    /// Directory to scan for rotation candidates (top level only)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Number of most-recent matching files to retain (default: 4)
    #[arg(long, allow_hyphen_values = true)]
    keep: Option<String>,

    /// Regex filter applied to each file's full path (default: match all)
    #[arg(long)]
    pattern: Option<String>,

    /// Compute and report the rotation, but never delete
    #[arg(long)]
    dry_run: bool,

    /// Suppress all output except fatal errors
    #[arg(long)]
    silent: bool,

    /// Alias for --help, kept from the original tool's surface
    #[arg(short = '?', hide = true)]
    usage: bool,
}

fn main() {
    let args = Args::parse();

    if args.usage {
        let _ = Args::command().print_help();
        return;
    }

    init_tracing(args.silent);

    let Some(source) = args.source else {
        eprintln!("Error: --source is required");
        std::process::exit(1);
    };

    let config = RotationConfig {
        source,
        pattern: args
            .pattern
            .unwrap_or_else(|| config::DEFAULT_PATTERN.to_string()),
        keep: config::parse_keep(args.keep.as_deref()),
        dry_run: args.dry_run,
        silent: args.silent,
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// One rotation pass: scan, partition, report, apply.
fn run(config: &RotationConfig) -> Result<(), falx::RotateError> {
    let entries = rotator::scan(config)?;
    let partition = Partition::plan(entries, config.keep);

    if !config.silent {
        print!("{}", report::render(&partition, config.dry_run));
    }

    let outcome = rotator::apply(&partition.to_delete, config.dry_run);

    if !config.silent {
        print!("{}", report::render_failures(&outcome));
    }

    Ok(())
}

/// Console logging to stderr, so the rotation report owns stdout.
/// `RUST_LOG` overrides the default level.
fn init_tracing(silent: bool) {
    let default_level = if silent { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
