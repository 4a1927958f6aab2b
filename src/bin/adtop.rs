//! adtop - Interactive marketing analytics dashboard.
//!
//! Usage:
//!   adtop               # dashboard with a 2 second live-refresh interval
//!   adtop 5             # dashboard with a 5 second live-refresh interval
//!   adtop --seed 42     # reproducible data (same seed, same dashboard)
//!   adtop --dump        # print the generated snapshot as JSON and exit

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use adtop::generator::Generator;
use adtop::refresh::RefreshDriver;
use adtop::tui::App;

/// Interactive marketing analytics dashboard.
#[derive(Parser)]
#[command(name = "adtop", about = "Marketing analytics dashboard", version)]
struct Args {
    /// Refresh interval in seconds for Live mode (default: 2).
    #[arg(value_name = "INTERVAL")]
    interval: Option<u64>,

    /// Seed for the sample-data generator; the same seed always produces
    /// the same dashboard. Random without it.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of campaigns to generate (clamped to 1-12).
    #[arg(long, default_value = "12", value_name = "COUNT")]
    campaigns: usize,

    /// Rows per campaign-table page.
    #[arg(long, default_value = "8", value_name = "ROWS")]
    page_size: usize,

    /// Directory export artifacts are written to.
    #[arg(long, default_value = ".", value_name = "DIR")]
    export_dir: String,

    /// Print the generated snapshot as JSON to stdout and exit.
    #[arg(long)]
    dump: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber.
/// The TUI owns the terminal, so logs go to stderr and default to warnings;
/// raise with -v when redirecting stderr to a file (`adtop 2>adtop.log`).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter =
        EnvFilter::from_default_env().add_directive(format!("adtop={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    // Validate arguments
    if args.interval == Some(0) {
        eprintln!("Error: interval must be at least 1 second");
        std::process::exit(1);
    }

    if args.page_size == 0 {
        eprintln!("Error: page size must be at least 1");
        std::process::exit(1);
    }

    let export_dir = PathBuf::from(&args.export_dir);
    if !export_dir.is_dir() {
        eprintln!(
            "Error: export directory '{}' does not exist",
            export_dir.display()
        );
        std::process::exit(1);
    }

    let mut generator = Generator::new(args.seed, args.campaigns);

    if args.dump {
        match serde_json::to_string_pretty(&generator.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Create and run TUI
    let tick_rate = Duration::from_secs(args.interval.unwrap_or(2));
    let app = App::new(RefreshDriver::new(generator), args.page_size, export_dir);

    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
