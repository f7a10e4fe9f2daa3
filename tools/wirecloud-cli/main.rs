use clap::{Parser, Subcommand};
use std::cmp::Ordering;
use std::fs;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wirecloud_plugin::prelude::*;

/// Version checks and wiring migration for Wirecloud resources
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log migration details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Migrate a legacy wiring document to the 2.0 schema
    Migrate {
        /// Path to the legacy wiring JSON file
        input: String,
        /// Where to write the migrated document (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Compare two version strings
    Compare {
        left: String,
        right: String,
        /// Invert the ordering
        #[arg(long)]
        reverse: bool,
    },
    /// Succeed only if the candidate version is newer than the installed one
    CheckUpgrade { installed: String, candidate: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Migrate {
            input,
            output,
            compact,
        } => run_migrate(&input, output.as_deref(), compact),
        Command::Compare {
            left,
            right,
            reverse,
        } => run_compare(&left, &right, reverse),
        Command::CheckUpgrade {
            installed,
            candidate,
        } => run_check_upgrade(&installed, &candidate),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_migrate(input: &str, output: Option<&str>, compact: bool) {
    let legacy_json = fs::read_to_string(input).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read wiring file '{}': {}", input, e))
    });

    let wiring = migrate_json(&legacy_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Migration failed: {}", e)));
    info!(
        connections = wiring.connections.len(),
        operators = wiring.operators.len(),
        "migrated '{}'",
        input
    );

    if wiring.is_empty() {
        eprintln!("Note: the migrated wiring has an empty visual layer");
    }

    let rendered = if compact {
        serde_json::to_string(&wiring)
    } else {
        serde_json::to_string_pretty(&wiring)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize wiring: {}", e)));

    match output {
        Some(path) => {
            fs::write(path, rendered + "\n").unwrap_or_else(|e| {
                exit_with_error(&format!("Could not write to file '{}': {}", path, e))
            });
            debug!("wrote migrated wiring to '{}'", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered)
                .unwrap_or_else(|e| exit_with_error(&format!("Could not write output: {}", e)));
        }
    }
}

fn run_compare(left: &str, right: &str, reverse: bool) {
    let left_version = left
        .parse::<Version>()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
        .with_reverse_order(reverse);
    let ordering = left_version
        .compare_str(right)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let label = match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    println!("{}", label);
}

fn run_check_upgrade(installed: &str, candidate: &str) {
    match check_upgrade(installed, candidate) {
        Ok(version) => println!("{} -> {}: upgrade accepted", installed, version),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
