//! Convert GCD tab-separated export files into JSON documents.
//!
//! Usage:
//!   gcd-convert <datadir>
//!   gcd-convert <datadir> --compact
//!
//! Scans the directory for `*issues.tsv` and `*sequences.tsv` files and
//! writes a `.json` sibling for each.

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use comics_rs::{ComicsError, Layout, convert_dir};

#[derive(Parser)]
#[command(name = "gcd-convert", about = "Convert GCD TSV exports to JSON")]
struct Cli {
    /// Directory containing *issues.tsv and *sequences.tsv export files
    data_dir: PathBuf,

    /// Write each record on a single line instead of pretty-printing
    #[arg(long)]
    compact: bool,
}

fn run(cli: &Cli) -> Result<(), ComicsError> {
    let layout = if cli.compact {
        Layout::Compact
    } else {
        Layout::Pretty
    };
    convert_dir(&cli.data_dir, layout)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    match panic::catch_unwind(AssertUnwindSafe(|| run(&cli))) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
        Err(_) => process::exit(3),
    }
}
