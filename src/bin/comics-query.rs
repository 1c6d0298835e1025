//! Search creative credits in converted GCD JSON files.
//!
//! Usage:
//!   comics-query <jsondir> -s <script writer name>
//!   comics-query <jsondir> -p <penciler name>
//!   comics-query <jsondir> -i <inker name>
//!   comics-query <jsondir> -c <colorist name>
//!
//! Exactly one credit selector is required. Matches print to stdout,
//! grouped by issue.

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};

use comics_rs::{ComicsError, Store, print_matching};

#[derive(Parser)]
#[command(name = "comics-query", about = "Search creative credits by name")]
#[command(group(ArgGroup::new("credit").required(true).multiple(false)))]
struct Cli {
    /// Directory containing the issues and sequences JSON files
    json_dir: PathBuf,

    /// Search script (writer) credits
    #[arg(short = 's', long, value_name = "NAME", group = "credit")]
    script: Option<String>,

    /// Search pencil credits
    #[arg(short = 'p', long, value_name = "NAME", group = "credit")]
    pencils: Option<String>,

    /// Search ink credits
    #[arg(short = 'i', long, value_name = "NAME", group = "credit")]
    inks: Option<String>,

    /// Search color credits
    #[arg(short = 'c', long, value_name = "NAME", group = "credit")]
    colors: Option<String>,
}

impl Cli {
    fn query(&self) -> (&'static str, &str) {
        if let Some(name) = &self.script {
            ("script", name)
        } else if let Some(name) = &self.pencils {
            ("pencils", name)
        } else if let Some(name) = &self.inks {
            ("inks", name)
        } else if let Some(name) = &self.colors {
            ("colors", name)
        } else {
            // clap's required group guarantees one selector is present
            unreachable!("no credit selector")
        }
    }
}

fn run(cli: &Cli) -> Result<(), ComicsError> {
    let store = Store::load(&cli.json_dir)?;
    let (field, name) = cli.query();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_matching(&store, field, name, &mut out)?;
    out.flush()?;
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
