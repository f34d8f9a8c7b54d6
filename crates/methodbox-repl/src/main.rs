//! Interactive terminal browser for the methodbox catalog
//!
//! Loads the method data file once at startup and drops into a line-based
//! browsing session. A missing or malformed data file is fatal: the error
//! is reported and the browser never starts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use methodbox::{Catalog, Session};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod repl;

/// Default location of the bundled method data, relative to the
/// workspace root.
const DEFAULT_DATA_FILE: &str = "data/methods.json";

#[derive(Parser)]
#[command(name = "methodbox", version)]
#[command(about = "Browse and filter the design-thinking method catalog")]
struct Args {
    /// Path to the method data file
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = Catalog::load(&args.data_file).with_context(|| {
        format!(
            "cannot start the browser without method data ({})",
            args.data_file.display()
        )
    })?;

    let mut session = Session::new();
    repl::run(&catalog, &mut session)
}
