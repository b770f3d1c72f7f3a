//! docfill - Command-line tool for generating C# XML documentation comments.
//!
//! Reads fix requests (declaration descriptors plus the kind of fix wanted) from YAML or
//! JSON files and prints the generated documentation comments.
//!
//! # Usage
//!
//! ```bash
//! docfill [OPTIONS] <INPUT>
//! ```
//!
//! # Examples
//!
//! Print generated comments for every request file under a directory:
//! ```bash
//! docfill ./requests
//! ```
//!
//! Write the outcomes as JSON with CRLF line endings:
//! ```bash
//! docfill ./requests -f json --line-ending crlf -o fixes.json
//! ```

use anyhow::Result;
use clap::Parser;
use docfill::cli;
use log::info;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("docfill starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    Ok(())
}
