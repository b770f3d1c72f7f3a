use crate::config::{LineEnding, Settings};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// docfill - Generate XML documentation comments for C# declarations
#[derive(Parser, Debug)]
#[command(name = "docfill")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Fix request file, or a directory scanned for request files
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Settings file (YAML or JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Line ending for generated comments, overriding the settings file
    #[arg(long = "line-ending", value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered comments with a header per request
    Text,
    /// YAML list of fix outcomes
    Yaml,
    /// JSON array of fix outcomes
    Json,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {}", args.input.display());
    }

    info!("Input: {}", args.input.display());
    info!("Output format: {:?}", args.output_format);
    match args.output_path {
        Some(ref output) => info!("Output file: {}", output.display()),
        None => info!("Output: stdout"),
    }

    Ok(args)
}

/// Loads settings from the config file if one is given and applies CLI overrides.
pub fn load_settings(args: &CliArgs) -> Result<Settings> {
    let mut settings = match &args.config_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(line_ending) = args.line_ending {
        settings.line_ending = line_ending;
    }

    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::fixer::{FixOutcome, Fixer};
    use crate::loader::{LoadedFile, RequestLoader};
    use crate::oracle::ConventionOracle;
    use crate::scanner::RequestScanner;
    use crate::serializer::{render_text, serialize_json, serialize_yaml, write_to_file};

    info!("Starting documentation generation...");
    let settings = load_settings(&args)?;

    info!("Scanning for request files...");
    let scan_result = RequestScanner::new(args.input.clone()).scan()?;
    info!("Found {} request files", scan_result.request_files.len());

    if scan_result.request_files.is_empty() {
        anyhow::bail!("No request files found under {}", args.input.display());
    }

    info!("Loading requests...");
    let loaded: Vec<LoadedFile> = RequestLoader::load_files(&scan_result.request_files)
        .into_iter()
        .filter_map(|r| match r {
            Ok(file) => Some(file),
            Err(e) => {
                debug!("Skipping file due to load error: {}", e);
                None
            }
        })
        .collect();

    if loaded.is_empty() {
        anyhow::bail!("No request files could be loaded");
    }

    let oracle = ConventionOracle::new(settings.awaitable_types.clone());
    let fixer = Fixer::new(&settings, &oracle);

    info!("Generating documentation...");
    let outcomes: Vec<FixOutcome> = loaded
        .iter()
        .flat_map(|file| {
            debug!("Applying {} requests from {}", file.requests.len(), file.path.display());
            fixer.apply_all(&file.requests)
        })
        .collect();

    let content = match args.output_format {
        OutputFormat::Text => render_text(&outcomes),
        OutputFormat::Yaml => serialize_yaml(&outcomes)?,
        OutputFormat::Json => serialize_json(&outcomes)?,
    };

    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
    } else {
        print!("{}", content);
    }

    let offered = outcomes.iter().filter(|o| o.offered).count();
    if offered < outcomes.len() {
        warn!("{} of {} requests were not offered a fix", outcomes.len() - offered, outcomes.len());
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Files scanned: {}", scan_result.request_files.len());
    info!("  - Files loaded: {}", loaded.len());
    info!("  - Requests: {}", outcomes.len());
    info!("  - Fixes offered: {}", offered);

    Ok(())
}
