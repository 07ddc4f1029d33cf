//! Tagpack CLI application entry point
//!
//! This is the main executable for tagpack. It keeps a tag index over files
//! in a remote store and exports every match of a tag expression as a single
//! zip archive.
//!
//! # Usage
//!
//! ```bash
//! # Register a remote file under some tags
//! tagpack add report.pdf /work/report.pdf --tags "work pdf 2024"
//!
//! # Page through matching records
//! tagpack list --tags work --offset 0 --limit 10
//!
//! # Patch a record
//! tagpack update <id> --tags "archive"
//!
//! # Export every match of an expression into one zip
//! tagpack export --tags "work pdf" -o work.zip
//!
//! # Quiet mode (only output results)
//! tagpack -q list
//! ```
//!
//! # Configuration
//!
//! On first run, tagpack will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/tagpack/config.toml` on
//! Linux).

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tagpack::{
    TagpackError,
    cli::{Cli, Commands},
    commands,
    config::TagpackConfig,
    index::SledIndex,
    response,
    store::{DirStore, LazyStore},
};

type Result<T> = std::result::Result<T, TagpackError>;

/// Dispatch the parsed command against the configured index and store
fn run(config: &TagpackConfig, cli: Cli) -> Result<()> {
    let quiet = cli.quiet || config.quiet;

    let index = SledIndex::open(&config.index_path, &config.collection)?;

    match cli.command {
        Commands::Add { name, path, tags } => {
            commands::add(&index, &name, &path, &tags, quiet)?;
        }
        Commands::List {
            tags,
            offset,
            limit,
        } => {
            commands::list(&index, &tags, offset, limit, quiet)?;
        }
        Commands::Show { id } => {
            commands::show(&index, &id, quiet)?;
        }
        Commands::Update {
            id,
            name,
            path,
            tags,
        } => {
            let patch = tagpack::EntryPatch { name, path, tags };
            commands::update(&index, &id, patch, quiet)?;
        }
        Commands::Rm { id } => {
            commands::remove(&index, &id, quiet)?;
        }
        Commands::Export { tags, output } => {
            // The store handle is connected on first use and reused; the
            // other commands never touch the remote side.
            let store_root = config.store_root.clone();
            let store = LazyStore::new(move || DirStore::open(&store_root));
            let max_size = config.max_export_size_bytes()?;
            commands::export(&index, &store, max_size, &tags, &output, quiet)?;
        }
    }

    index.flush()?;
    Ok(())
}

/// Main entry point for the tagpack application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler. Failures are printed as the same
/// code/message pairs a controller in front of the core would serve.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tagpack=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let config = match TagpackConfig::load_or_setup() {
        Ok(config) => config,
        Err(e) => {
            let err = TagpackError::from(e);
            report_failure(&err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&config, cli) {
        report_failure(&err);
        std::process::exit(1);
    }
}

/// Print a failure the way the boundary maps it
fn report_failure(err: &TagpackError) {
    let response = response::error_response(err);
    eprintln!("{}: {}", response.code.red(), response.message);
}
