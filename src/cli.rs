//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for tagpack using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **add**: Register a tag record for a remote file
//! - **list**: List records matching a tag expression (paged)
//! - **show**: Show one record by id
//! - **update**: Patch a record field by field
//! - **rm**: Delete a record
//! - **export**: Download every match of a tag expression into one zip
//!
//! # Design Features
//!
//! - Tag expressions default to `*` (every record)
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `ls` for `list`, `x` for `export`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tag remotely-stored files and export every tag match as a single archive
#[derive(Parser, Debug)]
#[command(name = "tagpack", version, about)]
pub struct Cli {
    /// Only output results, no informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a tag record for a remote file
    #[command(alias = "a")]
    Add {
        /// Name the file gets inside an exported archive
        name: String,
        /// Path of the file in the remote store
        path: String,
        /// Tag terms, separated by whitespace or commas
        #[arg(short, long)]
        tags: String,
    },

    /// List records matching a tag expression
    #[command(alias = "ls")]
    List {
        /// Tag expression; `*` matches every record
        #[arg(short, long, default_value = "*")]
        tags: String,
        /// Number of id-ordered matches to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Maximum number of matches to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show one record by id
    Show {
        /// Record id
        id: String,
    },

    /// Patch a record: present options overwrite, absent options keep
    Update {
        /// Record id
        id: String,
        /// New archive-entry name
        #[arg(long)]
        name: Option<String>,
        /// New remote store path
        #[arg(long)]
        path: Option<String>,
        /// New tag terms
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete a record
    Rm {
        /// Record id
        id: String,
    },

    /// Download every match of a tag expression into one zip archive
    #[command(alias = "x")]
    Export {
        /// Tag expression; `*` exports every record
        #[arg(short, long, default_value = "*")]
        tags: String,
        /// Where to write the archive
        #[arg(short, long, default_value = "tagpack-export.zip")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
