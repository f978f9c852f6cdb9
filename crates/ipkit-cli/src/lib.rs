//! ipkit - release helpers for webOS packages
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Command definitions for the `ipkit` binary. Every command writes only
//! `key=value` lines to stdout, and only once the whole
//! command has succeeded; diagnostics and logs go to stderr.

pub mod cmd;

use clap::{Parser, Subcommand};
use ipkit_schema::RootRequired;
use std::path::PathBuf;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "ipkit")]
#[command(author, version, about = "ipkit - release metadata and manifests for webOS packages")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print app_id, version and description; optionally override the patch version
    Collect {
        /// Path to appinfo.json (rewritten when a suffix is given)
        #[arg(long)]
        appinfo: PathBuf,
        /// Path to package.json
        #[arg(long)]
        package_json: PathBuf,
        /// Build number that replaces the patch segment of the version
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        append_version_suffix: String,
    },
    /// Generate a homebrew-style manifest for a built IPK
    Manifest {
        /// Path to appinfo.json
        #[arg(long)]
        appinfo: PathBuf,
        /// Path to the generated .ipk file
        #[arg(long)]
        ipk: PathBuf,
        /// Where the manifest JSON is written
        #[arg(long)]
        output: PathBuf,
        /// ipkUrl value to write into the manifest
        #[arg(long)]
        ipk_url: String,
        /// iconUri value to write into the manifest
        #[arg(long)]
        icon_uri: String,
        /// sourceUrl value to write into the manifest
        #[arg(long)]
        source_url: String,
        /// appDescription value (falls back to appinfo.json)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        app_description: String,
        /// Root requirement flag: true, false, or optional
        #[arg(long, default_value = "false")]
        root_required: RootRequired,
    },
}
