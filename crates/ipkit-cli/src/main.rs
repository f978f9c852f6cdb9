//! ipkit - release metadata and manifest CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ipkit_cli::cmd;
use ipkit_cli::{Cli, Commands};
use ipkit_core::DistributionFields;

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for key=value output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "parsed arguments");

    match cli.command {
        Commands::Collect {
            appinfo,
            package_json,
            append_version_suffix,
        } => cmd::collect::collect(&appinfo, &package_json, &append_version_suffix),
        Commands::Manifest {
            appinfo,
            ipk,
            output,
            ipk_url,
            icon_uri,
            source_url,
            app_description,
            root_required,
        } => {
            let fields = DistributionFields {
                ipk_url,
                icon_uri,
                source_url,
                app_description,
                root_required,
            };
            cmd::manifest::manifest(&appinfo, &ipk, &output, &fields)
        }
    }
}
