//! CLI command definitions and dispatch.

pub mod images;
pub mod plan;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use w3build_common::config::BuildConfig;
use w3build_common::constants;

/// w3build — Resolve web3api build manifests into build plans.
#[derive(Parser, Debug)]
#[command(name = "w3build", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the build manifest (defaults to the current directory).
    #[arg(long, global = true, env = "W3BUILD_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,

    /// Image catalog directory (defaults to `build-env/images` next to the binary).
    #[arg(long, global = true, env = "W3BUILD_CATALOG_DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Manifest file name, relative to the working directory.
    #[arg(long, global = true, default_value = constants::MANIFEST_FILE)]
    pub manifest: PathBuf,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build manifest and print the build plan.
    Plan(plan::PlanArgs),
    /// List the images available in the catalog.
    Images(images::ImagesArgs),
}

impl Cli {
    /// Builds the resolver configuration from the global flags.
    ///
    /// # Errors
    ///
    /// Returns an error if no working directory was given and the current
    /// directory cannot be determined.
    pub fn config(&self) -> anyhow::Result<BuildConfig> {
        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        let catalog_dir = self
            .catalog_dir
            .clone()
            .unwrap_or_else(constants::default_catalog_dir);
        Ok(BuildConfig {
            working_dir,
            manifest_file: self.manifest.clone(),
            catalog_dir,
        })
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    tracing::debug!(?config, "resolved configuration");
    match cli.command {
        Command::Plan(args) => plan::execute(args, config),
        Command::Images(args) => images::execute(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_populate_config() {
        let cli = Cli::try_parse_from([
            "w3build",
            "--working-dir",
            "/work/api",
            "--catalog-dir",
            "/opt/images",
            "plan",
        ])
        .expect("parse");
        let config = cli.config().expect("config");
        assert_eq!(config.working_dir, PathBuf::from("/work/api"));
        assert_eq!(config.catalog_dir, PathBuf::from("/opt/images"));
        assert_eq!(config.manifest_file, PathBuf::from("web3api.build.yaml"));
    }
}
