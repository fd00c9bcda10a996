//! `w3build plan` — Resolve the manifest and print the build plan.

use clap::Args;
use w3build_common::config::BuildConfig;
use w3build_common::types::ModuleKind;
use w3build_manifest::ManifestResolver;

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Modules to build (comma separated).
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = ModuleKind::ALL
    )]
    pub modules: Vec<ModuleKind>,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `plan` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or resolved.
pub fn execute(args: PlanArgs, config: BuildConfig) -> anyhow::Result<()> {
    tracing::info!(
        manifest = %config.manifest_path().display(),
        modules = ?args.modules,
        "resolving build manifest"
    );

    let resolver = ManifestResolver::from_config(config);
    let plan = resolver.resolve(&args.modules)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", crate::output::render_plan(&plan));
    }

    Ok(())
}
