//! `w3build images` — List the packaged build images.

use clap::Args;
use w3build_common::config::BuildConfig;
use w3build_common::constants::DOCKERFILE;
use w3build_manifest::{CatalogLookup, DirectoryCatalog};

/// Arguments for the `images` command.
#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Print the Dockerfile path next to each image name.
    #[arg(short, long)]
    pub paths: bool,
}

/// Executes the `images` command.
///
/// # Errors
///
/// Returns an error if the catalog directory cannot be listed.
pub fn execute(args: ImagesArgs, config: &BuildConfig) -> anyhow::Result<()> {
    let catalog = DirectoryCatalog::new(config.catalog_dir.clone());
    tracing::info!(catalog = %catalog.base().display(), "listing catalog images");

    let rows = catalog_rows(&catalog, args.paths)?;
    if rows.is_empty() {
        println!("No images found in {}.", catalog.base().display());
        return Ok(());
    }
    for row in &rows {
        println!("{row}");
    }

    Ok(())
}

/// One line per catalog entry, optionally with its Dockerfile path.
fn catalog_rows(catalog: &DirectoryCatalog, paths: bool) -> anyhow::Result<Vec<String>> {
    let names = catalog.available()?;
    if !paths {
        return Ok(names);
    }
    let rows = names
        .into_iter()
        .map(|name| {
            let dockerfile = catalog.base().join(&name).join(DOCKERFILE);
            if dockerfile.is_file() {
                format!("{name:<20} {}", dockerfile.display())
            } else {
                format!("{name:<20} (no Dockerfile)")
            }
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn config_for(catalog_dir: &Path) -> BuildConfig {
        BuildConfig {
            catalog_dir: catalog_dir.to_path_buf(),
            ..BuildConfig::new(catalog_dir)
        }
    }

    fn catalog_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("node")).expect("mkdir");
        std::fs::write(dir.path().join("node/Dockerfile"), "FROM node\n").expect("write");
        std::fs::create_dir_all(dir.path().join("broken")).expect("mkdir");
        dir
    }

    #[test]
    fn rows_list_names_sorted() {
        let dir = catalog_dir();
        let catalog = DirectoryCatalog::new(dir.path());
        let rows = catalog_rows(&catalog, false).expect("rows");
        assert_eq!(rows, ["broken", "node"]);
    }

    #[test]
    fn rows_with_paths_mark_missing_dockerfile() {
        let dir = catalog_dir();
        let catalog = DirectoryCatalog::new(dir.path());
        let rows = catalog_rows(&catalog, true).expect("rows");
        assert!(rows[0].starts_with("broken") && rows[0].ends_with("(no Dockerfile)"));
        assert!(rows[1].ends_with(&dir.path().join("node/Dockerfile").display().to_string()));
    }

    #[test]
    fn execute_lists_existing_catalog() {
        let dir = catalog_dir();
        let args = ImagesArgs { paths: true };
        assert!(execute(args, &config_for(dir.path())).is_ok());
    }

    #[test]
    fn execute_fails_when_catalog_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing");
        let err = execute(ImagesArgs { paths: true }, &config_for(&missing)).unwrap_err();
        assert!(err.to_string().contains("unavailable"), "got: {err}");
    }
}
