//! File names, directory names, and reserved keys.

use std::path::PathBuf;

/// Build manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "web3api.build.yaml";

/// Tool cache directory created under the working directory.
pub const CACHE_DIR: &str = ".w3";

/// Subdirectory of [`CACHE_DIR`] holding per-image build directories.
pub const BUILD_SUBDIR: &str = "build";

/// File name every catalog image directory must contain.
pub const DOCKERFILE: &str = "Dockerfile";

/// Reserved env key carrying the derived module tag.
pub const MODULES_TO_BUILD_KEY: &str = "modules_to_build";

/// Reserved env key naming the source directory to build.
pub const BUILD_DIR_KEY: &str = "buildDir";

/// Reserved env key listing paths excluded from the build context.
pub const IGNORE_PATHS_KEY: &str = "ignorePaths";

/// Catalog location relative to the installed binary (or working directory).
pub const CATALOG_SUBPATH: &str = "build-env/images";

/// Returns the default catalog directory.
///
/// Prefers `build-env/images` next to the running executable, falling back
/// to the same path relative to the working directory.
pub fn default_catalog_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CATALOG_SUBPATH)))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(CATALOG_SUBPATH))
}
