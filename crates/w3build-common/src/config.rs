//! Configuration model for a single resolution run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the resolver reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory the build was invoked from. Relative Dockerfile paths,
    /// the manifest, and the temp build directory are resolved against it.
    pub working_dir: PathBuf,
    /// Manifest file name, relative to `working_dir`.
    pub manifest_file: PathBuf,
    /// Base directory of the image catalog.
    pub catalog_dir: PathBuf,
}

impl BuildConfig {
    /// Creates a config rooted at `working_dir` with default file names.
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Self::default()
        }
    }

    /// Returns the absolute path of the manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.working_dir.join(&self.manifest_file)
    }

    /// Returns `<working_dir>/.w3/build/<image_name>`.
    #[must_use]
    pub fn temp_dir_for(&self, image_name: &str) -> PathBuf {
        temp_dir_for(&self.working_dir, image_name)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            manifest_file: PathBuf::from(constants::MANIFEST_FILE),
            catalog_dir: constants::default_catalog_dir(),
        }
    }
}

fn temp_dir_for(working_dir: &Path, image_name: &str) -> PathBuf {
    working_dir
        .join(constants::CACHE_DIR)
        .join(constants::BUILD_SUBDIR)
        .join(image_name)
}
