//! Packaged image catalog.
//!
//! The catalog is a directory with one subdirectory per image, each holding
//! a `Dockerfile`:
//!
//! ```text
//! build-env/images/
//! ├── node/Dockerfile
//! └── rust/Dockerfile
//! ```

use std::path::{Component, Path, PathBuf};

use w3build_common::constants::DOCKERFILE;
use w3build_common::error::{BuildError, Result};

/// Resolves symbolic image names to Dockerfiles.
pub trait CatalogLookup {
    /// Returns the Dockerfile path for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownCatalogImage`] listing the available
    /// names, or [`BuildError::CatalogUnavailable`] if the catalog cannot be
    /// listed.
    fn lookup(&self, name: &str) -> Result<PathBuf>;

    /// Lists the names of every catalog entry, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::CatalogUnavailable`] if the catalog cannot be
    /// listed.
    fn available(&self) -> Result<Vec<String>>;
}

/// Catalog backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    base: PathBuf,
}

impl DirectoryCatalog {
    /// Creates a catalog rooted at `base`. Nothing is read until lookup.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the catalog base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn unavailable(&self, source: std::io::Error) -> BuildError {
        BuildError::CatalogUnavailable {
            path: self.base.clone(),
            source,
        }
    }
}

impl CatalogLookup for DirectoryCatalog {
    fn lookup(&self, name: &str) -> Result<PathBuf> {
        let available = self.available()?;
        if is_entry_name(name) {
            let dockerfile = self.base.join(name).join(DOCKERFILE);
            if dockerfile.is_file() {
                tracing::debug!(name, path = %dockerfile.display(), "resolved catalog image");
                return Ok(dockerfile);
            }
        }
        tracing::debug!(name, catalog = %self.base.display(), "catalog image not found");
        Err(BuildError::UnknownCatalogImage {
            name: name.to_string(),
            available,
        })
    }

    fn available(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.base).map_err(|e| self.unavailable(e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.unavailable(e))?;
            // Follows symlinks; packaged images are often linked in.
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// A catalog name is a single plain path component.
pub(crate) fn is_entry_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(images: &[&str]) -> (tempfile::TempDir, DirectoryCatalog) {
        let dir = tempfile::tempdir().expect("tempdir");
        for image in images {
            let image_dir = dir.path().join(image);
            std::fs::create_dir_all(&image_dir).expect("mkdir");
            std::fs::write(image_dir.join("Dockerfile"), "FROM scratch\n").expect("write");
        }
        let catalog = DirectoryCatalog::new(dir.path());
        (dir, catalog)
    }

    #[test]
    fn lookup_existing_image_returns_dockerfile() {
        let (dir, catalog) = catalog_with(&["node"]);
        let path = catalog.lookup("node").expect("lookup");
        assert_eq!(path, dir.path().join("node").join("Dockerfile"));
    }

    #[test]
    fn lookup_unknown_image_lists_entries() {
        let (_dir, catalog) = catalog_with(&["rust", "node"]);
        let err = catalog.lookup("python").unwrap_err();
        match err {
            BuildError::UnknownCatalogImage { name, available } => {
                assert_eq!(name, "python");
                assert_eq!(available, ["node", "rust"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lookup_directory_without_dockerfile_is_unknown() {
        let (dir, catalog) = catalog_with(&["node"]);
        std::fs::create_dir(dir.path().join("empty")).expect("mkdir");
        let err = catalog.lookup("empty").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("empty, node"), "got: {msg}");
    }

    #[test]
    fn lookup_rejects_path_traversal() {
        let (_dir, catalog) = catalog_with(&["node"]);
        assert!(catalog.lookup("../node").is_err());
        assert!(catalog.lookup("node/../node").is_err());
        assert!(catalog.lookup("").is_err());
    }

    #[test]
    fn available_skips_plain_files() {
        let (dir, catalog) = catalog_with(&["node"]);
        std::fs::write(dir.path().join("README.md"), "catalog").expect("write");
        assert_eq!(catalog.available().expect("available"), ["node"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_image_is_listed_and_resolved() {
        let dir = tempfile::tempdir().expect("tempdir");
        let installed = dir.path().join("installed/node");
        std::fs::create_dir_all(&installed).expect("mkdir");
        std::fs::write(installed.join("Dockerfile"), "FROM node\n").expect("write");
        let base = dir.path().join("images");
        std::fs::create_dir(&base).expect("mkdir");
        std::os::unix::fs::symlink(&installed, base.join("node")).expect("symlink");
        let catalog = DirectoryCatalog::new(&base);

        assert_eq!(catalog.available().expect("available"), ["node"]);
        assert_eq!(
            catalog.lookup("node").expect("lookup"),
            base.join("node").join("Dockerfile")
        );
        let msg = catalog.lookup("rust").unwrap_err().to_string();
        assert!(msg.ends_with("one of the following: node"), "got: {msg}");
    }

    #[test]
    fn missing_catalog_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = DirectoryCatalog::new(dir.path().join("missing"));
        let err = catalog.lookup("node").unwrap_err();
        assert!(matches!(err, BuildError::CatalogUnavailable { .. }));
    }
}
