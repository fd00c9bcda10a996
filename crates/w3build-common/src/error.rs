//! Unified error types for the w3build workspace.
//!
//! Every variant is fatal: resolution aborts on the first error and the
//! caller is expected to report it and exit.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The manifest file could not be read.
    #[error("failed to read build manifest {path}: {source}")]
    ManifestRead {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is not valid YAML or does not match the expected shape.
    #[error("failed to parse build manifest {path}: {source}")]
    ManifestParse {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// A manifest field holds a value the resolver cannot use.
    #[error("invalid build manifest: {message}")]
    InvalidManifest {
        /// Description of the offending field.
        message: String,
    },

    /// Neither `query` nor `mutation` was requested.
    #[error("no modules to build declared")]
    NoModulesSelected,

    /// The Dockerfile is neither an existing path nor a catalog image.
    #[error(
        "image \"{name}\" does not exist, please use one of the following: {}",
        format_available(.available)
    )]
    UnknownCatalogImage {
        /// Requested image name.
        name: String,
        /// Catalog entries present at lookup time.
        available: Vec<String>,
    },

    /// The catalog base directory is missing or unreadable.
    #[error("image catalog at {path} is unavailable: {source}")]
    CatalogUnavailable {
        /// Catalog base directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// `env.buildDir` is missing or empty.
    #[error("no build directory specified (set env.buildDir in the build manifest)")]
    MissingBuildDirectory,
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(catalog is empty)".to_string()
    } else {
        available.join(", ")
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_image_lists_every_entry() {
        let err = BuildError::UnknownCatalogImage {
            name: "rust".into(),
            available: vec!["as".into(), "node".into()],
        };
        assert_eq!(
            err.to_string(),
            "image \"rust\" does not exist, please use one of the following: as, node"
        );
    }

    #[test]
    fn unknown_image_with_empty_catalog() {
        let err = BuildError::UnknownCatalogImage {
            name: "rust".into(),
            available: Vec::new(),
        };
        assert!(err.to_string().ends_with("(catalog is empty)"));
    }

    #[test]
    fn missing_build_dir_mentions_key() {
        let msg = BuildError::MissingBuildDirectory.to_string();
        assert!(msg.contains("env.buildDir"), "got: {msg}");
    }
}
