//! The `web3api.build.yaml` document.
//!
//! Only the fields needed to resolve a build are modeled. The `env` section
//! is an open mapping: `buildDir` and `ignorePaths` are lifted into typed
//! fields, and every entry (reserved or not) is kept in document order so it
//! can be passed through as a build argument.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use w3build_common::constants::{BUILD_DIR_KEY, IGNORE_PATHS_KEY};
use w3build_common::error::{BuildError, Result};

/// Parsed build manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Image to build.
    pub image: ImageSection,
    /// Build environment.
    #[serde(default)]
    pub env: BuildEnv,
}

/// The `image` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSection {
    /// Path to a Dockerfile, or the name of a catalog image.
    pub dockerfile: String,
    /// Tag of the output image.
    pub name: String,
}

impl Manifest {
    /// Parses a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the text is malformed or a field has the
    /// wrong shape.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ManifestRead`] if the file cannot be read and
    /// [`BuildError::ManifestParse`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading build manifest");
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| BuildError::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Value of a single `env` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// A single value. YAML numbers and booleans are kept as their text.
    Scalar(String),
    /// A sequence of values.
    List(Vec<String>),
}

impl EnvValue {
    /// Returns every value, one element for scalars.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }

    fn from_yaml(key: &str, value: &Value) -> std::result::Result<Self, String> {
        if let Value::Sequence(items) = value {
            let values = items
                .iter()
                .map(|item| {
                    scalar_text(item)
                        .ok_or_else(|| format!("env.{key} may only contain scalar values"))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            return Ok(Self::List(values));
        }
        scalar_text(value)
            .map(Self::Scalar)
            .ok_or_else(|| format!("env.{key} must be a string or a list of strings"))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The `env` section with its reserved keys lifted out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct BuildEnv {
    build_dir: Option<String>,
    ignore_paths: Vec<String>,
    entries: Vec<(String, EnvValue)>,
}

impl BuildEnv {
    /// Returns `buildDir`, if declared.
    #[must_use]
    pub fn build_dir(&self) -> Option<&str> {
        self.build_dir.as_deref()
    }

    /// Returns `ignorePaths` in declaration order; empty when absent.
    #[must_use]
    pub fn ignore_paths(&self) -> &[String] {
        &self.ignore_paths
    }

    /// Returns every entry, reserved keys included, in document order.
    #[must_use]
    pub fn entries(&self) -> &[(String, EnvValue)] {
        &self.entries
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl TryFrom<Mapping> for BuildEnv {
    type Error = String;

    fn try_from(mapping: Mapping) -> std::result::Result<Self, Self::Error> {
        let mut env = Self::default();
        for (key, value) in &mapping {
            let Value::String(key) = key else {
                return Err(format!("env keys must be strings, found {key:?}"));
            };
            let value = EnvValue::from_yaml(key, value)?;
            match (key.as_str(), &value) {
                (BUILD_DIR_KEY, EnvValue::Scalar(dir)) => env.build_dir = Some(dir.clone()),
                (BUILD_DIR_KEY, EnvValue::List(_)) => {
                    return Err(format!("env.{BUILD_DIR_KEY} must be a single path"));
                }
                (IGNORE_PATHS_KEY, EnvValue::List(paths)) => env.ignore_paths.clone_from(paths),
                (IGNORE_PATHS_KEY, EnvValue::Scalar(_)) => {
                    return Err(format!("env.{IGNORE_PATHS_KEY} must be a list of paths"));
                }
                _ => {}
            }
            env.entries.push((key.clone(), value));
        }
        Ok(env)
    }
}
