//! Build plan resolution.
//!
//! Pipeline: load manifest → derive module tag → resolve Dockerfile (direct
//! path, then catalog) → validate build directory → serialize build
//! arguments → assemble [`BuildPlan`]. Every failure aborts resolution.

use std::path::PathBuf;

use serde::Serialize;
use w3build_common::config::BuildConfig;
use w3build_common::error::{BuildError, Result};
use w3build_common::types::{ModuleKind, ModulesToBuild};

use crate::args::{BuildArgs, DockerBuildArgs, EnvSerializer};
use crate::catalog::{CatalogLookup, DirectoryCatalog, is_entry_name};
use crate::manifest::Manifest;

/// Everything an image build needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    /// Scratch directory for this image: `<cwd>/.w3/build/<name>`.
    pub temp_dir: PathBuf,
    /// Dockerfile to build from.
    pub dockerfile: PathBuf,
    /// Directory holding the sources to build.
    pub build_dir: PathBuf,
    /// Serialized build arguments.
    pub args: String,
    /// Tag of the output image.
    pub output_image_name: String,
    /// Patterns excluded from the build context, in manifest order.
    pub ignore_paths: Vec<String>,
}

/// Resolves the manifest in a working directory into a [`BuildPlan`].
#[derive(Debug, Clone)]
pub struct ManifestResolver<C = DirectoryCatalog, S = DockerBuildArgs> {
    config: BuildConfig,
    catalog: C,
    serializer: S,
}

impl ManifestResolver {
    /// Creates a resolver using the on-disk catalog from `config` and
    /// Docker-style build arguments.
    #[must_use]
    pub fn from_config(config: BuildConfig) -> Self {
        let catalog = DirectoryCatalog::new(config.catalog_dir.clone());
        Self::new(config, catalog, DockerBuildArgs)
    }
}

impl<C: CatalogLookup, S: EnvSerializer> ManifestResolver<C, S> {
    /// Creates a resolver with explicit collaborators.
    pub const fn new(config: BuildConfig, catalog: C, serializer: S) -> Self {
        Self {
            config,
            catalog,
            serializer,
        }
    }

    /// Returns the catalog used for symbolic Dockerfile names.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Loads the manifest from the working directory and resolves it.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded or if
    /// [`Self::resolve_manifest`] fails.
    pub fn resolve(&self, modules: &[ModuleKind]) -> Result<BuildPlan> {
        let manifest = Manifest::load(&self.config.manifest_path())?;
        self.resolve_manifest(&manifest, modules)
    }

    /// Resolves an already loaded manifest.
    ///
    /// # Errors
    ///
    /// - [`BuildError::NoModulesSelected`] if `modules` is empty.
    /// - [`BuildError::InvalidManifest`] if the Dockerfile is empty or the image
    ///   name is not a single path component.
    /// - Any catalog error when the Dockerfile is not an existing path.
    /// - [`BuildError::MissingBuildDirectory`] if `env.buildDir` is missing or empty.
    pub fn resolve_manifest(
        &self,
        manifest: &Manifest,
        modules: &[ModuleKind],
    ) -> Result<BuildPlan> {
        let tag = ModulesToBuild::from_selection(modules)?;
        tracing::debug!(modules = %tag, "derived module tag");

        let image = &manifest.image;
        if image.name.trim().is_empty() || !is_entry_name(&image.name) {
            return Err(BuildError::InvalidManifest {
                message: format!(
                    "image.name \"{}\" must be a non-empty name without path separators",
                    image.name
                ),
            });
        }
        if image.dockerfile.trim().is_empty() {
            return Err(BuildError::InvalidManifest {
                message: "image.dockerfile must not be empty".into(),
            });
        }

        let temp_dir = self.config.temp_dir_for(&image.name);
        let dockerfile = self.resolve_dockerfile(&image.dockerfile)?;

        let build_dir = match manifest.env.build_dir() {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => return Err(BuildError::MissingBuildDirectory),
        };

        let args = self
            .serializer
            .serialize(&BuildArgs::new(&manifest.env, tag));

        tracing::info!(
            image = %image.name,
            dockerfile = %dockerfile.display(),
            build_dir = %build_dir.display(),
            "resolved build plan"
        );

        Ok(BuildPlan {
            temp_dir,
            dockerfile,
            build_dir,
            args,
            output_image_name: image.name.clone(),
            ignore_paths: manifest.env.ignore_paths().to_vec(),
        })
    }

    /// An existing path is used verbatim; anything else is a catalog name.
    fn resolve_dockerfile(&self, dockerfile: &str) -> Result<PathBuf> {
        if self.config.working_dir.join(dockerfile).exists() {
            tracing::debug!(path = dockerfile, "using Dockerfile from working directory");
            return Ok(PathBuf::from(dockerfile));
        }
        tracing::debug!(name = dockerfile, "Dockerfile not found on disk, checking catalog");
        self.catalog.lookup(dockerfile)
    }
}
