//! # w3build-manifest
//!
//! Turns a `web3api.build.yaml` manifest into a [`BuildPlan`].
//!
//! Handles:
//! - **Manifest**: Loading and typed access to the `image` and `env` sections.
//! - **Catalog**: Resolving symbolic image names to packaged Dockerfiles.
//! - **Args**: Serializing the build environment into build arguments.
//! - **Resolver**: The validation and resolution pipeline.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

pub mod args;
pub mod catalog;
pub mod manifest;
pub mod resolver;

pub use args::{BuildArgs, DockerBuildArgs, EnvSerializer};
pub use catalog::{CatalogLookup, DirectoryCatalog};
pub use manifest::{BuildEnv, EnvValue, ImageSection, Manifest};
pub use resolver::{BuildPlan, ManifestResolver};
