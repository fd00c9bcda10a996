//! Build-argument construction and serialization.

use w3build_common::constants::MODULES_TO_BUILD_KEY;
use w3build_common::types::ModulesToBuild;

use crate::manifest::{BuildEnv, EnvValue};

/// Environment handed to the build image.
///
/// Built from the manifest's `env` section plus the derived
/// `modules_to_build` tag; the parsed manifest itself is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    entries: Vec<(String, EnvValue)>,
}

impl BuildArgs {
    /// Combines the manifest environment with the module tag.
    ///
    /// A `modules_to_build` entry already present in the manifest is
    /// overwritten in place, so the key appears exactly once.
    #[must_use]
    pub fn new(env: &BuildEnv, modules: ModulesToBuild) -> Self {
        let mut entries = env.entries().to_vec();
        let tag = EnvValue::Scalar(modules.as_str().to_string());
        match entries.iter_mut().find(|(key, _)| key == MODULES_TO_BUILD_KEY) {
            Some((_, value)) => *value = tag,
            None => entries.push((MODULES_TO_BUILD_KEY.to_string(), tag)),
        }
        Self { entries }
    }

    /// Flattens the entries into key/value pairs; list values repeat their key.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|(key, value)| {
            value
                .as_slice()
                .iter()
                .map(move |v| (key.as_str(), v.as_str()))
        })
    }
}

/// Renders [`BuildArgs`] into the argument string for a build invocation.
pub trait EnvSerializer {
    /// Serializes every pair of `args` in order.
    fn serialize(&self, args: &BuildArgs) -> String;
}

/// Docker-style `--build-arg KEY=VALUE` serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerBuildArgs;

impl EnvSerializer for DockerBuildArgs {
    fn serialize(&self, args: &BuildArgs) -> String {
        args.pairs()
            .map(|(key, value)| format!("--build-arg {key}={}", quote(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if !needs_quotes {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
